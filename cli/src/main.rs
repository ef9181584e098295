// Copyright 2022 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod actions;
mod data;
mod error;

use clap::ArgMatches;
use flexi_logger::{DeferredNow, LogSpecBuilder, Logger};
use gs1_catalog_sdk::gtin::BarcodeType;
use gs1_catalog_sdk::products::{ProductDraft, ProductFilter, ProductStatus, Unit};
use log::Record;

use crate::error::CliError;

use actions::{gtin, manufacturers, products, required_value, OutputFormat};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const AFTER_HELP_WITH_DATA: &str = "ENVIRONMENT:
    GS1_CATALOG_DATA       Specifies a default value for --data";

// log format for cli that will only show the log message
pub fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{}", record.args(),)
}

fn run() -> Result<(), CliError> {
    let app = clap_app!(myapp =>
        (name: APP_NAME)
        (version: VERSION)
        (author: "Cargill Incorporated")
        (about: "Command line for the national GS1 product catalog")
        (@setting SubcommandRequiredElseHelp)
        (@arg verbose: -v +multiple +global "Log verbosely")
        (@arg quiet: -q --quiet +global conflicts_with[verbose] "Do not display output")
        (@arg data: --data +takes_value "Path to the catalog data file")
        (@subcommand gtin =>
            (about: "Generate and validate GTIN-13 barcodes")
            (@setting SubcommandRequiredElseHelp)
            (@subcommand generate =>
                (about: "Generate the GTIN-13 for a GCP and sequence number")
                (@arg gcp: --gcp +takes_value +required "Global Company Prefix, starting with 483")
                (@arg gcp_type: --("gcp-type") +takes_value +required
                    "Number of digits in the GCP, from 8 to 12")
                (@arg sequence: --sequence +takes_value +required
                    "Sequence number of the product within the GCP")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand check_digit =>
                (name: "check-digit")
                (about: "Compute the check digit for the first 12 digits of a GTIN-13")
                (@arg digits: +required "The first 12 digits")
            )
            (@subcommand validate =>
                (about: "Validate one or more barcodes")
                (@arg gtins: +required +multiple "Barcodes to validate")
                (@arg barcode_type: --("barcode-type") +takes_value
                    "Barcode symbology, EAN-13 or EAN-8; defaults to EAN-13")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand capacity =>
                (about: "Show how many products each GCP type can address")
                (@arg gcp_type: --("gcp-type") +takes_value
                    "Only show this GCP type")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
        )
        (@subcommand manufacturer =>
            (about: "List or show manufacturers")
            (@setting SubcommandRequiredElseHelp)
            (@subcommand list =>
                (about: "List manufacturers and their barcode quotas")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand show =>
                (about: "Show a manufacturer")
                (@arg manufacturer_id: +required "ID of the manufacturer")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
        )
        (@subcommand product =>
            (about: "Register, list, show, verify or reject products")
            (@setting SubcommandRequiredElseHelp)
            (@subcommand list =>
                (about: "List products")
                (@arg status: --status +takes_value possible_value[pending verified rejected]
                    "Only list products with this status")
                (@arg search: --search +takes_value
                    "Only list products whose name, brand, GTIN or manufacturer name contains the text")
                (@arg manufacturer: --manufacturer +takes_value
                    "Only list products of this manufacturer")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand show =>
                (about: "Show a product")
                (@arg product_id: required_unless[gtin] "ID of the product")
                (@arg gtin: --gtin +takes_value conflicts_with[product_id]
                    "Look the product up by its GTIN instead")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand stats =>
                (about: "Count products by verification status")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand preview =>
                (about: "Show the GTIN the manufacturer's next product would receive")
                (@arg manufacturer: --manufacturer +takes_value +required
                    "ID of the manufacturer")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand create =>
                (about: "Register a product and generate its GTIN")
                (@arg manufacturer: --manufacturer +takes_value +required
                    "ID of the manufacturer")
                (@arg name: --name +takes_value +required "Product name")
                (@arg brand: --brand +takes_value +required "Brand")
                (@arg weight: --weight +takes_value +required "Net weight or volume")
                (@arg unit: --unit +takes_value possible_value[kg g l ml pcs]
                    "Unit of the weight; defaults to pcs")
                (@arg packaging: --packaging +takes_value +required "Packaging type")
                (@arg food: --food "The product is a food product")
                (@arg shelf_life: --("shelf-life") +takes_value requires[food]
                    "Shelf life; required for food products")
                (@arg image_url: --("image-url") +takes_value "Location of the product image")
                (@arg format: --format +takes_value possible_value[human json]
                    "Output format; defaults to human")
            )
            (@subcommand verify =>
                (about: "Mark a pending product as verified by GS1")
                (@arg product_id: +required "ID of the product")
            )
            (@subcommand reject =>
                (about: "Mark a pending product as rejected")
                (@arg product_id: +required "ID of the product")
            )
        )
    )
    .after_help(AFTER_HELP_WITH_DATA);

    let matches = app.get_matches();

    let log_level = if matches.is_present("quiet") {
        log::LevelFilter::Error
    } else {
        match matches.occurrences_of("verbose") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(log_level);

    Logger::with(log_spec_builder.build())
        .format(log_format)
        .start()?;

    match matches.subcommand() {
        ("gtin", Some(m)) => match m.subcommand() {
            ("generate", Some(m)) => gtin::do_generate(
                required_value(m, "gcp")?,
                gtin::parse_gcp_type(required_value(m, "gcp_type")?)?,
                gtin::parse_sequence_number(required_value(m, "sequence")?)?,
                OutputFormat::from_matches(m)?,
            )?,
            ("check-digit", Some(m)) => gtin::do_check_digit(required_value(m, "digits")?)?,
            ("validate", Some(m)) => {
                let barcode_type = match m.value_of("barcode_type") {
                    Some(value) => value
                        .parse::<BarcodeType>()
                        .map_err(|err| CliError::UserError(err.to_string()))?,
                    None => BarcodeType::Ean13,
                };
                let candidates = m.values_of("gtins").unwrap_or_default().collect::<Vec<_>>();
                gtin::do_validate(&candidates, barcode_type, OutputFormat::from_matches(m)?)?
            }
            ("capacity", Some(m)) => {
                let gcp_type = match m.value_of("gcp_type") {
                    Some(value) => Some(gtin::parse_gcp_type(value)?),
                    None => None,
                };
                gtin::do_capacity(gcp_type, OutputFormat::from_matches(m)?)?
            }
            _ => unreachable!(),
        },
        ("manufacturer", Some(m)) => {
            let catalog = data::load_catalog(matches.value_of("data"))?;

            match m.subcommand() {
                ("list", Some(m)) => {
                    manufacturers::do_list_manufacturers(&catalog, OutputFormat::from_matches(m)?)?
                }
                ("show", Some(m)) => manufacturers::do_show_manufacturer(
                    &catalog,
                    required_value(m, "manufacturer_id")?,
                    OutputFormat::from_matches(m)?,
                )?,
                _ => unreachable!(),
            }
        }
        ("product", Some(m)) => {
            let catalog = data::load_catalog(matches.value_of("data"))?;

            match m.subcommand() {
                ("list", Some(m)) => products::do_list_products(
                    &catalog,
                    &parse_filter(m)?,
                    OutputFormat::from_matches(m)?,
                )?,
                ("show", Some(m)) => match m.value_of("gtin") {
                    Some(gtin) => products::do_show_product_by_gtin(
                        &catalog,
                        gtin,
                        OutputFormat::from_matches(m)?,
                    )?,
                    None => products::do_show_product(
                        &catalog,
                        required_value(m, "product_id")?,
                        OutputFormat::from_matches(m)?,
                    )?,
                },
                ("stats", Some(m)) => {
                    products::do_product_stats(&catalog, OutputFormat::from_matches(m)?)?
                }
                ("preview", Some(m)) => products::do_preview_gtin(
                    &catalog,
                    required_value(m, "manufacturer")?,
                    OutputFormat::from_matches(m)?,
                )?,
                ("create", Some(m)) => products::do_create_product(
                    &catalog,
                    required_value(m, "manufacturer")?,
                    parse_draft(m)?,
                    OutputFormat::from_matches(m)?,
                )?,
                ("verify", Some(m)) => {
                    products::do_verify_product(&catalog, required_value(m, "product_id")?)?
                }
                ("reject", Some(m)) => {
                    products::do_reject_product(&catalog, required_value(m, "product_id")?)?
                }
                _ => unreachable!(),
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn parse_filter(m: &ArgMatches) -> Result<ProductFilter, CliError> {
    let mut filter = ProductFilter::new();
    if let Some(status) = m.value_of("status") {
        let status = status
            .parse::<ProductStatus>()
            .map_err(|err| CliError::UserError(err.to_string()))?;
        filter = filter.with_status(status);
    }
    if let Some(search) = m.value_of("search") {
        filter = filter.with_search(search.to_string());
    }
    if let Some(manufacturer_id) = m.value_of("manufacturer") {
        filter = filter.with_manufacturer_id(manufacturer_id.to_string());
    }
    Ok(filter)
}

fn parse_draft(m: &ArgMatches) -> Result<ProductDraft, CliError> {
    let unit = match m.value_of("unit") {
        Some(unit) => unit
            .parse::<Unit>()
            .map_err(|err| CliError::UserError(err.to_string()))?,
        None => Unit::default(),
    };

    Ok(ProductDraft {
        name: required_value(m, "name")?.to_string(),
        brand: required_value(m, "brand")?.to_string(),
        weight: required_value(m, "weight")?.to_string(),
        unit,
        packaging: required_value(m, "packaging")?.to_string(),
        is_food_product: m.is_present("food"),
        shelf_life: m.value_of("shelf_life").map(String::from),
        image_url: m.value_of("image_url").map(String::from),
    })
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
