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

use gs1_catalog_sdk::catalog::ProductCatalog;
use gs1_catalog_sdk::manufacturers::Manufacturer;

use crate::actions::{print_json, OutputFormat};
use crate::error::CliError;

/**
 * Print the basic information for a list of manufacturers
 *
 * manufacturers - Manufacturers to be printed
 */
pub fn display_manufacturers_info(manufacturers: &[Manufacturer]) {
    // Widest GCP, so the columns after it stay aligned
    const GCP_LENGTH: usize = 12;
    let id_length = column_width(manufacturers.iter().map(|m| m.manufacturer_id()), "ID");
    let name_length = column_width(manufacturers.iter().map(|m| m.name()), "NAME");

    println!(
        "{:<id$} {:<name$} {:<gcp$} {:<4} {:<9} {:<6} NEXT",
        "ID",
        "NAME",
        "GCP",
        "TYPE",
        "AVAILABLE",
        "USED",
        id = id_length,
        name = name_length,
        gcp = GCP_LENGTH,
    );
    manufacturers.iter().for_each(|manufacturer| {
        println!(
            "{:<id$} {:<name$} {:<gcp$} {:<4} {:<9} {:<6} {}",
            manufacturer.manufacturer_id(),
            manufacturer.name(),
            manufacturer.gcp(),
            manufacturer.gcp_type().to_string(),
            manufacturer.available_barcodes(),
            manufacturer.used_barcodes(),
            manufacturer.next_sequence_number(),
            id = id_length,
            name = name_length,
            gcp = GCP_LENGTH,
        )
    });
}

/**
 * Print the fields for a given manufacturer
 *
 * manufacturer - Manufacturer to be printed
 */
pub fn display_manufacturer(manufacturer: &Manufacturer) {
    println!(
        "Manufacturer Id: {}\n Name: {}\n GCP: {}\n GCP Type: {}\n Available Barcodes: {}\n Used Barcodes: {}\n Next Sequence Number: {}",
        manufacturer.manufacturer_id(),
        manufacturer.name(),
        manufacturer.gcp(),
        manufacturer.gcp_type(),
        manufacturer.available_barcodes(),
        manufacturer.used_barcodes(),
        manufacturer.next_sequence_number(),
    );
}

pub fn do_list_manufacturers(
    catalog: &ProductCatalog,
    format: OutputFormat,
) -> Result<(), CliError> {
    let manufacturers = catalog.list_manufacturers()?;
    match format {
        OutputFormat::Human => display_manufacturers_info(&manufacturers),
        OutputFormat::Json => print_json(&manufacturers)?,
    }
    Ok(())
}

pub fn do_show_manufacturer(
    catalog: &ProductCatalog,
    manufacturer_id: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let manufacturer = catalog.fetch_manufacturer(manufacturer_id)?;
    match format {
        OutputFormat::Human => display_manufacturer(&manufacturer),
        OutputFormat::Json => print_json(&manufacturer)?,
    }
    Ok(())
}

/// Returns the width of a table column: its widest value or its header.
pub(crate) fn column_width<'a, I>(values: I, header: &str) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values.map(str::len).max().unwrap_or(0).max(header.len())
}
