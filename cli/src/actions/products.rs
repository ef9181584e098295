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

use gs1_catalog_sdk::catalog::{ProductCatalog, ProductRegistration};
use gs1_catalog_sdk::products::{Product, ProductDraft, ProductFilter, StatusCounts};

use crate::actions::gtin::display_generation;
use crate::actions::manufacturers::column_width;
use crate::actions::{print_json, OutputFormat};
use crate::error::CliError;

/**
 * Print the basic information for a list of products
 *
 * products - Products to be printed
 */
pub fn display_products_info(products: &[Product]) {
    // GTIN-13 barcodes are 13 characters long; EAN-8 are shorter
    const GTIN_LENGTH: usize = 13;
    // Longest status name
    const STATUS_LENGTH: usize = "verified".len();
    let id_length = column_width(products.iter().map(|p| p.product_id()), "ID");
    let name_length = column_width(products.iter().map(|p| p.name()), "NAME");

    println!(
        "{:<id$} {:<gtin$} {:<status$} {:<name$} BRAND",
        "ID",
        "GTIN",
        "STATUS",
        "NAME",
        id = id_length,
        gtin = GTIN_LENGTH,
        status = STATUS_LENGTH,
        name = name_length,
    );
    products.iter().for_each(|product| {
        println!(
            "{:<id$} {:<gtin$} {:<status$} {:<name$} {}",
            product.product_id(),
            product.gtin(),
            product.status().to_string(),
            product.name(),
            product.brand(),
            id = id_length,
            gtin = GTIN_LENGTH,
            status = STATUS_LENGTH,
            name = name_length,
        )
    });
}

/**
 * Print the fields for a given product
 *
 * product - Product to be printed
 */
pub fn display_product(product: &Product) {
    println!(
        "Product Id: {}\n Name: {}\n Brand: {}\n Weight: {} {}\n Packaging: {}\n Shelf Life: {}\n Image URL: {}\n GTIN: {}\n Barcode Type: {}\n Status: {}\n Verified By GS1: {}\n Manufacturer Id: {}\n Created At: {}",
        product.product_id(),
        product.name(),
        product.brand(),
        product.weight(),
        product.unit(),
        product.packaging(),
        product.shelf_life().unwrap_or("-"),
        product.image_url().unwrap_or("-"),
        product.gtin(),
        product.barcode_type(),
        product.status(),
        product.verified_by_gs1(),
        product.manufacturer_id(),
        product.created_at(),
    );
}

pub fn display_status_counts(counts: &StatusCounts) {
    println!(
        "Total: {}\n Pending: {}\n Verified: {}\n Rejected: {}",
        counts.total, counts.pending, counts.verified, counts.rejected
    );
}

pub fn do_list_products(
    catalog: &ProductCatalog,
    filter: &ProductFilter,
    format: OutputFormat,
) -> Result<(), CliError> {
    let products = catalog.list_products(filter)?;
    match format {
        OutputFormat::Human => display_products_info(&products),
        OutputFormat::Json => print_json(&products)?,
    }
    Ok(())
}

pub fn do_show_product(
    catalog: &ProductCatalog,
    product_id: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let product = catalog.fetch_product(product_id)?;
    match format {
        OutputFormat::Human => display_product(&product),
        OutputFormat::Json => print_json(&product)?,
    }
    Ok(())
}

pub fn do_show_product_by_gtin(
    catalog: &ProductCatalog,
    gtin: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let product = catalog.fetch_product_by_gtin(gtin)?;
    match format {
        OutputFormat::Human => display_product(&product),
        OutputFormat::Json => print_json(&product)?,
    }
    Ok(())
}

pub fn do_product_stats(catalog: &ProductCatalog, format: OutputFormat) -> Result<(), CliError> {
    let counts = catalog.product_stats()?;
    match format {
        OutputFormat::Human => display_status_counts(&counts),
        OutputFormat::Json => print_json(&counts)?,
    }
    Ok(())
}

pub fn do_preview_gtin(
    catalog: &ProductCatalog,
    manufacturer_id: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let generation = catalog.preview_gtin(manufacturer_id)?;
    match format {
        OutputFormat::Human => display_generation(&generation),
        OutputFormat::Json => print_json(&generation)?,
    }
    Ok(())
}

/**
 * Register a new product and print it with its generated barcode
 *
 * catalog - Catalog loaded from the data file
 * manufacturer_id - Manufacturer whose GCP the barcode is generated from
 * draft - Product details entered by the user
 */
pub fn do_create_product(
    catalog: &ProductCatalog,
    manufacturer_id: &str,
    draft: ProductDraft,
    format: OutputFormat,
) -> Result<(), CliError> {
    let registration = catalog.create_product(manufacturer_id, draft)?;
    match format {
        OutputFormat::Human => display_registration(&registration),
        OutputFormat::Json => print_json(&registration)?,
    }
    Ok(())
}

fn display_registration(registration: &ProductRegistration) {
    display_product(&registration.product);
    println!(" Breakdown: {}", registration.generation.breakdown());
}

pub fn do_verify_product(catalog: &ProductCatalog, product_id: &str) -> Result<(), CliError> {
    let product = catalog.verify_product(product_id)?;
    println!("Product {} is now {}", product.product_id(), product.status());
    Ok(())
}

pub fn do_reject_product(catalog: &ProductCatalog, product_id: &str) -> Result<(), CliError> {
    let product = catalog.reject_product(product_id)?;
    println!("Product {} is now {}", product.product_id(), product.status());
    Ok(())
}
