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

//! Loading the catalog from its YAML data file.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use gs1_catalog_sdk::catalog::ProductCatalog;
use gs1_catalog_sdk::gtin::{BarcodeType, GcpType};
use gs1_catalog_sdk::manufacturers::{
    Manufacturer, ManufacturerBuilder, ManufacturerRegistry, MemoryManufacturerRegistry,
};
use gs1_catalog_sdk::products::{
    MemoryProductStore, Product, ProductBuilder, ProductStatus, ProductStore, Unit,
};
use serde::Deserialize;

use crate::error::CliError;

pub const GS1_CATALOG_DATA: &str = "GS1_CATALOG_DATA";

const DATA_DIR: &str = "gs1-catalog";
const DATA_FILE: &str = "catalog.yaml";

#[derive(Debug, Default, Deserialize)]
struct CatalogYaml {
    #[serde(default)]
    manufacturers: Vec<ManufacturerYaml>,
    #[serde(default)]
    products: Vec<ProductYaml>,
}

#[derive(Debug, Deserialize)]
struct ManufacturerYaml {
    manufacturer_id: String,
    name: String,
    gcp: String,
    gcp_type: GcpType,
    #[serde(default)]
    available_barcodes: u32,
    #[serde(default)]
    used_barcodes: u32,
    next_sequence_number: Option<u32>,
}

impl ManufacturerYaml {
    fn into_manufacturer(self) -> Result<Manufacturer, CliError> {
        let manufacturer_id = self.manufacturer_id.clone();
        let mut builder = ManufacturerBuilder::new()
            .with_manufacturer_id(self.manufacturer_id)
            .with_name(self.name)
            .with_gcp(self.gcp, self.gcp_type)
            .with_available_barcodes(self.available_barcodes)
            .with_used_barcodes(self.used_barcodes);
        if let Some(next_sequence_number) = self.next_sequence_number {
            builder = builder.with_next_sequence_number(next_sequence_number);
        }

        builder.build().map_err(|err| {
            CliError::InvalidYamlError(format!("Manufacturer {}: {}", manufacturer_id, err))
        })
    }
}

#[derive(Debug, Deserialize)]
struct ProductYaml {
    product_id: String,
    name: String,
    brand: String,
    weight: String,
    #[serde(default)]
    unit: Unit,
    packaging: String,
    shelf_life: Option<String>,
    image_url: Option<String>,
    gtin: String,
    #[serde(default)]
    barcode_type: BarcodeType,
    #[serde(default)]
    status: ProductStatus,
    manufacturer_id: String,
    #[serde(default)]
    created_at: i64,
}

impl ProductYaml {
    fn into_product(self) -> Result<Product, CliError> {
        let product_id = self.product_id.clone();
        ProductBuilder::new()
            .with_product_id(self.product_id)
            .with_name(self.name)
            .with_brand(self.brand)
            .with_weight(self.weight, self.unit)
            .with_packaging(self.packaging)
            .with_shelf_life(self.shelf_life)
            .with_image_url(self.image_url)
            .with_gtin(self.gtin, self.barcode_type)
            .with_status(self.status)
            .with_manufacturer_id(self.manufacturer_id)
            .with_created_at(self.created_at)
            .build()
            .map_err(|err| CliError::InvalidYamlError(format!("Product {}: {}", product_id, err)))
    }
}

impl CatalogYaml {
    fn into_catalog(self) -> Result<ProductCatalog, CliError> {
        let registry = MemoryManufacturerRegistry::new();
        for manufacturer in self.manufacturers {
            registry.add_manufacturer(manufacturer.into_manufacturer()?)?;
        }

        let store = MemoryProductStore::new();
        for product in self.products {
            if registry
                .fetch_manufacturer(&product.manufacturer_id)?
                .is_none()
            {
                return Err(CliError::InvalidYamlError(format!(
                    "Product {} refers to unknown manufacturer {}",
                    product.product_id, product.manufacturer_id
                )));
            }
            store.add_product(product.into_product()?)?;
        }

        Ok(ProductCatalog::new(Box::new(registry), Box::new(store)))
    }
}

/**
 * Load the catalog from its data file
 *
 * data - Path given on the command line, if any
 *
 * The path falls back to the GS1_CATALOG_DATA environment variable. If neither is set, the
 * data file in the user's configuration directory is used when it exists, otherwise the
 * catalog starts empty.
 */
pub fn load_catalog(data: Option<&str>) -> Result<ProductCatalog, CliError> {
    let explicit = data
        .map(String::from)
        .or_else(|| env::var(GS1_CATALOG_DATA).ok());

    let yaml = match explicit {
        Some(path) => read_catalog_file(Path::new(&path))?,
        None => match default_data_path() {
            Some(path) if path.exists() => read_catalog_file(&path)?,
            _ => {
                debug!("No catalog data file found, starting with an empty catalog");
                CatalogYaml::default()
            }
        },
    };

    yaml.into_catalog()
}

fn default_data_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(DATA_DIR);
        path.push(DATA_FILE);
        path
    })
}

fn read_catalog_file(path: &Path) -> Result<CatalogYaml, CliError> {
    debug!("Loading catalog data from {}", path.display());
    let file = File::open(path).map_err(|err| {
        CliError::UserError(format!(
            "Unable to open catalog data file {}: {}",
            path.display(),
            err
        ))
    })?;

    serde_yaml::from_reader(file)
        .map_err(|err| CliError::InvalidYamlError(format!("{}: {}", path.display(), err)))
}
