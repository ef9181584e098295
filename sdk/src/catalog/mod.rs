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
//! Product registration over a manufacturer registry and a product store.

mod error;

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::error::InternalError;
use crate::gtin::{self, GenerationResult};
use crate::manufacturers::{
    Manufacturer, ManufacturerRegistry, ManufacturerRegistryError, SequenceReservation,
};
use crate::products::{
    Product, ProductBuilder, ProductDraft, ProductFilter, ProductStatus, ProductStore,
    ProductStoreError, StatusCounts,
};

pub use error::CatalogError;

/// A product saved by `ProductCatalog::create_product`, with the generation that produced its
/// barcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRegistration {
    pub product: Product,
    pub generation: GenerationResult,
}

/// Registers products for manufacturers and tracks their verification.
///
/// The catalog can be shared between threads. Sequence numbers come from the registry, which
/// allocates them atomically, so concurrent registrations never produce the same GTIN.
pub struct ProductCatalog {
    registry: Box<dyn ManufacturerRegistry>,
    store: Box<dyn ProductStore>,
}

impl ProductCatalog {
    pub fn new(registry: Box<dyn ManufacturerRegistry>, store: Box<dyn ProductStore>) -> Self {
        ProductCatalog { registry, store }
    }

    pub fn fetch_manufacturer(&self, manufacturer_id: &str) -> Result<Manufacturer, CatalogError> {
        self.registry
            .fetch_manufacturer(manufacturer_id)?
            .ok_or_else(|| {
                CatalogError::from(ManufacturerRegistryError::NotFoundError(format!(
                    "Manufacturer with manufacturer_id {} not found.",
                    manufacturer_id
                )))
            })
    }

    pub fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, CatalogError> {
        Ok(self.registry.list_manufacturers()?)
    }

    /// Generates the barcode the manufacturer's next product would receive, without reserving
    /// it.
    pub fn preview_gtin(&self, manufacturer_id: &str) -> Result<GenerationResult, CatalogError> {
        let manufacturer = self.fetch_manufacturer(manufacturer_id)?;
        if !manufacturer.has_quota() {
            return Err(CatalogError::from(
                ManufacturerRegistryError::QuotaExhaustedError(format!(
                    "Manufacturer {} has no barcodes left",
                    manufacturer_id
                )),
            ));
        }

        Ok(gtin::generate(
            manufacturer.gcp(),
            manufacturer.gcp_type(),
            manufacturer.next_sequence_number(),
        )?)
    }

    /// Registers a new pending product with a freshly generated GTIN.
    ///
    /// The draft is validated before anything is reserved. Once a sequence number has been
    /// reserved, any failure to generate or save releases it again.
    pub fn create_product(
        &self,
        manufacturer_id: &str,
        draft: ProductDraft,
    ) -> Result<ProductRegistration, CatalogError> {
        draft.validate()?;

        let reservation = self.registry.reserve_sequence(manufacturer_id)?;

        match self.register(&reservation, draft) {
            Ok(registration) => {
                info!(
                    "Registered product {} with GTIN {} for manufacturer {}",
                    registration.product.product_id(),
                    registration.generation.gtin(),
                    manufacturer_id
                );
                Ok(registration)
            }
            Err(err) => {
                warn!(
                    "Releasing sequence number {} of manufacturer {}: {}",
                    reservation.sequence_number, manufacturer_id, err
                );
                if let Err(release_err) = self.registry.release_sequence(&reservation) {
                    error!(
                        "Unable to release sequence number {} of manufacturer {}: {}",
                        reservation.sequence_number, manufacturer_id, release_err
                    );
                }
                Err(err)
            }
        }
    }

    fn register(
        &self,
        reservation: &SequenceReservation,
        draft: ProductDraft,
    ) -> Result<ProductRegistration, CatalogError> {
        let generation = gtin::generate(
            &reservation.gcp,
            reservation.gcp_type,
            reservation.sequence_number,
        )?;
        debug!(
            "Generated {} for sequence number {}",
            generation.breakdown(),
            reservation.sequence_number
        );

        let shelf_life = draft.effective_shelf_life();
        let product = ProductBuilder::new()
            .with_product_id(Uuid::new_v4().to_string())
            .with_name(draft.name)
            .with_brand(draft.brand)
            .with_weight(draft.weight, draft.unit)
            .with_packaging(draft.packaging)
            .with_shelf_life(shelf_life)
            .with_image_url(draft.image_url)
            .with_gtin(generation.gtin().to_string(), generation.barcode_type())
            .with_status(ProductStatus::Pending)
            .with_manufacturer_id(reservation.manufacturer_id.clone())
            .with_created_at(now()?)
            .build()?;

        self.store.add_product(product.clone())?;

        Ok(ProductRegistration {
            product,
            generation,
        })
    }

    pub fn fetch_product(&self, product_id: &str) -> Result<Product, CatalogError> {
        self.store.fetch_product(product_id)?.ok_or_else(|| {
            CatalogError::from(ProductStoreError::NotFoundError(format!(
                "Product with product_id {} not found.",
                product_id
            )))
        })
    }

    /// Looks up a product by its barcode.
    pub fn fetch_product_by_gtin(&self, gtin: &str) -> Result<Product, CatalogError> {
        self.store.fetch_product_by_gtin(gtin)?.ok_or_else(|| {
            CatalogError::from(ProductStoreError::NotFoundError(format!(
                "Product with GTIN {} not found.",
                gtin
            )))
        })
    }

    /// Lists the products matching the filter. Search text also matches the name of the
    /// product's manufacturer.
    pub fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        match filter.search() {
            Some(search) => {
                let needle = search.to_lowercase();
                let manufacturer_ids = self
                    .registry
                    .list_manufacturers()?
                    .into_iter()
                    .filter(|manufacturer| manufacturer.name().to_lowercase().contains(&needle))
                    .map(|manufacturer| manufacturer.manufacturer_id().to_string())
                    .collect();
                let filter = filter
                    .clone()
                    .with_search_manufacturer_ids(manufacturer_ids);
                Ok(self.store.list_products(&filter)?)
            }
            None => Ok(self.store.list_products(filter)?),
        }
    }

    pub fn product_stats(&self) -> Result<StatusCounts, CatalogError> {
        Ok(self.store.count_by_status()?)
    }

    /// Marks a pending product as verified by GS1.
    pub fn verify_product(&self, product_id: &str) -> Result<Product, CatalogError> {
        let product = self
            .store
            .update_status(product_id, ProductStatus::Verified)?;
        info!("Product {} verified", product_id);
        Ok(product)
    }

    /// Marks a pending product as rejected.
    pub fn reject_product(&self, product_id: &str) -> Result<Product, CatalogError> {
        let product = self
            .store
            .update_status(product_id, ProductStatus::Rejected)?;
        info!("Product {} rejected", product_id);
        Ok(product)
    }
}

fn now() -> Result<i64, InternalError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .map_err(|err| {
            InternalError::from_source_with_prefix(
                Box::new(err),
                "System clock is set before the UNIX epoch".to_string(),
            )
        })
}
