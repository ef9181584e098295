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
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Product, ProductFilter, ProductStatus, ProductStore, ProductStoreError, StatusCounts};
use crate::error::{
    ConstraintViolationError, ConstraintViolationType, InternalError, InvalidStateError,
};

/// A product store held in memory. Clones share the same products.
#[derive(Clone, Default)]
pub struct MemoryProductStore {
    inner_product: Arc<Mutex<HashMap<String, Product>>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        MemoryProductStore {
            inner_product: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Product>>, ProductStoreError> {
        self.inner_product
            .lock()
            .map_err(|_| ProductStoreError::from(InternalError::lock_poisoned("products")))
    }
}

impl ProductStore for MemoryProductStore {
    fn add_product(&self, product: Product) -> Result<(), ProductStoreError> {
        let mut inner_product = self.lock()?;

        if inner_product.contains_key(&product.product_id) {
            return Err(ProductStoreError::ConstraintViolationError(
                ConstraintViolationError::with_violation_type_and_message(
                    ConstraintViolationType::Unique,
                    format!("Product {} already exists", product.product_id),
                ),
            ));
        }

        if inner_product.values().any(|p| p.gtin == product.gtin) {
            return Err(ProductStoreError::ConstraintViolationError(
                ConstraintViolationError::with_violation_type_and_message(
                    ConstraintViolationType::Unique,
                    format!("GTIN {} is already registered", product.gtin),
                ),
            ));
        }

        inner_product.insert(product.product_id.clone(), product);
        Ok(())
    }

    fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, ProductStoreError> {
        Ok(self.lock()?.get(product_id).cloned())
    }

    fn fetch_product_by_gtin(&self, gtin: &str) -> Result<Option<Product>, ProductStoreError> {
        Ok(self.lock()?.values().find(|p| p.gtin == gtin).cloned())
    }

    fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductStoreError> {
        let mut products: Vec<Product> = self
            .lock()?
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        products.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        Ok(products)
    }

    fn update_status(
        &self,
        product_id: &str,
        status: ProductStatus,
    ) -> Result<Product, ProductStoreError> {
        let mut inner_product = self.lock()?;
        let product = inner_product.get_mut(product_id).ok_or_else(|| {
            ProductStoreError::NotFoundError(format!(
                "Product with product_id {} not found.",
                product_id
            ))
        })?;

        if !product.status.can_transition_to(status) {
            return Err(ProductStoreError::InvalidStateError(
                InvalidStateError::with_message(format!(
                    "Product {} is {} and cannot become {}",
                    product_id, product.status, status
                )),
            ));
        }

        product.set_status(status);
        Ok(product.clone())
    }

    fn count_by_status(&self) -> Result<StatusCounts, ProductStoreError> {
        let mut counts = StatusCounts::default();
        for product in self.lock()?.values() {
            counts.record(product.status);
        }
        Ok(counts)
    }
}
