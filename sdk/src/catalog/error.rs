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
use std::error::Error;
use std::fmt;

use crate::error::{InternalError, InvalidArgumentError};
use crate::gtin::GtinError;
use crate::manufacturers::ManufacturerRegistryError;
use crate::products::{ProductBuilderError, ProductStoreError};

#[derive(Debug)]
pub enum CatalogError {
    InvalidArgumentError(InvalidArgumentError),
    GtinError(GtinError),
    ProductBuilderError(ProductBuilderError),
    ManufacturerRegistryError(ManufacturerRegistryError),
    ProductStoreError(ProductStoreError),
    InternalError(InternalError),
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::InvalidArgumentError(err) => Some(err),
            CatalogError::GtinError(err) => Some(err),
            CatalogError::ProductBuilderError(err) => Some(err),
            CatalogError::ManufacturerRegistryError(err) => Some(err),
            CatalogError::ProductStoreError(err) => Some(err),
            CatalogError::InternalError(err) => Some(err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::InvalidArgumentError(err) => write!(f, "{}", err),
            CatalogError::GtinError(err) => write!(f, "{}", err),
            CatalogError::ProductBuilderError(err) => write!(f, "{}", err),
            CatalogError::ManufacturerRegistryError(err) => write!(f, "{}", err),
            CatalogError::ProductStoreError(err) => write!(f, "{}", err),
            CatalogError::InternalError(err) => write!(f, "{}", err),
        }
    }
}

impl From<InvalidArgumentError> for CatalogError {
    fn from(err: InvalidArgumentError) -> Self {
        CatalogError::InvalidArgumentError(err)
    }
}

impl From<GtinError> for CatalogError {
    fn from(err: GtinError) -> Self {
        CatalogError::GtinError(err)
    }
}

impl From<ProductBuilderError> for CatalogError {
    fn from(err: ProductBuilderError) -> Self {
        CatalogError::ProductBuilderError(err)
    }
}

impl From<ManufacturerRegistryError> for CatalogError {
    fn from(err: ManufacturerRegistryError) -> Self {
        CatalogError::ManufacturerRegistryError(err)
    }
}

impl From<ProductStoreError> for CatalogError {
    fn from(err: ProductStoreError) -> Self {
        CatalogError::ProductStoreError(err)
    }
}

impl From<InternalError> for CatalogError {
    fn from(err: InternalError) -> Self {
        CatalogError::InternalError(err)
    }
}
