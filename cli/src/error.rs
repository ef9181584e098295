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
use std::io;

use gs1_catalog_sdk::catalog::CatalogError;
use gs1_catalog_sdk::gtin::GtinError;
use gs1_catalog_sdk::manufacturers::ManufacturerRegistryError;
use gs1_catalog_sdk::products::ProductStoreError;

#[derive(Debug)]
pub enum CliError {
    LoggingInitializationError(Box<flexi_logger::FlexiLoggerError>),

    UserError(String),

    IoError(io::Error),

    InvalidYamlError(String),

    JsonError(serde_json::Error),

    CatalogError(CatalogError),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::LoggingInitializationError(err) => Some(&**err),
            CliError::UserError(_) => None,
            CliError::IoError(err) => Some(err),
            CliError::InvalidYamlError(_) => None,
            CliError::JsonError(err) => Some(err),
            CliError::CatalogError(err) => Some(err),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CliError::UserError(ref err) => write!(f, "Error: {}", err),
            CliError::IoError(ref err) => write!(f, "IoError: {}", err),
            CliError::InvalidYamlError(ref err) => write!(f, "InvalidYamlError: {}", err),
            CliError::JsonError(ref err) => write!(f, "JsonError: {}", err),
            CliError::LoggingInitializationError(ref err) => {
                write!(f, "LoggingInitializationError: {}", err)
            }
            CliError::CatalogError(CatalogError::GtinError(ref err)) => {
                write!(f, "{}: {}", err.code(), err)
            }
            CliError::CatalogError(ref err) => write!(f, "Error: {}", err),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for CliError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        CliError::LoggingInitializationError(Box::new(err))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::JsonError(err)
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        CliError::CatalogError(err)
    }
}

impl From<GtinError> for CliError {
    fn from(err: GtinError) -> Self {
        CliError::CatalogError(CatalogError::from(err))
    }
}

impl From<ManufacturerRegistryError> for CliError {
    fn from(err: ManufacturerRegistryError) -> Self {
        CliError::CatalogError(CatalogError::from(err))
    }
}

impl From<ProductStoreError> for CliError {
    fn from(err: ProductStoreError) -> Self {
        CliError::CatalogError(CatalogError::from(err))
    }
}
