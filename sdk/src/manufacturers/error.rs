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

use crate::error::{ConstraintViolationError, InternalError};
use crate::gtin::GtinError;

#[derive(Debug)]
pub enum ManufacturerBuilderError {
    MissingRequiredField(String),
    InvalidField(String),
    InvalidGcp(GtinError),
}

impl Error for ManufacturerBuilderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ManufacturerBuilderError::MissingRequiredField(_) => None,
            ManufacturerBuilderError::InvalidField(_) => None,
            ManufacturerBuilderError::InvalidGcp(err) => Some(err),
        }
    }
}

impl fmt::Display for ManufacturerBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManufacturerBuilderError::MissingRequiredField(ref s) => {
                write!(f, "Failed to build manufacturer: {}", s)
            }
            ManufacturerBuilderError::InvalidField(ref s) => {
                write!(f, "Failed to build manufacturer: {}", s)
            }
            ManufacturerBuilderError::InvalidGcp(err) => {
                write!(f, "Failed to build manufacturer: {}", err)
            }
        }
    }
}

#[derive(Debug)]
pub enum ManufacturerRegistryError {
    InternalError(InternalError),
    ConstraintViolationError(ConstraintViolationError),
    NotFoundError(String),
    QuotaExhaustedError(String),
}

impl Error for ManufacturerRegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ManufacturerRegistryError::InternalError(err) => Some(err),
            ManufacturerRegistryError::ConstraintViolationError(err) => Some(err),
            ManufacturerRegistryError::NotFoundError(_) => None,
            ManufacturerRegistryError::QuotaExhaustedError(_) => None,
        }
    }
}

impl fmt::Display for ManufacturerRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ManufacturerRegistryError::InternalError(err) => write!(f, "{}", err),
            ManufacturerRegistryError::ConstraintViolationError(err) => write!(f, "{}", err),
            ManufacturerRegistryError::NotFoundError(ref s) => {
                write!(f, "Manufacturer not found: {}", s)
            }
            ManufacturerRegistryError::QuotaExhaustedError(ref s) => {
                write!(f, "Barcode quota exhausted: {}", s)
            }
        }
    }
}

impl From<InternalError> for ManufacturerRegistryError {
    fn from(err: InternalError) -> Self {
        ManufacturerRegistryError::InternalError(err)
    }
}
