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

use crate::error::{ConstraintViolationError, InternalError, InvalidStateError};
use crate::gtin::GtinError;

#[derive(Debug)]
pub enum ProductBuilderError {
    MissingRequiredField(String),
    InvalidGtin(GtinError),
}

impl Error for ProductBuilderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProductBuilderError::MissingRequiredField(_) => None,
            ProductBuilderError::InvalidGtin(err) => Some(err),
        }
    }
}

impl fmt::Display for ProductBuilderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProductBuilderError::MissingRequiredField(ref s) => {
                write!(f, "Failed to build product: {}", s)
            }
            ProductBuilderError::InvalidGtin(err) => write!(f, "Failed to build product: {}", err),
        }
    }
}

#[derive(Debug)]
pub enum ProductStoreError {
    InternalError(InternalError),
    ConstraintViolationError(ConstraintViolationError),
    InvalidStateError(InvalidStateError),
    NotFoundError(String),
}

impl Error for ProductStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProductStoreError::InternalError(err) => Some(err),
            ProductStoreError::ConstraintViolationError(err) => Some(err),
            ProductStoreError::InvalidStateError(err) => Some(err),
            ProductStoreError::NotFoundError(_) => None,
        }
    }
}

impl fmt::Display for ProductStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProductStoreError::InternalError(err) => write!(f, "{}", err),
            ProductStoreError::ConstraintViolationError(err) => write!(f, "{}", err),
            ProductStoreError::InvalidStateError(err) => write!(f, "{}", err),
            ProductStoreError::NotFoundError(ref s) => write!(f, "Product not found: {}", s),
        }
    }
}

impl From<InternalError> for ProductStoreError {
    fn from(err: InternalError) -> Self {
        ProductStoreError::InternalError(err)
    }
}
