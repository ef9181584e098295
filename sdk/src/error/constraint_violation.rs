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

use std::error;
use std::fmt;

/// The kind of constraint a write would have broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolationType {
    /// A record with the same key already exists.
    Unique,
    /// A referenced record does not exist.
    ForeignKey,
}

impl fmt::Display for ConstraintViolationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstraintViolationType::Unique => f.write_str("Unique"),
            ConstraintViolationType::ForeignKey => f.write_str("ForeignKey"),
        }
    }
}

/// A write was refused because it would violate a store constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolationError {
    violation_type: ConstraintViolationType,
    message: Option<String>,
}

impl ConstraintViolationError {
    /// Constructs a new `ConstraintViolationError` with only a violation type.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_catalog_sdk::error::{ConstraintViolationError, ConstraintViolationType};
    ///
    /// let err = ConstraintViolationError::with_violation_type(ConstraintViolationType::Unique);
    /// assert_eq!(format!("{}", err), "Unique constraint violated");
    /// ```
    pub fn with_violation_type(violation_type: ConstraintViolationType) -> Self {
        Self {
            violation_type,
            message: None,
        }
    }

    /// Constructs a new `ConstraintViolationError` with a type and a message, displayed as
    /// the message alone.
    pub fn with_violation_type_and_message(
        violation_type: ConstraintViolationType,
        message: String,
    ) -> Self {
        Self {
            violation_type,
            message: Some(message),
        }
    }

    /// Returns the kind of constraint that was violated.
    pub fn violation_type(&self) -> ConstraintViolationType {
        self.violation_type
    }
}

impl error::Error for ConstraintViolationError {}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.message {
            Some(m) => f.write_str(m),
            None => write!(f, "{} constraint violated", self.violation_type),
        }
    }
}
