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

//! Basic errors shared by the registry, store and catalog modules.
//!
//! These are meant to be wrapped by the `enum` errors of each module rather than returned on
//! their own from public operations.
//!
//! # Examples
//!
//! ```
//! use std::error;
//! use std::fmt;
//!
//! use gs1_catalog_sdk::error::InvalidArgumentError;
//!
//! #[derive(Debug)]
//! enum LabelError {
//!     InvalidArgument(InvalidArgumentError),
//! }
//!
//! impl error::Error for LabelError {}
//!
//! impl fmt::Display for LabelError {
//!     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
//!         match self {
//!             LabelError::InvalidArgument(e) => write!(f, "{}", e),
//!         }
//!     }
//! }
//!
//! fn check_label(label: &str) -> Result<(), LabelError> {
//!     if label.is_empty() {
//!         return Err(LabelError::InvalidArgument(InvalidArgumentError::new(
//!             "label".to_string(),
//!             "must not be empty".to_string(),
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_label("").is_err());
//! ```

mod constraint_violation;
mod internal;
mod invalid_argument;
mod invalid_state;

pub use constraint_violation::{ConstraintViolationError, ConstraintViolationType};
pub use internal::InternalError;
pub use invalid_argument::InvalidArgumentError;
pub use invalid_state::InvalidStateError;
