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

/// An operation was attempted on a record whose current state does not allow it, such as
/// verifying a product that was already rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidStateError {
    message: String,
}

impl InvalidStateError {
    /// Constructs a new `InvalidStateError` displayed as the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_catalog_sdk::error::InvalidStateError;
    ///
    /// let err = InvalidStateError::with_message("product 7 is already verified".to_string());
    /// assert_eq!(format!("{}", err), "product 7 is already verified");
    /// ```
    pub fn with_message(message: String) -> Self {
        Self { message }
    }
}

impl error::Error for InvalidStateError {}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}
