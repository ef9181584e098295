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

/// An error raised by a failure inside the library that the caller cannot correct, such as a
/// poisoned store lock.
pub struct InternalError {
    message: Option<String>,
    prefix: Option<String>,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl InternalError {
    /// Constructs a new `InternalError` carrying only a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_catalog_sdk::error::InternalError;
    ///
    /// let err = InternalError::with_message("Cannot access products: mutex lock poisoned".to_string());
    /// assert_eq!(format!("{}", err), "Cannot access products: mutex lock poisoned");
    /// ```
    pub fn with_message(message: String) -> Self {
        Self {
            message: Some(message),
            prefix: None,
            source: None,
        }
    }

    /// Constructs a new `InternalError` wrapping a source error. Display passes the source
    /// through unchanged.
    pub fn from_source(source: Box<dyn error::Error + Send + Sync>) -> Self {
        Self {
            message: None,
            prefix: None,
            source: Some(source),
        }
    }

    /// Constructs a new `InternalError` wrapping a source error, displayed as
    /// `"<prefix>: <source>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gs1_catalog_sdk::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// let err = InternalError::from_source_with_prefix(Box::new(io_err), "Unable to save".to_string());
    /// assert_eq!(format!("{}", err), "Unable to save: disk full");
    /// ```
    pub fn from_source_with_prefix(
        source: Box<dyn error::Error + Send + Sync>,
        prefix: String,
    ) -> Self {
        Self {
            message: None,
            prefix: Some(prefix),
            source: Some(source),
        }
    }

    /// Lock-poisoning failure for the named collection, as raised by the memory stores.
    pub(crate) fn lock_poisoned(collection: &str) -> Self {
        Self::with_message(format!(
            "Cannot access {}: mutex lock poisoned",
            collection
        ))
    }
}

impl error::Error for InternalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(s) => Some(s.as_ref()),
            None => None,
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.message, &self.prefix, &self.source) {
            (Some(m), _, _) => write!(f, "{}", m),
            (None, Some(p), Some(s)) => write!(f, "{}: {}", p, s),
            (None, None, Some(s)) => write!(f, "{}", s),
            _ => f.write_str("InternalError"),
        }
    }
}

impl fmt::Debug for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("InternalError");
        if let Some(m) = &self.message {
            debug.field("message", m);
        }
        if let Some(p) = &self.prefix {
            debug.field("prefix", p);
        }
        if let Some(s) = &self.source {
            debug.field("source", s);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the message takes precedence over any source when displayed.
    #[test]
    fn test_display_with_message() {
        let err = InternalError::with_message("registry offline".to_string());
        assert_eq!(format!("{}", err), "registry offline");
        assert_eq!(
            format!("{:?}", err),
            "InternalError { message: \"registry offline\" }"
        );
    }

    /// Tests that a wrapped source is reachable and displayed with its prefix.
    #[test]
    fn test_display_from_source_with_prefix() {
        let err = InternalError::from_source_with_prefix(
            Box::new(InternalError::with_message("poisoned".to_string())),
            "Cannot reserve sequence".to_string(),
        );
        assert_eq!(format!("{}", err), "Cannot reserve sequence: poisoned");
        assert!(error::Error::source(&err).is_some());
    }

    /// Tests the message produced for a poisoned lock.
    #[test]
    fn test_lock_poisoned() {
        let err = InternalError::lock_poisoned("manufacturers");
        assert_eq!(
            err.to_string(),
            "Cannot access manufacturers: mutex lock poisoned"
        );
    }
}
