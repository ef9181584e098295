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

use super::{BarcodeType, GcpType};

/// Reasons a GTIN could not be generated or parsed.
///
/// All variants describe bad input. None of them are transient, so retrying with the same
/// arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtinError {
    /// The sequence number is zero, above the capacity of the GCP type, or too wide for the
    /// sequence field.
    OutOfRangeSequence {
        sequence_number: u32,
        gcp_type: GcpType,
    },
    /// The GCP does not have as many digits as its declared type.
    GcpLengthMismatch { gcp_type: GcpType, actual: usize },
    /// The GCP does not start with the national country prefix.
    InvalidCountryPrefix { gcp: String },
    /// The GCP contains something other than ASCII digits.
    NonNumericGcp { gcp: String },
    /// The GCP type is not one of 8, 9, 10, 11 or 12.
    UnsupportedGcpType(u8),
    /// Input to the check digit calculation is not a run of ASCII digits of the expected length.
    MalformedDigits { expected: usize, found: String },
    /// A barcode candidate has the wrong number of characters for its type.
    InvalidLength {
        barcode_type: BarcodeType,
        actual: usize,
    },
    /// A barcode candidate contains something other than ASCII digits.
    NonNumeric(String),
    /// A barcode candidate's trailing digit does not match its computed check digit.
    CheckDigitMismatch { expected: u8, found: u8 },
}

impl GtinError {
    /// Stable identifier for the kind of failure, suitable for presentation layers that map
    /// errors to their own messages.
    pub fn code(&self) -> &'static str {
        match self {
            GtinError::OutOfRangeSequence { .. } => "OUT_OF_RANGE_SEQUENCE",
            GtinError::GcpLengthMismatch { .. } => "GCP_LENGTH_MISMATCH",
            GtinError::InvalidCountryPrefix { .. } => "INVALID_COUNTRY_PREFIX",
            GtinError::NonNumericGcp { .. } => "NON_NUMERIC_GCP",
            GtinError::UnsupportedGcpType(_) => "UNSUPPORTED_GCP_TYPE",
            GtinError::MalformedDigits { .. } => "MALFORMED_DIGITS",
            GtinError::InvalidLength { .. } => "INVALID_GTIN_LENGTH",
            GtinError::NonNumeric(_) => "NON_NUMERIC_GTIN",
            GtinError::CheckDigitMismatch { .. } => "CHECK_DIGIT_MISMATCH",
        }
    }
}

impl Error for GtinError {}

impl fmt::Display for GtinError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GtinError::OutOfRangeSequence {
                sequence_number,
                gcp_type,
            } => write!(
                f,
                "Sequence number {} is out of range for GCP type {}: expected 1 to {}",
                sequence_number,
                gcp_type,
                gcp_type.max_assignable_sequence()
            ),
            GtinError::GcpLengthMismatch { gcp_type, actual } => write!(
                f,
                "GCP must contain {} digits, got {}",
                gcp_type, actual
            ),
            GtinError::InvalidCountryPrefix { gcp } => write!(
                f,
                "GCP {} must start with the country prefix {}",
                gcp,
                super::NATIONAL_PREFIX
            ),
            GtinError::NonNumericGcp { gcp } => {
                write!(f, "GCP {} must contain only digits", gcp)
            }
            GtinError::UnsupportedGcpType(value) => write!(
                f,
                "Unsupported GCP type {}: expected 8, 9, 10, 11 or 12",
                value
            ),
            GtinError::MalformedDigits { expected, found } => write!(
                f,
                "Check digit input must be {} digits, got {:?}",
                expected, found
            ),
            GtinError::InvalidLength {
                barcode_type,
                actual,
            } => write!(
                f,
                "Invalid length for {} identifier: expected {} digits, got {}",
                barcode_type,
                barcode_type.length(),
                actual
            ),
            GtinError::NonNumeric(candidate) => write!(
                f,
                "Invalid format, GTIN identifiers only contain numbers: {}",
                candidate
            ),
            GtinError::CheckDigitMismatch { expected, found } => write!(
                f,
                "Check digit validation failed: expected {}, found {}",
                expected, found
            ),
        }
    }
}
