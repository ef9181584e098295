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
use std::fmt;

use super::BarcodeType;

/// The segments of a generated GTIN-13, in order.
///
/// Concatenating the four parts always reproduces the GTIN they were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GtinBreakdown {
    prefix: String,
    gcp_part: String,
    sequence_part: String,
    check_digit_part: String,
}

impl GtinBreakdown {
    pub(super) fn new(
        prefix: String,
        gcp_part: String,
        sequence_part: String,
        check_digit_part: String,
    ) -> Self {
        Self {
            prefix,
            gcp_part,
            sequence_part,
            check_digit_part,
        }
    }

    /// Returns the national country prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the GCP digits that follow the country prefix
    pub fn gcp_part(&self) -> &str {
        &self.gcp_part
    }

    /// Returns the zero-padded sequence field; empty for GCP type 12
    pub fn sequence_part(&self) -> &str {
        &self.sequence_part
    }

    /// Returns the check digit as a single character string
    pub fn check_digit_part(&self) -> &str {
        &self.check_digit_part
    }

    /// Joins the parts back into the full barcode.
    pub fn concatenated(&self) -> String {
        [
            self.prefix.as_str(),
            self.gcp_part.as_str(),
            self.sequence_part.as_str(),
            self.check_digit_part.as_str(),
        ]
        .concat()
    }
}

// Renders as "483-900001-001-8"; an empty sequence field is skipped.
impl fmt::Display for GtinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts = [
            self.prefix.as_str(),
            self.gcp_part.as_str(),
            self.sequence_part.as_str(),
            self.check_digit_part.as_str(),
        ];
        let joined = parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<&str>>()
            .join("-");
        f.write_str(&joined)
    }
}

/// Everything derived from a single GTIN generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    gtin: String,
    barcode_type: BarcodeType,
    gcp: String,
    sequence_number: String,
    check_digit: u8,
    breakdown: GtinBreakdown,
}

impl GenerationResult {
    pub(super) fn new(
        gtin: String,
        gcp: String,
        sequence_number: String,
        check_digit: u8,
        breakdown: GtinBreakdown,
    ) -> Self {
        Self {
            gtin,
            barcode_type: BarcodeType::Ean13,
            gcp,
            sequence_number,
            check_digit,
            breakdown,
        }
    }

    /// Returns the full 13 digit barcode
    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    /// Returns the barcode symbology; generation always produces EAN-13
    pub fn barcode_type(&self) -> BarcodeType {
        self.barcode_type
    }

    /// Returns the GCP the barcode was generated from
    pub fn gcp(&self) -> &str {
        &self.gcp
    }

    /// Returns the sequence number as formatted into the barcode
    pub fn sequence_number(&self) -> &str {
        &self.sequence_number
    }

    /// Returns the check digit
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Returns the segments of the barcode
    pub fn breakdown(&self) -> &GtinBreakdown {
        &self.breakdown
    }

    /// Consumes the result, returning the barcode.
    pub fn into_gtin(self) -> String {
        self.gtin
    }
}
