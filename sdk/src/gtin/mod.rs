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

//! GTIN-13 generation and validation.
//!
//! A GTIN-13 issued from a national Global Company Prefix is laid out as
//!
//! ```text
//! 483 | GCP remainder (type - 3) | sequence field (12 - type) | check digit
//! ```
//!
//! Everything here is a pure function of its arguments. Allocation of sequence numbers and
//! quota accounting belong to the manufacturer registry, not to the codec.
//!
//! Check digit validation follows <https://www.gs1.org/services/how-calculate-check-digit-manually>.
//!
//! # Examples
//!
//! ```
//! use gs1_catalog_sdk::gtin::{self, GcpType};
//!
//! let result = gtin::generate("483900001", GcpType::Nine, 1).unwrap();
//! assert_eq!(result.gtin(), "4839000010018");
//! assert_eq!(result.breakdown().to_string(), "483-900001-001-8");
//! assert!(gtin::validate(result.gtin()));
//! ```

mod error;
mod result;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgumentError;

pub use error::GtinError;
pub use result::{GenerationResult, GtinBreakdown};

/// Country prefix every GCP allocated by the national registry starts with.
pub const NATIONAL_PREFIX: &str = "483";

/// Number of digits in a GTIN-13, check digit included.
pub const GTIN_13_LENGTH: usize = 13;

const BODY_LENGTH: usize = GTIN_13_LENGTH - 1;

/// The digit length of a Global Company Prefix.
///
/// A longer prefix leaves fewer digits for the sequence field, so it supports fewer products
/// per manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GcpType {
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
}

impl GcpType {
    pub const ALL: [GcpType; 5] = [
        GcpType::Eight,
        GcpType::Nine,
        GcpType::Ten,
        GcpType::Eleven,
        GcpType::Twelve,
    ];

    /// Returns the number of digits in a GCP of this type
    pub fn digits(self) -> usize {
        self as usize
    }

    /// Returns the width of the sequence field between the GCP and the check digit.
    pub fn sequence_field_width(self) -> usize {
        BODY_LENGTH - self.digits()
    }

    /// Returns the number of products a GCP of this type can address: one for a 12 digit GCP,
    /// otherwise `10^width`.
    pub fn max_sequence_count(self) -> u32 {
        match self.sequence_field_width() {
            0 => 1,
            width => 10u32.pow(width as u32),
        }
    }

    /// Returns the largest sequence number whose decimal form fits the sequence field.
    pub fn max_assignable_sequence(self) -> u32 {
        match self.sequence_field_width() {
            0 => 1,
            width => 10u32.pow(width as u32) - 1,
        }
    }
}

impl TryFrom<u8> for GcpType {
    type Error = GtinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(GcpType::Eight),
            9 => Ok(GcpType::Nine),
            10 => Ok(GcpType::Ten),
            11 => Ok(GcpType::Eleven),
            12 => Ok(GcpType::Twelve),
            _ => Err(GtinError::UnsupportedGcpType(value)),
        }
    }
}

impl From<GcpType> for u8 {
    fn from(gcp_type: GcpType) -> Self {
        gcp_type as u8
    }
}

impl fmt::Display for GcpType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.digits())
    }
}

/// Barcode symbologies a catalog product may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarcodeType {
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "EAN-8")]
    Ean8,
}

impl BarcodeType {
    /// Returns the number of digits in a barcode of this type, check digit included
    pub fn length(self) -> usize {
        match self {
            BarcodeType::Ean13 => GTIN_13_LENGTH,
            BarcodeType::Ean8 => 8,
        }
    }
}

impl Default for BarcodeType {
    fn default() -> Self {
        BarcodeType::Ean13
    }
}

impl fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BarcodeType::Ean13 => f.write_str("EAN-13"),
            BarcodeType::Ean8 => f.write_str("EAN-8"),
        }
    }
}

impl FromStr for BarcodeType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "EAN13" => Ok(BarcodeType::Ean13),
            "EAN8" => Ok(BarcodeType::Ean8),
            _ => Err(InvalidArgumentError::new(
                "barcode_type".to_string(),
                format!("unknown barcode type {:?}, expected EAN-13 or EAN-8", s),
            )),
        }
    }
}

/// A GTIN-13 whose check digit has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gtin(String);

impl Gtin {
    /// Parses a candidate string, reporting why it is not a valid GTIN-13.
    pub fn parse(candidate: &str) -> Result<Self, GtinError> {
        validate_barcode(candidate, BarcodeType::Ean13)?;
        Ok(Gtin(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the trailing check digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[BODY_LENGTH] - b'0'
    }

    /// Returns true if the GTIN was issued under the national country prefix.
    pub fn is_national(&self) -> bool {
        self.0.starts_with(NATIONAL_PREFIX)
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Gtin {
    type Err = GtinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gtin::parse(s)
    }
}

// Weights alternate 3, 1, 3, ... starting from the rightmost digit. Callers guarantee every
// byte is an ASCII digit.
fn weighted_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(position, digit)| {
            let weight = if position % 2 == 0 { 3 } else { 1 };
            u32::from(digit - b'0') * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn is_numeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Computes the modulo-10 check digit over the first 12 digits of a GTIN-13.
///
/// # Errors
///
/// Returns `GtinError::MalformedDigits` unless the input is exactly 12 ASCII digits.
pub fn compute_check_digit(first_12_digits: &str) -> Result<u8, GtinError> {
    if first_12_digits.len() != BODY_LENGTH || !is_numeric(first_12_digits) {
        return Err(GtinError::MalformedDigits {
            expected: BODY_LENGTH,
            found: first_12_digits.to_string(),
        });
    }
    Ok(weighted_check_digit(first_12_digits.as_bytes()))
}

/// Returns `12 - gcp_type`, the width of the sequence field.
pub fn sequence_field_width(gcp_type: GcpType) -> usize {
    gcp_type.sequence_field_width()
}

/// Returns how many products a manufacturer with this GCP type can address.
pub fn max_sequence_count(gcp_type: GcpType) -> u32 {
    gcp_type.max_sequence_count()
}

/// Renders a sequence number zero-padded to the sequence field width.
///
/// A 12 digit GCP has no sequence field, so the result is empty whatever the number. A number
/// wider than the field is rendered in full rather than truncated; `generate` rejects it.
pub fn format_sequence_number(sequence_number: u32, gcp_type: GcpType) -> String {
    match gcp_type.sequence_field_width() {
        0 => String::new(),
        width => format!("{:0>width$}", sequence_number, width = width),
    }
}

/// Checks that a GCP has the length of its type, starts with the national prefix and is all
/// digits, in that order.
pub fn check_gcp(gcp: &str, gcp_type: GcpType) -> Result<(), GtinError> {
    let gcp_length = gcp.chars().count();
    if gcp_length != gcp_type.digits() {
        return Err(GtinError::GcpLengthMismatch {
            gcp_type,
            actual: gcp_length,
        });
    }

    if !gcp.starts_with(NATIONAL_PREFIX) {
        return Err(GtinError::InvalidCountryPrefix {
            gcp: gcp.to_string(),
        });
    }

    if !is_numeric(gcp) {
        return Err(GtinError::NonNumericGcp {
            gcp: gcp.to_string(),
        });
    }

    Ok(())
}

/// Generates the GTIN-13 for a manufacturer's GCP and a sequence number.
///
/// Preconditions are checked in a fixed order and the first failure is returned:
///
/// 1. the sequence number lies in `1..=max_sequence_count` and fits the sequence field
///    (`OUT_OF_RANGE_SEQUENCE`)
/// 2. the GCP has exactly `gcp_type` characters (`GCP_LENGTH_MISMATCH`)
/// 3. the GCP starts with the national prefix (`INVALID_COUNTRY_PREFIX`)
/// 4. the GCP is all digits (`NON_NUMERIC_GCP`)
///
/// Nothing outside the returned value is modified.
pub fn generate(
    gcp: &str,
    gcp_type: GcpType,
    sequence_number: u32,
) -> Result<GenerationResult, GtinError> {
    let out_of_range = GtinError::OutOfRangeSequence {
        sequence_number,
        gcp_type,
    };
    if sequence_number < 1 || sequence_number > gcp_type.max_sequence_count() {
        return Err(out_of_range);
    }
    let sequence_field = format_sequence_number(sequence_number, gcp_type);
    if sequence_field.len() != gcp_type.sequence_field_width() {
        return Err(out_of_range);
    }

    check_gcp(gcp, gcp_type)?;

    let body = format!("{}{}", gcp, sequence_field);
    let check_digit = weighted_check_digit(body.as_bytes());
    let gtin = format!("{}{}", body, check_digit);

    let breakdown = GtinBreakdown::new(
        NATIONAL_PREFIX.to_string(),
        gcp[NATIONAL_PREFIX.len()..].to_string(),
        sequence_field.clone(),
        check_digit.to_string(),
    );

    Ok(GenerationResult::new(
        gtin,
        gcp.to_string(),
        sequence_field,
        check_digit,
        breakdown,
    ))
}

/// Checks that a candidate has the length of its barcode type, is all digits, and ends in the
/// correct check digit.
pub fn validate_barcode(candidate: &str, barcode_type: BarcodeType) -> Result<(), GtinError> {
    if !is_numeric(candidate) {
        return Err(GtinError::NonNumeric(candidate.to_string()));
    }

    if candidate.len() != barcode_type.length() {
        return Err(GtinError::InvalidLength {
            barcode_type,
            actual: candidate.len(),
        });
    }

    let (body, check) = candidate.split_at(candidate.len() - 1);
    let expected = weighted_check_digit(body.as_bytes());
    let found = check.as_bytes()[0] - b'0';
    if expected == found {
        Ok(())
    } else {
        Err(GtinError::CheckDigitMismatch { expected, found })
    }
}

/// Returns true only for 13 ASCII digits whose last digit is the check digit of the first 12.
/// Never fails; malformed input is simply invalid.
pub fn validate(candidate: &str) -> bool {
    validate_barcode(candidate, BarcodeType::Ean13).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const NINE_DIGIT_GCP: &str = "483900001";

    /// Tests the width and capacity of every GCP type.
    #[test]
    fn test_width_and_capacity_law() {
        let expected = [(8, 4, 10_000), (9, 3, 1_000), (10, 2, 100), (11, 1, 10), (12, 0, 1)];
        for (gcp_type, (digits, width, capacity)) in GcpType::ALL.iter().zip(expected.iter()) {
            assert_eq!(gcp_type.digits(), *digits);
            assert_eq!(sequence_field_width(*gcp_type), *width);
            assert_eq!(sequence_field_width(*gcp_type), 12 - *digits);
            assert_eq!(max_sequence_count(*gcp_type), *capacity);
        }
    }

    /// Tests conversion from the raw integer type, including unsupported values.
    #[test]
    fn test_gcp_type_try_from() {
        assert_eq!(GcpType::try_from(9u8), Ok(GcpType::Nine));
        assert_eq!(GcpType::try_from(12u8), Ok(GcpType::Twelve));
        assert_eq!(GcpType::try_from(7u8), Err(GtinError::UnsupportedGcpType(7)));
        assert_eq!(
            GcpType::try_from(13u8).unwrap_err().code(),
            "UNSUPPORTED_GCP_TYPE"
        );
        assert_eq!(u8::from(GcpType::Eleven), 11);
    }

    /// Tests the check digit against known GTINs.
    #[test]
    fn test_compute_check_digit() {
        assert_eq!(compute_check_digit("483900001001"), Ok(8));
        assert_eq!(compute_check_digit("978198185572"), Ok(8));
        assert_eq!(compute_check_digit("483900000001"), Ok(9));
        assert_eq!(compute_check_digit("000000000000"), Ok(0));
    }

    /// Tests that the check digit calculation refuses input it cannot interpret.
    #[test]
    fn test_compute_check_digit_malformed() {
        for bad in &["48390000100", "4839000010011", "48390000100x", ""] {
            let err = compute_check_digit(bad).unwrap_err();
            assert_eq!(err.code(), "MALFORMED_DIGITS");
        }
    }

    #[test]
    fn test_format_sequence_number() {
        assert_eq!(format_sequence_number(1, GcpType::Eight), "0001");
        assert_eq!(format_sequence_number(1, GcpType::Nine), "001");
        assert_eq!(format_sequence_number(16, GcpType::Ten), "16");
        assert_eq!(format_sequence_number(6, GcpType::Eleven), "6");
        assert_eq!(format_sequence_number(1, GcpType::Twelve), "");
        assert_eq!(format_sequence_number(5, GcpType::Twelve), "");
        // wider than the field: rendered in full, not truncated
        assert_eq!(format_sequence_number(1000, GcpType::Nine), "1000");
    }

    /// Tests generation for a 9 digit GCP and the first sequence number.
    #[test]
    fn test_generate_type_9() {
        let result = generate(NINE_DIGIT_GCP, GcpType::Nine, 1).unwrap();
        assert_eq!(result.gtin(), "4839000010018");
        assert_eq!(result.gcp(), NINE_DIGIT_GCP);
        assert_eq!(result.sequence_number(), "001");
        assert_eq!(result.check_digit(), 8);
        assert_eq!(result.barcode_type(), BarcodeType::Ean13);

        let breakdown = result.breakdown();
        assert_eq!(breakdown.prefix(), "483");
        assert_eq!(breakdown.gcp_part(), "900001");
        assert_eq!(breakdown.sequence_part(), "001");
        assert_eq!(breakdown.check_digit_part(), "8");
        assert_eq!(breakdown.to_string(), "483-900001-001-8");
    }

    /// Tests that a 4 digit sequence field is padded for an 8 digit GCP.
    #[test]
    fn test_generate_type_8() {
        let result = generate("48390000", GcpType::Eight, 1).unwrap();
        assert_eq!(result.sequence_number(), "0001");
        assert_eq!(&result.gtin()[..12], "483900000001");
        assert_eq!(result.gtin().len(), GTIN_13_LENGTH);
        assert_eq!(result.gtin(), "4839000000019");
    }

    #[test]
    fn test_generate_type_10_and_11() {
        let result = generate("4839000020", GcpType::Ten, 16).unwrap();
        assert_eq!(result.sequence_number(), "16");
        assert_eq!(result.gtin(), "4839000020161");

        let result = generate("48390000300", GcpType::Eleven, 6).unwrap();
        assert_eq!(result.sequence_number(), "6");
        assert_eq!(result.gtin(), "4839000030061");
    }

    /// Tests that a 12 digit GCP addresses exactly one product with an empty sequence field.
    #[test]
    fn test_generate_type_12() {
        let result = generate("483900000001", GcpType::Twelve, 1).unwrap();
        assert_eq!(result.sequence_number(), "");
        assert_eq!(result.breakdown().sequence_part(), "");
        assert_eq!(result.gtin(), "4839000000019");
        assert_eq!(result.breakdown().to_string(), "483-900000001-9");

        let err = generate("483900000001", GcpType::Twelve, 2).unwrap_err();
        assert_eq!(err.code(), "OUT_OF_RANGE_SEQUENCE");
    }

    /// Tests sequence numbers around the bounds of each GCP type.
    ///
    /// Zero and anything above capacity are out of range. The capacity itself is also refused
    /// for types with a sequence field, because `10^width` needs one digit more than the field
    /// holds and would produce a 14 digit barcode.
    #[test]
    fn test_generate_boundaries() {
        let gcps = [
            (GcpType::Eight, "48390000"),
            (GcpType::Nine, "483900001"),
            (GcpType::Ten, "4839000020"),
            (GcpType::Eleven, "48390000300"),
            (GcpType::Twelve, "483900000001"),
        ];

        for (gcp_type, gcp) in gcps.iter() {
            let capacity = max_sequence_count(*gcp_type);

            assert!(generate(gcp, *gcp_type, 1).is_ok());
            let last = generate(gcp, *gcp_type, gcp_type.max_assignable_sequence()).unwrap();
            assert_eq!(last.gtin().len(), GTIN_13_LENGTH);
            assert!(validate(last.gtin()));

            for n in &[0, capacity + 1] {
                assert_eq!(
                    generate(gcp, *gcp_type, *n),
                    Err(GtinError::OutOfRangeSequence {
                        sequence_number: *n,
                        gcp_type: *gcp_type,
                    })
                );
            }

            if gcp_type.sequence_field_width() > 0 {
                assert_eq!(
                    generate(gcp, *gcp_type, capacity).unwrap_err().code(),
                    "OUT_OF_RANGE_SEQUENCE"
                );
            } else {
                assert!(generate(gcp, *gcp_type, capacity).is_ok());
            }
        }

        assert_eq!(
            generate(NINE_DIGIT_GCP, GcpType::Nine, 999).unwrap().gtin(),
            "4839000019998"
        );
        assert!(generate(NINE_DIGIT_GCP, GcpType::Nine, 1000).is_err());
        assert!(generate(NINE_DIGIT_GCP, GcpType::Nine, 1001).is_err());
    }

    /// Tests that the preconditions are reported in their documented order.
    #[test]
    fn test_generate_precondition_order() {
        // bad sequence wins over a bad GCP
        assert_eq!(
            generate("98390", GcpType::Nine, 0).unwrap_err().code(),
            "OUT_OF_RANGE_SEQUENCE"
        );
        // bad length wins over a bad prefix
        assert_eq!(
            generate("98390", GcpType::Nine, 1),
            Err(GtinError::GcpLengthMismatch {
                gcp_type: GcpType::Nine,
                actual: 5,
            })
        );
        assert_eq!(
            generate("983900001", GcpType::Nine, 1),
            Err(GtinError::InvalidCountryPrefix {
                gcp: "983900001".to_string()
            })
        );
        assert_eq!(
            generate("48390000a", GcpType::Nine, 1).unwrap_err().code(),
            "NON_NUMERIC_GCP"
        );
    }

    /// Tests that generation is a pure function of its arguments.
    #[test]
    fn test_generate_deterministic() {
        let first = generate("4839000020", GcpType::Ten, 42).unwrap();
        let second = generate("4839000020", GcpType::Ten, 42).unwrap();
        assert_eq!(first, second);
    }

    /// Tests that every generated barcode validates and its breakdown reassembles it.
    #[test]
    fn test_generated_gtins_validate_and_reconstruct() {
        let gcps = [
            (GcpType::Eight, "48390000"),
            (GcpType::Nine, "483900001"),
            (GcpType::Ten, "4839000020"),
            (GcpType::Eleven, "48390000300"),
        ];
        for (gcp_type, gcp) in gcps.iter() {
            for n in 1..=gcp_type.max_assignable_sequence().min(250) {
                let result = generate(gcp, *gcp_type, n).unwrap();
                assert!(validate(result.gtin()), "{} did not validate", result.gtin());
                assert_eq!(result.breakdown().concatenated(), result.gtin());
                assert!(Gtin::parse(result.gtin()).unwrap().is_national());
            }
        }
    }

    /// Tests that changing any single digit, the check digit included, is detected.
    #[test]
    fn test_single_digit_corruption_detected() {
        let gtin = generate(NINE_DIGIT_GCP, GcpType::Nine, 1).unwrap().into_gtin();
        for position in 0..GTIN_13_LENGTH {
            let mut corrupted = gtin.clone().into_bytes();
            corrupted[position] = b'0' + (corrupted[position] - b'0' + 1) % 10;
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert!(!validate(&corrupted), "{} validated", corrupted);
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate("4839000010018"));
        assert!(validate("9781981855728"));
        assert!(!validate("4839000010013"));
        assert!(!validate("4839000010014"));
        assert!(!validate("9781981855738"));
        // malformed input is invalid, not an error
        assert!(!validate(""));
        assert!(!validate("483900001001"));
        assert!(!validate("48390000100180"));
        assert!(!validate("483900001001a"));
        assert!(!validate("+483900001001"));
        assert!(!validate("４839000010018"));
    }

    /// Tests the reasons reported when parsing a candidate barcode.
    #[test]
    fn test_gtin_parse() {
        let gtin: Gtin = "4839000010018".parse().unwrap();
        assert_eq!(gtin.as_str(), "4839000010018");
        assert_eq!(gtin.check_digit(), 8);
        assert_eq!(gtin.to_string(), "4839000010018");
        assert!(!Gtin::parse("9781981855728").unwrap().is_national());

        assert_eq!(
            Gtin::parse("4839000010013"),
            Err(GtinError::CheckDigitMismatch {
                expected: 8,
                found: 3
            })
        );
        assert_eq!(
            Gtin::parse("123").unwrap_err(),
            GtinError::InvalidLength {
                barcode_type: BarcodeType::Ean13,
                actual: 3
            }
        );
        assert_eq!(
            Gtin::parse("1012938473jer").unwrap_err().to_string(),
            "Invalid format, GTIN identifiers only contain numbers: 1012938473jer"
        );
    }

    /// Tests validation of 8 digit barcodes.
    #[test]
    fn test_validate_barcode_ean8() {
        assert!(validate_barcode("40170725", BarcodeType::Ean8).is_ok());
        assert!(validate_barcode("40170726", BarcodeType::Ean8).is_err());
        assert_eq!(
            validate_barcode("4839000010018", BarcodeType::Ean8)
                .unwrap_err()
                .code(),
            "INVALID_GTIN_LENGTH"
        );
        assert!(!validate("40170725"));
    }

    #[test]
    fn test_barcode_type_from_str() {
        assert_eq!("EAN-13".parse::<BarcodeType>().unwrap(), BarcodeType::Ean13);
        assert_eq!("ean8".parse::<BarcodeType>().unwrap(), BarcodeType::Ean8);
        assert!("UPC-A".parse::<BarcodeType>().is_err());
        assert_eq!(BarcodeType::Ean13.to_string(), "EAN-13");
    }

    /// Tests the serialized forms consumed by presentation layers.
    #[test]
    fn test_serialization() {
        let result = generate("48390000300", GcpType::Eleven, 6).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["gtin"], "4839000030061");
        assert_eq!(json["barcode_type"], "EAN-13");
        assert_eq!(json["sequence_number"], "6");
        assert_eq!(json["check_digit"], 1);
        assert_eq!(json["breakdown"]["gcp_part"], "90000300");

        assert_eq!(serde_json::to_string(&GcpType::Ten).unwrap(), "10");
        assert_eq!(
            serde_json::from_str::<GcpType>("11").unwrap(),
            GcpType::Eleven
        );
        assert!(serde_json::from_str::<GcpType>("7").is_err());
    }
}
