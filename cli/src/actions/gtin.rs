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

use std::convert::TryFrom;

use gs1_catalog_sdk::gtin::{self, BarcodeType, GcpType, GenerationResult, Gtin};
use serde::Serialize;

use crate::actions::{print_json, OutputFormat};
use crate::error::CliError;

/// The addressable range of one GCP type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capacity {
    gcp_type: GcpType,
    sequence_field_width: usize,
    max_sequence_count: u32,
    max_sequence_number: u32,
}

impl From<GcpType> for Capacity {
    fn from(gcp_type: GcpType) -> Self {
        Capacity {
            gcp_type,
            sequence_field_width: gtin::sequence_field_width(gcp_type),
            max_sequence_count: gtin::max_sequence_count(gcp_type),
            max_sequence_number: gcp_type.max_assignable_sequence(),
        }
    }
}

/// The outcome of validating one candidate barcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    gtin: String,
    valid: bool,
    /// Whether a valid EAN-13 carries the national prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    national: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ValidationReport {
    fn new(candidate: &str, barcode_type: BarcodeType) -> Self {
        let outcome = match barcode_type {
            BarcodeType::Ean13 => Gtin::parse(candidate).map(|parsed| Some(parsed.is_national())),
            BarcodeType::Ean8 => gtin::validate_barcode(candidate, barcode_type).map(|()| None),
        };
        match outcome {
            Ok(national) => ValidationReport {
                gtin: candidate.to_string(),
                valid: true,
                national,
                code: None,
                message: None,
            },
            Err(err) => ValidationReport {
                gtin: candidate.to_string(),
                valid: false,
                national: None,
                code: Some(err.code()),
                message: Some(err.to_string()),
            },
        }
    }
}

pub fn parse_gcp_type(value: &str) -> Result<GcpType, CliError> {
    let digits = value.parse::<u8>().map_err(|_| {
        CliError::UserError(format!(
            "GCP type must be a number from 8 to 12, got {}",
            value
        ))
    })?;
    Ok(GcpType::try_from(digits)?)
}

pub fn parse_sequence_number(value: &str) -> Result<u32, CliError> {
    value.parse::<u32>().map_err(|_| {
        CliError::UserError(format!(
            "Sequence number must be a positive integer, got {}",
            value
        ))
    })
}

/**
 * Print the fields of a generated GTIN
 *
 * result - Generation to be printed
 */
pub fn display_generation(result: &GenerationResult) {
    println!(
        "GTIN: {}\n Barcode Type: {}\n GCP: {}\n Sequence Number: {}\n Check Digit: {}\n Breakdown: {}",
        result.gtin(),
        result.barcode_type(),
        result.gcp(),
        result.sequence_number(),
        result.check_digit(),
        result.breakdown(),
    );
}

pub fn do_generate(
    gcp: &str,
    gcp_type: GcpType,
    sequence_number: u32,
    format: OutputFormat,
) -> Result<(), CliError> {
    let result = gtin::generate(gcp, gcp_type, sequence_number)?;
    match format {
        OutputFormat::Human => display_generation(&result),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

pub fn do_check_digit(first_12_digits: &str) -> Result<(), CliError> {
    let check_digit = gtin::compute_check_digit(first_12_digits)?;
    println!("{}", check_digit);
    Ok(())
}

/**
 * Validate each candidate barcode, printing one line per candidate
 *
 * Fails if any candidate is invalid, so scripts can rely on the exit status.
 */
pub fn do_validate(
    candidates: &[&str],
    barcode_type: BarcodeType,
    format: OutputFormat,
) -> Result<(), CliError> {
    let reports = candidates
        .iter()
        .map(|candidate| ValidationReport::new(candidate, barcode_type))
        .collect::<Vec<_>>();

    match format {
        OutputFormat::Human => reports.iter().for_each(|report| {
            match (&report.message, report.national) {
                (None, Some(true)) => println!("{} valid (national)", report.gtin),
                (None, _) => println!("{} valid", report.gtin),
                (Some(message), _) => println!("{} invalid: {}", report.gtin, message),
            }
        }),
        OutputFormat::Json => print_json(&reports)?,
    }

    let invalid = reports.iter().filter(|report| !report.valid).count();
    if invalid > 0 {
        return Err(CliError::UserError(format!(
            "{} of {} barcodes failed validation",
            invalid,
            reports.len()
        )));
    }
    Ok(())
}

pub fn do_capacity(gcp_type: Option<GcpType>, format: OutputFormat) -> Result<(), CliError> {
    let capacities = match gcp_type {
        Some(gcp_type) => vec![Capacity::from(gcp_type)],
        None => GcpType::ALL.iter().map(|t| Capacity::from(*t)).collect(),
    };

    match format {
        OutputFormat::Human => display_capacities(&capacities),
        OutputFormat::Json => print_json(&capacities)?,
    }
    Ok(())
}

fn display_capacities(capacities: &[Capacity]) {
    println!(
        "{:<8} {:<14} {:<10} {}",
        "TYPE", "SEQUENCE WIDTH", "CAPACITY", "SEQUENCE NUMBERS"
    );
    capacities.iter().for_each(|capacity| {
        println!(
            "{:<8} {:<14} {:<10} 1 to {}",
            capacity.gcp_type.to_string(),
            capacity.sequence_field_width,
            capacity.max_sequence_count,
            capacity.max_sequence_number
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gcp_type() {
        assert_eq!(parse_gcp_type("11").unwrap(), GcpType::Eleven);
        match parse_gcp_type("13") {
            Err(CliError::CatalogError(err)) => {
                assert_eq!(err.to_string(), "Unsupported GCP type 13: expected 8, 9, 10, 11 or 12")
            }
            res => panic!("Expected CatalogError, got {:?}", res),
        }
        match parse_gcp_type("nine") {
            Err(CliError::UserError(_)) => (),
            res => panic!("Expected UserError, got {:?}", res),
        }
    }

    #[test]
    fn test_capacity() {
        let capacity = Capacity::from(GcpType::Nine);
        assert_eq!(capacity.sequence_field_width, 3);
        assert_eq!(capacity.max_sequence_count, 1000);
        assert_eq!(capacity.max_sequence_number, 999);

        let capacity = Capacity::from(GcpType::Twelve);
        assert_eq!(capacity.sequence_field_width, 0);
        assert_eq!(capacity.max_sequence_count, 1);
        assert_eq!(capacity.max_sequence_number, 1);
    }

    #[test]
    fn test_validation_report() {
        let report = ValidationReport::new("4839000010018", BarcodeType::Ean13);
        assert!(report.valid);
        assert_eq!(report.national, Some(true));
        assert_eq!(report.code, None);

        let report = ValidationReport::new("9781981855728", BarcodeType::Ean13);
        assert!(report.valid);
        assert_eq!(report.national, Some(false));

        let report = ValidationReport::new("4839000010013", BarcodeType::Ean13);
        assert!(!report.valid);
        assert_eq!(report.national, None);
        assert_eq!(report.code, Some("CHECK_DIGIT_MISMATCH"));

        let report = ValidationReport::new("40170725", BarcodeType::Ean8);
        assert!(report.valid);
        assert_eq!(report.national, None);
    }
}
