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

pub mod gtin;
pub mod manufacturers;
pub mod products;

use std::str::FromStr;

use clap::ArgMatches;
use serde::Serialize;

use crate::error::CliError;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Reads the `--format` argument, defaulting to human readable output.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        matches.value_of("format").unwrap_or("human").parse()
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::UserError(format!(
                "Unknown output format {}, expected human or json",
                s
            ))),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Returns the value of an argument clap has already enforced as required.
pub fn required_value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, CliError> {
    matches
        .value_of(name)
        .ok_or_else(|| CliError::UserError(format!("Missing required argument {}", name)))
}
