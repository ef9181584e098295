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

extern crate assert_cmd;

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempdir::TempDir;

static CATALOG_YAML: &str = r#"
manufacturers:
  - manufacturer_id: "1"
    name: Bereket
    gcp: "483900001"
    gcp_type: 9
    available_barcodes: 997
    used_barcodes: 3
    next_sequence_number: 4
  - manufacturer_id: "5"
    name: Gunesh
    gcp: "48390000300"
    gcp_type: 11
    available_barcodes: 0
    used_barcodes: 10
    next_sequence_number: 10
products:
  - product_id: milk
    name: Pasteurised milk 3.2%
    brand: Suyt
    weight: "1"
    unit: l
    packaging: Tetra Pak
    shelf_life: 10 days
    gtin: "4839000010018"
    status: verified
    manufacturer_id: "1"
    created_at: 1768435200
  - product_id: paste
    name: Tomato paste
    brand: Altyn Asyr
    weight: "500"
    unit: g
    packaging: Glass jar
    shelf_life: 24 months
    gtin: "4839000010025"
    manufacturer_id: "1"
    created_at: 1768435300
"#;

/// Writes the catalog data file into a fresh temporary directory
fn setup(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new(name).expect("Unable to create temp dir");
    let path = temp_dir.path().join("catalog.yaml");
    fs::write(&path, CATALOG_YAML).expect("Unable to write catalog data");
    (temp_dir, path)
}

/// Makes a gs1-catalog command reading the given data file
fn make_command(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gs1-catalog").unwrap();
    cmd.arg("-q").arg("--data").arg(data);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Unable to run gs1-catalog");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("Output is not UTF-8")
}

#[test]
fn test_manufacturer_list_and_show() {
    let (_temp_dir, data) = setup("test_manufacturer_list_and_show");

    let stdout = stdout_of(make_command(&data).args(&["manufacturer", "list"]));
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1 "));
    assert!(lines[1].contains("483900001"));

    let stdout = stdout_of(make_command(&data).args(&["manufacturer", "show", "1"]));
    assert!(stdout.contains("Next Sequence Number: 4"));

    make_command(&data)
        .args(&["manufacturer", "show", "9"])
        .assert()
        .failure();
}

/// Verifies listing with filters, and the JSON output.
#[test]
fn test_product_list() {
    let (_temp_dir, data) = setup("test_product_list");

    let stdout = stdout_of(make_command(&data).args(&["product", "list"]));
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("milk "));
    assert!(lines[2].starts_with("paste "));

    let stdout = stdout_of(make_command(&data).args(&["product", "list", "--status", "pending"]));
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("Tomato paste"));

    let stdout = stdout_of(make_command(&data).args(&[
        "product",
        "list",
        "--search",
        "SUYT",
        "--format",
        "json",
    ]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Output is not JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["gtin"], "4839000010018");
    assert_eq!(value[0]["verified_by_gs1"], true);

    let stdout = stdout_of(make_command(&data).args(&["product", "list", "--search", "bereket"]));
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_product_show_and_stats() {
    let (_temp_dir, data) = setup("test_product_show_and_stats");

    let stdout = stdout_of(make_command(&data).args(&["product", "show", "paste"]));
    assert!(stdout.contains("Product Id: paste"));
    assert!(stdout.contains("Weight: 500 g"));
    assert!(stdout.contains("Status: pending"));

    let stdout = stdout_of(make_command(&data).args(&[
        "product",
        "show",
        "--gtin",
        "4839000010018",
    ]));
    assert!(stdout.contains("Product Id: milk"));
    make_command(&data)
        .args(&["product", "show", "--gtin", "4839000010049"])
        .assert()
        .failure();

    let stdout = stdout_of(make_command(&data).args(&["product", "stats"]));
    assert!(stdout.contains("Total: 2"));
    assert!(stdout.contains("Pending: 1"));
    assert!(stdout.contains("Verified: 1"));
    assert!(stdout.contains("Rejected: 0"));
}

/// Verifies the preview and the product created afterwards receive the same GTIN.
#[test]
fn test_product_preview_and_create() {
    let (_temp_dir, data) = setup("test_product_preview_and_create");

    let stdout = stdout_of(make_command(&data).args(&["product", "preview", "--manufacturer", "1"]));
    assert!(stdout.contains("GTIN: 4839000010049"));

    let stdout = stdout_of(make_command(&data).args(&[
        "product",
        "create",
        "--manufacturer",
        "1",
        "--name",
        "Apple juice",
        "--brand",
        "Miwe",
        "--weight",
        "1",
        "--unit",
        "l",
        "--packaging",
        "Carton",
        "--food",
        "--shelf-life",
        "12 months",
    ]));
    assert!(stdout.contains("GTIN: 4839000010049"));
    assert!(stdout.contains("Status: pending"));
    assert!(stdout.contains("Shelf Life: 12 months"));
    assert!(stdout.contains("Breakdown: 483-900001-004-9"));
}

/// Verifies registration failures leave the command failing.
#[test]
fn test_product_create_refused() {
    let (_temp_dir, data) = setup("test_product_create_refused");

    // food products need a shelf life
    make_command(&data)
        .args(&[
            "product",
            "create",
            "--manufacturer",
            "1",
            "--name",
            "Apple juice",
            "--brand",
            "Miwe",
            "--weight",
            "1",
            "--packaging",
            "Carton",
            "--food",
        ])
        .assert()
        .failure();

    // no barcodes left
    make_command(&data)
        .args(&[
            "product",
            "create",
            "--manufacturer",
            "5",
            "--name",
            "Soap",
            "--brand",
            "Ak",
            "--weight",
            "100",
            "--unit",
            "g",
            "--packaging",
            "Box",
        ])
        .assert()
        .failure();
}

#[test]
fn test_product_verify_and_reject() {
    let (_temp_dir, data) = setup("test_product_verify_and_reject");

    let stdout = stdout_of(make_command(&data).args(&["product", "verify", "paste"]));
    assert_eq!(stdout.trim(), "Product paste is now verified");

    let stdout = stdout_of(make_command(&data).args(&["product", "reject", "paste"]));
    assert_eq!(stdout.trim(), "Product paste is now rejected");

    // verified products are final
    make_command(&data)
        .args(&["product", "reject", "milk"])
        .assert()
        .failure();
}

#[test]
fn test_missing_data_file() {
    let temp_dir = TempDir::new("test_missing_data_file").unwrap();
    make_command(&temp_dir.path().join("missing.yaml"))
        .args(&["product", "list"])
        .assert()
        .failure();
}
