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

//! Manufacturers and the registry that allocates their sequence numbers.
//!
//! Each manufacturer holds an allocated GCP and a quota of barcodes. The registry is the only
//! place the next sequence number and the remaining quota change, and it does so atomically per
//! manufacturer so that concurrent product registrations never share a sequence number.

mod error;
mod memory;

use crate::gtin::{self, GcpType};

pub use error::{ManufacturerBuilderError, ManufacturerRegistryError};
pub use memory::MemoryManufacturerRegistry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manufacturer {
    manufacturer_id: String,
    name: String,
    gcp: String,
    gcp_type: GcpType,
    available_barcodes: u32,
    used_barcodes: u32,
    next_sequence_number: u32,
}

impl Manufacturer {
    /// Returns the manufacturer_id for the manufacturer
    pub fn manufacturer_id(&self) -> &str {
        &self.manufacturer_id
    }

    /// Returns the name of the manufacturer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the allocated Global Company Prefix
    pub fn gcp(&self) -> &str {
        &self.gcp
    }

    /// Returns the digit length of the GCP
    pub fn gcp_type(&self) -> GcpType {
        self.gcp_type
    }

    /// Returns the number of barcodes the manufacturer may still generate
    pub fn available_barcodes(&self) -> u32 {
        self.available_barcodes
    }

    /// Returns the number of barcodes already generated
    pub fn used_barcodes(&self) -> u32 {
        self.used_barcodes
    }

    /// Returns the sequence number the next product will receive
    pub fn next_sequence_number(&self) -> u32 {
        self.next_sequence_number
    }

    /// Returns true if at least one barcode remains in the quota and the next sequence number
    /// still fits the GCP's sequence field.
    pub fn has_quota(&self) -> bool {
        self.available_barcodes > 0
            && self.next_sequence_number <= self.gcp_type.max_assignable_sequence()
    }
}

#[derive(Default, Clone)]
pub struct ManufacturerBuilder {
    manufacturer_id: String,
    name: String,
    gcp: String,
    gcp_type: Option<GcpType>,
    available_barcodes: u32,
    used_barcodes: u32,
    next_sequence_number: Option<u32>,
}

impl ManufacturerBuilder {
    pub fn new() -> Self {
        ManufacturerBuilder::default()
    }

    /// Sets the ID of the manufacturer
    pub fn with_manufacturer_id(mut self, manufacturer_id: String) -> Self {
        self.manufacturer_id = manufacturer_id;
        self
    }

    /// Sets the display name of the manufacturer
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Sets the allocated GCP and its type
    pub fn with_gcp(mut self, gcp: String, gcp_type: GcpType) -> Self {
        self.gcp = gcp;
        self.gcp_type = Some(gcp_type);
        self
    }

    /// Sets the remaining barcode quota
    pub fn with_available_barcodes(mut self, available_barcodes: u32) -> Self {
        self.available_barcodes = available_barcodes;
        self
    }

    /// Sets the number of barcodes already generated
    pub fn with_used_barcodes(mut self, used_barcodes: u32) -> Self {
        self.used_barcodes = used_barcodes;
        self
    }

    /// Sets the next sequence number; defaults to 1
    pub fn with_next_sequence_number(mut self, next_sequence_number: u32) -> Self {
        self.next_sequence_number = Some(next_sequence_number);
        self
    }

    pub fn build(self) -> Result<Manufacturer, ManufacturerBuilderError> {
        let ManufacturerBuilder {
            manufacturer_id,
            name,
            gcp,
            gcp_type,
            available_barcodes,
            used_barcodes,
            next_sequence_number,
        } = self;

        if manufacturer_id.is_empty() {
            return Err(ManufacturerBuilderError::MissingRequiredField(
                "Missing manufacturer_id".to_string(),
            ));
        }

        if name.trim().is_empty() {
            return Err(ManufacturerBuilderError::MissingRequiredField(
                "Missing name".to_string(),
            ));
        }

        let gcp_type = gcp_type.ok_or_else(|| {
            ManufacturerBuilderError::MissingRequiredField("Missing gcp".to_string())
        })?;

        gtin::check_gcp(&gcp, gcp_type).map_err(ManufacturerBuilderError::InvalidGcp)?;

        let next_sequence_number = next_sequence_number.unwrap_or(1);
        if next_sequence_number == 0 {
            return Err(ManufacturerBuilderError::InvalidField(
                "next_sequence_number must be at least 1".to_string(),
            ));
        }

        Ok(Manufacturer {
            manufacturer_id,
            name,
            gcp,
            gcp_type,
            available_barcodes,
            used_barcodes,
            next_sequence_number,
        })
    }
}

/// A sequence number handed out by a registry for one product.
///
/// The quota has already been charged when a reservation is returned. If the product is never
/// saved, the reservation must be passed back to `ManufacturerRegistry::release_sequence`
/// exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceReservation {
    pub manufacturer_id: String,
    pub gcp: String,
    pub gcp_type: GcpType,
    pub sequence_number: u32,
}

pub trait ManufacturerRegistry: Send + Sync {
    /// Adds a manufacturer; fails if the ID is already registered
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerRegistryError>;

    fn fetch_manufacturer(
        &self,
        manufacturer_id: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerRegistryError>;

    /// Lists all manufacturers ordered by ID
    fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, ManufacturerRegistryError>;

    /// Atomically takes the manufacturer's next sequence number, advancing the counter and
    /// charging one barcode against the quota.
    fn reserve_sequence(
        &self,
        manufacturer_id: &str,
    ) -> Result<SequenceReservation, ManufacturerRegistryError>;

    /// Returns an unused reservation's barcode to the quota. The counter is rewound only if no
    /// later reservation was made; otherwise the number is left as a gap.
    fn release_sequence(
        &self,
        reservation: &SequenceReservation,
    ) -> Result<(), ManufacturerRegistryError>;
}
