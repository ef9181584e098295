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
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Manufacturer, ManufacturerRegistry, ManufacturerRegistryError, SequenceReservation};
use crate::error::{ConstraintViolationError, ConstraintViolationType, InternalError};

/// A registry held in memory. Clones share the same manufacturers.
///
/// A single lock guards every manufacturer, which makes each reservation atomic.
#[derive(Clone, Default)]
pub struct MemoryManufacturerRegistry {
    inner_manufacturer: Arc<Mutex<HashMap<String, Manufacturer>>>,
}

impl MemoryManufacturerRegistry {
    pub fn new() -> Self {
        MemoryManufacturerRegistry {
            inner_manufacturer: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<String, Manufacturer>>, ManufacturerRegistryError> {
        self.inner_manufacturer.lock().map_err(|_| {
            ManufacturerRegistryError::from(InternalError::lock_poisoned("manufacturers"))
        })
    }
}

impl ManufacturerRegistry for MemoryManufacturerRegistry {
    fn add_manufacturer(&self, manufacturer: Manufacturer) -> Result<(), ManufacturerRegistryError> {
        let mut inner_manufacturer = self.lock()?;
        if inner_manufacturer.contains_key(&manufacturer.manufacturer_id) {
            return Err(ManufacturerRegistryError::ConstraintViolationError(
                ConstraintViolationError::with_violation_type_and_message(
                    ConstraintViolationType::Unique,
                    format!(
                        "Manufacturer {} is already registered",
                        manufacturer.manufacturer_id
                    ),
                ),
            ));
        }
        inner_manufacturer.insert(manufacturer.manufacturer_id.clone(), manufacturer);
        Ok(())
    }

    fn fetch_manufacturer(
        &self,
        manufacturer_id: &str,
    ) -> Result<Option<Manufacturer>, ManufacturerRegistryError> {
        Ok(self.lock()?.get(manufacturer_id).cloned())
    }

    fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, ManufacturerRegistryError> {
        let mut manufacturers: Vec<Manufacturer> = self.lock()?.values().cloned().collect();
        manufacturers.sort_by(|a, b| a.manufacturer_id.cmp(&b.manufacturer_id));
        Ok(manufacturers)
    }

    fn reserve_sequence(
        &self,
        manufacturer_id: &str,
    ) -> Result<SequenceReservation, ManufacturerRegistryError> {
        let mut inner_manufacturer = self.lock()?;
        let manufacturer = inner_manufacturer.get_mut(manufacturer_id).ok_or_else(|| {
            ManufacturerRegistryError::NotFoundError(format!(
                "Manufacturer with manufacturer_id {} not found.",
                manufacturer_id
            ))
        })?;

        if !manufacturer.has_quota() {
            return Err(ManufacturerRegistryError::QuotaExhaustedError(format!(
                "Manufacturer {} has no barcodes left",
                manufacturer_id
            )));
        }

        let reservation = SequenceReservation {
            manufacturer_id: manufacturer.manufacturer_id.clone(),
            gcp: manufacturer.gcp.clone(),
            gcp_type: manufacturer.gcp_type,
            sequence_number: manufacturer.next_sequence_number,
        };

        manufacturer.next_sequence_number = manufacturer.next_sequence_number.saturating_add(1);
        manufacturer.available_barcodes -= 1;
        manufacturer.used_barcodes = manufacturer.used_barcodes.saturating_add(1);

        debug!(
            "Reserved sequence number {} for manufacturer {} ({} barcodes left)",
            reservation.sequence_number, manufacturer_id, manufacturer.available_barcodes
        );

        Ok(reservation)
    }

    fn release_sequence(
        &self,
        reservation: &SequenceReservation,
    ) -> Result<(), ManufacturerRegistryError> {
        let mut inner_manufacturer = self.lock()?;
        let manufacturer = inner_manufacturer
            .get_mut(&reservation.manufacturer_id)
            .ok_or_else(|| {
                ManufacturerRegistryError::NotFoundError(format!(
                    "Manufacturer with manufacturer_id {} not found.",
                    reservation.manufacturer_id
                ))
            })?;

        if manufacturer.next_sequence_number == reservation.sequence_number.saturating_add(1) {
            manufacturer.next_sequence_number = reservation.sequence_number;
        }
        manufacturer.available_barcodes = manufacturer.available_barcodes.saturating_add(1);
        manufacturer.used_barcodes = manufacturer.used_barcodes.saturating_sub(1);

        debug!(
            "Released sequence number {} for manufacturer {}",
            reservation.sequence_number, reservation.manufacturer_id
        );

        Ok(())
    }
}
