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

//! Building blocks for a national GS1 product catalog.
//!
//! The [`gtin`] module is a pure codec between a manufacturer's Global Company Prefix, a
//! sequence number and a GTIN-13. The remaining modules model the collaborators around it: the
//! manufacturer registry that hands out sequence numbers against a barcode quota, the product
//! store that tracks verification status, and the catalog service that ties them together.

extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(any(feature = "manufacturer", feature = "product", feature = "catalog"))]
#[macro_use]
extern crate log;

#[cfg(feature = "catalog")]
pub mod catalog;
pub mod error;
pub mod gtin;
#[cfg(feature = "manufacturer")]
pub mod manufacturers;
#[cfg(feature = "product")]
pub mod products;
