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

//! Catalog products and their verification lifecycle.
//!
//! A product is created `pending` once its barcode has been generated. A GS1 reviewer later
//! moves it to `verified` or `rejected`; both are final.

mod error;
mod memory;

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgumentError;
use crate::gtin::{self, BarcodeType};

pub use error::{ProductBuilderError, ProductStoreError};
pub use memory::MemoryProductStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Pending,
    Verified,
    Rejected,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Pending,
        ProductStatus::Verified,
        ProductStatus::Rejected,
    ];

    /// Returns true if a product in this status may move to `next`.
    pub fn can_transition_to(self, next: ProductStatus) -> bool {
        matches!(
            (self, next),
            (ProductStatus::Pending, ProductStatus::Verified)
                | (ProductStatus::Pending, ProductStatus::Rejected)
        )
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Pending
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProductStatus::Pending => f.write_str("pending"),
            ProductStatus::Verified => f.write_str("verified"),
            ProductStatus::Rejected => f.write_str("rejected"),
        }
    }
}

impl FromStr for ProductStatus {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ProductStatus::Pending),
            "verified" => Ok(ProductStatus::Verified),
            "rejected" => Ok(ProductStatus::Rejected),
            _ => Err(InvalidArgumentError::new(
                "status".to_string(),
                format!(
                    "unknown status {:?}, expected pending, verified or rejected",
                    s
                ),
            )),
        }
    }
}

/// Unit the product's weight or volume is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "l")]
    Litre,
    #[serde(rename = "ml")]
    Millilitre,
    #[serde(rename = "pcs")]
    Piece,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Piece
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Litre => "l",
            Unit::Millilitre => "ml",
            Unit::Piece => "pcs",
        };
        f.write_str(symbol)
    }
}

impl FromStr for Unit {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Unit::Kilogram),
            "g" => Ok(Unit::Gram),
            "l" => Ok(Unit::Litre),
            "ml" => Ok(Unit::Millilitre),
            "pcs" => Ok(Unit::Piece),
            _ => Err(InvalidArgumentError::new(
                "unit".to_string(),
                format!("unknown unit {:?}, expected kg, g, l, ml or pcs", s),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    product_id: String,
    name: String,
    brand: String,
    weight: String,
    unit: Unit,
    packaging: String,
    shelf_life: Option<String>,
    image_url: Option<String>,
    gtin: String,
    barcode_type: BarcodeType,
    status: ProductStatus,
    verified_by_gs1: bool,
    manufacturer_id: String,
    created_at: i64,
}

impl Product {
    /// Returns the product_id for the product
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the name of the product
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brand of the product
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Returns the net weight or volume, without its unit
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// Returns the unit of the weight
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the packaging type
    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    /// Returns the shelf life of a food product
    pub fn shelf_life(&self) -> Option<&str> {
        self.shelf_life.as_deref()
    }

    /// Returns the product image location
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the barcode of the product
    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    /// Returns the barcode symbology
    pub fn barcode_type(&self) -> BarcodeType {
        self.barcode_type
    }

    /// Returns the verification status
    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Returns true once GS1 has verified the product
    pub fn verified_by_gs1(&self) -> bool {
        self.verified_by_gs1
    }

    /// Returns the ID of the manufacturer that owns the barcode
    pub fn manufacturer_id(&self) -> &str {
        &self.manufacturer_id
    }

    /// Returns the creation time in seconds since the Unix epoch
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    fn set_status(&mut self, status: ProductStatus) {
        self.status = status;
        self.verified_by_gs1 = status == ProductStatus::Verified;
    }
}

#[derive(Default, Clone)]
pub struct ProductBuilder {
    product_id: String,
    name: String,
    brand: String,
    weight: String,
    unit: Unit,
    packaging: String,
    shelf_life: Option<String>,
    image_url: Option<String>,
    gtin: String,
    barcode_type: BarcodeType,
    status: ProductStatus,
    manufacturer_id: String,
    created_at: i64,
}

impl ProductBuilder {
    pub fn new() -> Self {
        ProductBuilder::default()
    }

    /// Sets the product ID for this product
    pub fn with_product_id(mut self, product_id: String) -> Self {
        self.product_id = product_id;
        self
    }

    /// Sets the name of the product
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Sets the brand of the product
    pub fn with_brand(mut self, brand: String) -> Self {
        self.brand = brand;
        self
    }

    /// Sets the net weight or volume and its unit
    pub fn with_weight(mut self, weight: String, unit: Unit) -> Self {
        self.weight = weight;
        self.unit = unit;
        self
    }

    /// Sets the packaging type
    pub fn with_packaging(mut self, packaging: String) -> Self {
        self.packaging = packaging;
        self
    }

    /// Sets the shelf life
    pub fn with_shelf_life(mut self, shelf_life: Option<String>) -> Self {
        self.shelf_life = shelf_life;
        self
    }

    /// Sets the image location
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Sets the barcode and its symbology
    pub fn with_gtin(mut self, gtin: String, barcode_type: BarcodeType) -> Self {
        self.gtin = gtin;
        self.barcode_type = barcode_type;
        self
    }

    /// Sets the verification status; defaults to pending
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the owning manufacturer
    pub fn with_manufacturer_id(mut self, manufacturer_id: String) -> Self {
        self.manufacturer_id = manufacturer_id;
        self
    }

    /// Sets the creation timestamp, in seconds since the Unix epoch
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Result<Product, ProductBuilderError> {
        let ProductBuilder {
            product_id,
            name,
            brand,
            weight,
            unit,
            packaging,
            shelf_life,
            image_url,
            gtin,
            barcode_type,
            status,
            manufacturer_id,
            created_at,
        } = self;

        let required = [
            ("product_id", &product_id),
            ("name", &name),
            ("brand", &brand),
            ("weight", &weight),
            ("packaging", &packaging),
            ("manufacturer_id", &manufacturer_id),
        ];
        for (field, value) in required.iter() {
            if value.trim().is_empty() {
                return Err(ProductBuilderError::MissingRequiredField(format!(
                    "Missing {}",
                    field
                )));
            }
        }

        if gtin.is_empty() {
            return Err(ProductBuilderError::MissingRequiredField(
                "Missing gtin".to_string(),
            ));
        }
        gtin::validate_barcode(&gtin, barcode_type).map_err(ProductBuilderError::InvalidGtin)?;

        Ok(Product {
            product_id,
            name,
            brand,
            weight,
            unit,
            packaging,
            shelf_life,
            image_url,
            gtin,
            barcode_type,
            status,
            verified_by_gs1: status == ProductStatus::Verified,
            manufacturer_id,
            created_at,
        })
    }
}

/// The fields staff fill in when registering a product. The barcode is not part of the draft;
/// it is generated from the manufacturer's GCP.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub weight: String,
    #[serde(default)]
    pub unit: Unit,
    pub packaging: String,
    #[serde(default)]
    pub is_food_product: bool,
    #[serde(default)]
    pub shelf_life: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Checks the draft field by field, reporting the first invalid one.
    ///
    /// Food products must state a shelf life.
    pub fn validate(&self) -> Result<(), InvalidArgumentError> {
        let required = [
            ("name", &self.name, "enter the product name"),
            ("brand", &self.brand, "enter the brand"),
            ("weight", &self.weight, "enter the weight or volume"),
            ("packaging", &self.packaging, "enter the packaging type"),
        ];
        for (field, value, message) in required.iter() {
            if value.trim().is_empty() {
                return Err(InvalidArgumentError::new(
                    field.to_string(),
                    message.to_string(),
                ));
            }
        }

        if self.is_food_product
            && self
                .shelf_life
                .as_deref()
                .map(|s| s.trim().is_empty())
                .unwrap_or(true)
        {
            return Err(InvalidArgumentError::new(
                "shelf_life".to_string(),
                "enter the shelf life of a food product".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the shelf life to record: only food products keep one.
    pub fn effective_shelf_life(&self) -> Option<String> {
        if self.is_food_product {
            self.shelf_life.clone()
        } else {
            None
        }
    }
}

/// Criteria for listing products. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    search: Option<String>,
    search_manufacturer_ids: Vec<String>,
    status: Option<ProductStatus>,
    manufacturer_id: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        ProductFilter::default()
    }

    /// Matches products whose name or brand contains the text, ignoring case, or whose GTIN
    /// contains it.
    pub fn with_search(mut self, search: String) -> Self {
        self.search = Some(search);
        self
    }

    /// Also matches the search against products of these manufacturers, typically the ones
    /// whose name contains the search text.
    pub fn with_search_manufacturer_ids(mut self, manufacturer_ids: Vec<String>) -> Self {
        self.search_manufacturer_ids = manufacturer_ids;
        self
    }

    /// Returns the search text, if any
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_manufacturer_id(mut self, manufacturer_id: String) -> Self {
        self.manufacturer_id = Some(manufacturer_id);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }

        if let Some(manufacturer_id) = &self.manufacturer_id {
            if &product.manufacturer_id != manufacturer_id {
                return false;
            }
        }

        match &self.search {
            Some(search) if !search.is_empty() => {
                let needle = search.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
                    || product.gtin.contains(search.as_str())
                    || self
                        .search_manufacturer_ids
                        .iter()
                        .any(|id| id == &product.manufacturer_id)
            }
            _ => true,
        }
    }
}

/// Number of products in each verification status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: ProductStatus) {
        self.total += 1;
        match status {
            ProductStatus::Pending => self.pending += 1,
            ProductStatus::Verified => self.verified += 1,
            ProductStatus::Rejected => self.rejected += 1,
        }
    }
}

pub trait ProductStore: Send + Sync {
    /// Adds a product; fails if its ID or GTIN is already present
    fn add_product(&self, product: Product) -> Result<(), ProductStoreError>;

    fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, ProductStoreError>;

    fn fetch_product_by_gtin(&self, gtin: &str) -> Result<Option<Product>, ProductStoreError>;

    /// Lists matching products, oldest first
    fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductStoreError>;

    /// Moves a product to a new status, returning the updated product. Only transitions allowed
    /// by `ProductStatus::can_transition_to` succeed.
    fn update_status(
        &self,
        product_id: &str,
        status: ProductStatus,
    ) -> Result<Product, ProductStoreError>;

    fn count_by_status(&self) -> Result<StatusCounts, ProductStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn builder() -> ProductBuilder {
        ProductBuilder::new()
            .with_product_id("p1".to_string())
            .with_name("Pasteurised milk 3.2%".to_string())
            .with_brand("Suyt".to_string())
            .with_weight("1".to_string(), Unit::Litre)
            .with_packaging("Tetra Pak".to_string())
            .with_gtin("4839000010018".to_string(), BarcodeType::Ean13)
            .with_manufacturer_id("1".to_string())
            .with_created_at(1_768_435_200)
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Tomato paste".to_string(),
            brand: "Altyn Asyr".to_string(),
            weight: "500".to_string(),
            unit: Unit::Gram,
            packaging: "Glass jar".to_string(),
            is_food_product: true,
            shelf_life: Some("24 months".to_string()),
            image_url: None,
        }
    }

    #[test]
    fn test_build_product() {
        let product = builder().build().unwrap();
        assert_eq!(product.product_id(), "p1");
        assert_eq!(product.unit(), Unit::Litre);
        assert_eq!(product.barcode_type(), BarcodeType::Ean13);
        assert_eq!(product.status(), ProductStatus::Pending);
        assert!(!product.verified_by_gs1());
        assert_eq!(product.shelf_life(), None);

        let verified = builder()
            .with_status(ProductStatus::Verified)
            .build()
            .unwrap();
        assert!(verified.verified_by_gs1());
    }

    /// Tests that each required field is enforced.
    #[test]
    fn test_build_missing_fields() {
        match builder().with_brand(" ".to_string()).build() {
            Err(ProductBuilderError::MissingRequiredField(msg)) => assert_eq!(msg, "Missing brand"),
            res => panic!("Expected MissingRequiredField, got {:?}", res),
        }

        match builder()
            .with_gtin(String::new(), BarcodeType::Ean13)
            .build()
        {
            Err(ProductBuilderError::MissingRequiredField(msg)) => assert_eq!(msg, "Missing gtin"),
            res => panic!("Expected MissingRequiredField, got {:?}", res),
        }
    }

    /// Tests that the barcode must validate for its symbology.
    #[test]
    fn test_build_invalid_gtin() {
        match builder()
            .with_gtin("4839000010013".to_string(), BarcodeType::Ean13)
            .build()
        {
            Err(ProductBuilderError::InvalidGtin(err)) => {
                assert_eq!(err.code(), "CHECK_DIGIT_MISMATCH")
            }
            res => panic!("Expected InvalidGtin, got {:?}", res),
        }

        let ean8 = builder()
            .with_gtin("40170725".to_string(), BarcodeType::Ean8)
            .build()
            .unwrap();
        assert_eq!(ean8.barcode_type(), BarcodeType::Ean8);
    }

    #[test]
    fn test_status_transitions() {
        use ProductStatus::*;

        assert!(Pending.can_transition_to(Verified));
        assert!(Pending.can_transition_to(Rejected));
        for from in &[Verified, Rejected] {
            for to in ProductStatus::ALL.iter() {
                assert!(!from.can_transition_to(*to));
            }
        }
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_status_and_unit_parsing() {
        assert_eq!("Verified".parse::<ProductStatus>().unwrap(), ProductStatus::Verified);
        assert_eq!(ProductStatus::Rejected.to_string(), "rejected");
        assert_eq!(
            "all".parse::<ProductStatus>().unwrap_err().argument(),
            "status"
        );
        assert_eq!("ml".parse::<Unit>().unwrap(), Unit::Millilitre);
        assert_eq!(Unit::Piece.to_string(), "pcs");
        assert!("lb".parse::<Unit>().is_err());
    }

    /// Tests validation of the registration form.
    #[test]
    fn test_draft_validate() {
        assert!(draft().validate().is_ok());

        let err = ProductDraft {
            name: String::new(),
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.argument(), "name");

        let err = ProductDraft {
            shelf_life: None,
            ..draft()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.argument(), "shelf_life");

        let non_food = ProductDraft {
            is_food_product: false,
            ..draft()
        };
        assert!(non_food.validate().is_ok());
        assert_eq!(non_food.effective_shelf_life(), None);
        assert_eq!(draft().effective_shelf_life(), Some("24 months".to_string()));
    }

    #[test]
    fn test_filter_matches() {
        let product = builder().build().unwrap();

        assert!(ProductFilter::new().matches(&product));
        assert!(ProductFilter::new()
            .with_search("MILK".to_string())
            .matches(&product));
        assert!(ProductFilter::new()
            .with_search("suyt".to_string())
            .matches(&product));
        assert!(ProductFilter::new()
            .with_search("90000100".to_string())
            .matches(&product));
        assert!(!ProductFilter::new()
            .with_search("juice".to_string())
            .matches(&product));
        assert!(ProductFilter::new()
            .with_search("bereket".to_string())
            .with_search_manufacturer_ids(vec!["1".to_string()])
            .matches(&product));
        assert!(!ProductFilter::new()
            .with_search("rowshen".to_string())
            .with_search_manufacturer_ids(vec!["2".to_string()])
            .matches(&product));
        assert!(ProductFilter::new()
            .with_status(ProductStatus::Pending)
            .with_manufacturer_id("1".to_string())
            .matches(&product));
        assert!(!ProductFilter::new()
            .with_status(ProductStatus::Verified)
            .matches(&product));
        assert!(!ProductFilter::new()
            .with_manufacturer_id("2".to_string())
            .matches(&product));
    }

    #[test]
    fn test_status_counts() {
        let mut counts = StatusCounts::default();
        counts.record(ProductStatus::Pending);
        counts.record(ProductStatus::Verified);
        counts.record(ProductStatus::Verified);
        assert_eq!(
            counts,
            StatusCounts {
                total: 3,
                pending: 1,
                verified: 2,
                rejected: 0,
            }
        );
    }
}
