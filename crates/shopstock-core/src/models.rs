//! Data models for shopstock
//!
//! Defines the core data structures: Product, ProductUpdate, and MovementKind.
//! Products are stored as plain JSON records, so the shapes here define the
//! on-disk document format as well.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A product tracked by the shop
///
/// The `name` is the user-facing lookup key (case-insensitive, first match
/// wins); the `id` is the stable internal identifier. `id` and the timestamps
/// carry serde defaults so documents written by older versions, which held
/// only `name`/`brand`/`stock`/`price`, still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name, used for lookups
    pub name: String,
    /// Brand or manufacturer
    pub brand: String,
    /// Units currently in stock
    pub stock: u32,
    /// Unit price
    pub price: f64,
    /// When this product was registered
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When this product was last updated
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product
    pub fn new(name: impl Into<String>, brand: impl Into<String>, stock: u32, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: brand.into(),
            stock,
            price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Update the brand
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
        self.updated_at = Utc::now();
    }

    /// Update the stock level
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.updated_at = Utc::now();
    }

    /// Update the unit price
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive exact match against the product name
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Field-level overrides for editing a product
///
/// `None` keeps the current value. This mirrors the interactive edit flow
/// where pressing Enter on a field leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub stock: Option<u32>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    /// True if no field is overridden
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.stock.is_none() && self.price.is_none()
    }
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Goods arriving; adds to stock
    Inflow,
    /// Goods leaving; requires sufficient stock
    Outflow,
}

/// Error returned when a movement kind token is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized movement kind '{0}' (expected 'inflow' or 'outflow')")]
pub struct InvalidMovementKind(pub String);

impl std::str::FromStr for MovementKind {
    type Err = InvalidMovementKind;

    /// Parse a movement kind token, case-insensitively
    ///
    /// Accepts `inflow`/`in` and `outflow`/`out`; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inflow" | "in" => Ok(MovementKind::Inflow),
            "outflow" | "out" => Ok(MovementKind::Outflow),
            _ => Err(InvalidMovementKind(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementKind::Inflow => write!(f, "inflow"),
            MovementKind::Outflow => write!(f, "outflow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_product_new() {
        let product = Product::new("Widget", "Acme", 10, 2.5);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.brand, "Acme");
        assert_eq!(product.stock, 10);
        assert_eq!(product.price, 2.5);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_product_set_stock() {
        let mut product = Product::new("Widget", "Acme", 10, 2.5);
        let original_updated = product.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));
        product.set_stock(7);
        assert_eq!(product.stock, 7);
        assert!(product.updated_at > original_updated);
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let product = Product::new("Widget", "Acme", 10, 2.5);
        assert!(product.name_matches("widget"));
        assert!(product.name_matches("WIDGET"));
        assert!(!product.name_matches("widgets"));
    }

    #[test]
    fn test_product_serialization() {
        let product = Product::new("Widget", "Acme", 10, 2.5);
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_product_legacy_record_loads() {
        // Records written before ids/timestamps existed only carry the four
        // original fields.
        let json = r#"{"name": "Widget", "brand": "Acme", "stock": 3, "price": 1.25}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.brand, "Acme");
        assert_eq!(product.stock, 3);
        assert_eq!(product.price, 1.25);
        assert!(!product.id.is_nil());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(ProductUpdate::default().is_empty());

        let update = ProductUpdate {
            stock: Some(4),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_movement_kind_parsing() {
        assert_eq!(MovementKind::from_str("inflow").unwrap(), MovementKind::Inflow);
        assert_eq!(MovementKind::from_str("OUTFLOW").unwrap(), MovementKind::Outflow);
        assert_eq!(MovementKind::from_str("In").unwrap(), MovementKind::Inflow);
        assert_eq!(MovementKind::from_str(" out ").unwrap(), MovementKind::Outflow);
    }

    #[test]
    fn test_movement_kind_rejects_unknown_tokens() {
        let err = MovementKind::from_str("sideways").unwrap_err();
        assert_eq!(err.0, "sideways");
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_movement_kind_display() {
        assert_eq!(MovementKind::Inflow.to_string(), "inflow");
        assert_eq!(MovementKind::Outflow.to_string(), "outflow");
    }
}
