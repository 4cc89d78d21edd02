//! In-memory product catalog
//!
//! The `Catalog` owns the live product list for a session and exposes all of
//! the operations the shop performs on it: register, edit, delete, stock
//! movements, search, reporting, and low-stock alerts. It does no I/O; the
//! [`Shop`](crate::shop::Shop) facade pairs it with a store for persistence.
//!
//! Products are kept in registration order. Lookups resolve by first
//! case-insensitive name match; name uniqueness is not enforced, so a
//! duplicate name always resolves to the earliest registration.

use thiserror::Error;

use crate::models::{InvalidMovementKind, MovementKind, Product, ProductUpdate};

/// Default threshold for low-stock alerts
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Errors from catalog operations
///
/// None of these are fatal; callers report them and return to the prompt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// No product matched the given name
    #[error("product not found: '{name}'")]
    NotFound { name: String },

    /// An outflow asked for more units than are in stock
    #[error("insufficient stock for '{name}': {stock} in stock, {requested} requested")]
    InsufficientStock {
        name: String,
        stock: u32,
        requested: u32,
    },

    /// A movement kind token was not recognized
    #[error("unrecognized movement kind '{token}' (expected 'inflow' or 'outflow')")]
    InvalidKind { token: String },

    /// A numeric field failed validation
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<InvalidMovementKind> for CatalogError {
    fn from(err: InvalidMovementKind) -> Self {
        CatalogError::InvalidKind { token: err.0 }
    }
}

/// The in-memory product collection
///
/// Insertion order is registration order and is preserved across load/save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an existing product list (e.g. loaded from disk)
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find the first product whose name matches, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name_matches(name))
    }

    /// Find all products whose name contains the term, case-insensitively
    ///
    /// Results keep catalog order.
    pub fn find_by_substring(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Register a new product
    ///
    /// Appends unconditionally; no uniqueness check against existing names.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        brand: impl Into<String>,
        stock: u32,
        price: f64,
    ) -> Result<&Product, CatalogError> {
        validate_price(price)?;
        self.products.push(Product::new(name, brand, stock, price));
        Ok(self.products.last().expect("just pushed"))
    }

    /// Edit the first product matching `name`
    ///
    /// Fields absent from the update keep their current value.
    pub fn edit(&mut self, name: &str, update: ProductUpdate) -> Result<&Product, CatalogError> {
        if let Some(price) = update.price {
            validate_price(price)?;
        }

        let index = self.index_of(name)?;
        let product = &mut self.products[index];

        if let Some(new_name) = update.name {
            product.set_name(new_name);
        }
        if let Some(brand) = update.brand {
            product.set_brand(brand);
        }
        if let Some(stock) = update.stock {
            product.set_stock(stock);
        }
        if let Some(price) = update.price {
            product.set_price(price);
        }

        Ok(&self.products[index])
    }

    /// Delete the first product matching `name`, returning it
    pub fn delete(&mut self, name: &str) -> Result<Product, CatalogError> {
        let index = self.index_of(name)?;
        Ok(self.products.remove(index))
    }

    /// Record a stock movement against the first product matching `name`
    ///
    /// Inflow adds to stock (saturating at the integer ceiling). Outflow
    /// requires sufficient stock; on failure the stock is left unchanged.
    /// Returns the new stock level.
    pub fn record_movement(
        &mut self,
        name: &str,
        kind: MovementKind,
        quantity: u32,
    ) -> Result<u32, CatalogError> {
        let index = self.index_of(name)?;
        let product = &mut self.products[index];

        let new_stock = match kind {
            MovementKind::Inflow => product.stock.saturating_add(quantity),
            MovementKind::Outflow => {
                if product.stock < quantity {
                    return Err(CatalogError::InsufficientStock {
                        name: product.name.clone(),
                        stock: product.stock,
                        requested: quantity,
                    });
                }
                product.stock - quantity
            }
        };

        product.set_stock(new_stock);
        Ok(new_stock)
    }

    /// Record a stock movement from an unparsed kind token
    ///
    /// The token is recognized case-insensitively; anything other than an
    /// inflow/outflow spelling fails with `InvalidKind` before the catalog
    /// is touched.
    pub fn record_movement_token(
        &mut self,
        name: &str,
        token: &str,
        quantity: u32,
    ) -> Result<u32, CatalogError> {
        let kind: MovementKind = token.parse()?;
        self.record_movement(name, kind, quantity)
    }

    /// All products at or below the given stock threshold, in catalog order
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock <= threshold)
            .collect()
    }

    fn index_of(&self, name: &str) -> Result<usize, CatalogError> {
        self.products
            .iter()
            .position(|p| p.name_matches(name))
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }
}

/// Validate a price at the construction/edit boundary
///
/// Prices must be finite and non-negative.
fn validate_price(price: f64) -> Result<(), CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidInput {
            reason: format!("price must be a non-negative number, got {}", price),
        });
    }
    Ok(())
}
