//! Session facade over catalog and store
//!
//! A `Shop` couples the in-memory [`Catalog`] with a [`ProductStore`]. The
//! document is loaded once when the shop opens; every successful mutation
//! triggers an immediate save of the full collection.
//!
//! Save failures are reported but never fatal: the in-memory mutation is
//! kept, not rolled back, so memory and disk can diverge until the next
//! successful save. Each mutation outcome carries a `persisted` flag so
//! callers can warn about possible data loss between runs.

use anyhow::{Context, Result};
use tracing::error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::models::{MovementKind, Product, ProductUpdate};
use crate::store::ProductStore;

/// Outcome of a successful mutation
///
/// `persisted` is false when the in-memory change could not be written to
/// disk; the change survives for the rest of the session but may be lost
/// between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub persisted: bool,
}

/// A running shop session
pub struct Shop {
    catalog: Catalog,
    store: ProductStore,
    config: Config,
}

impl Shop {
    /// Open the shop using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(config))
    }

    /// Open the shop with a specific configuration
    ///
    /// Loads the product document once; a missing or unreadable document
    /// degrades to an empty shop.
    pub fn open_with_config(config: Config) -> Self {
        let store = ProductStore::new(&config);
        let catalog = Catalog::from_products(store.load());
        Self {
            catalog,
            store,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Read operations ====================

    /// Find the first product matching `name`, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.catalog.find_by_name(name)
    }

    /// Find all products whose name contains `term`, case-insensitively
    pub fn search(&self, term: &str) -> Vec<&Product> {
        self.catalog.find_by_substring(term)
    }

    /// All products at or below the given stock threshold
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.catalog.low_stock(threshold)
    }

    /// All products at or below the configured stock threshold
    pub fn low_stock_default(&self) -> Vec<&Product> {
        self.catalog.low_stock(self.config.low_stock_threshold)
    }

    /// Full inventory report, in catalog order
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Number of products
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    // ==================== Mutating operations ====================

    /// Register a new product and save
    pub fn register(
        &mut self,
        name: impl Into<String>,
        brand: impl Into<String>,
        stock: u32,
        price: f64,
    ) -> Result<Applied<Product>, CatalogError> {
        let product = self.catalog.register(name, brand, stock, price)?.clone();
        let persisted = self.save_catalog();
        Ok(Applied {
            value: product,
            persisted,
        })
    }

    /// Edit the first product matching `name` and save
    pub fn edit(
        &mut self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<Applied<Product>, CatalogError> {
        let product = self.catalog.edit(name, update)?.clone();
        let persisted = self.save_catalog();
        Ok(Applied {
            value: product,
            persisted,
        })
    }

    /// Delete the first product matching `name` and save
    pub fn delete(&mut self, name: &str) -> Result<Applied<Product>, CatalogError> {
        let removed = self.catalog.delete(name)?;
        let persisted = self.save_catalog();
        Ok(Applied {
            value: removed,
            persisted,
        })
    }

    /// Record a stock movement and save
    ///
    /// Returns the new stock level.
    pub fn record_movement(
        &mut self,
        name: &str,
        kind: MovementKind,
        quantity: u32,
    ) -> Result<Applied<u32>, CatalogError> {
        let new_stock = self.catalog.record_movement(name, kind, quantity)?;
        let persisted = self.save_catalog();
        Ok(Applied {
            value: new_stock,
            persisted,
        })
    }

    /// Save the current collection, reporting failure without rolling back
    fn save_catalog(&self) -> bool {
        match self.store.save(self.catalog.products()) {
            Ok(()) => true,
            Err(err) => {
                error!("failed to save product document, in-memory changes kept: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            low_stock_threshold: 5,
        }
    }

    #[test]
    fn test_open_creates_empty_shop() {
        let temp_dir = TempDir::new().unwrap();
        let shop = Shop::open_with_config(test_config(&temp_dir));
        assert_eq!(shop.product_count(), 0);
    }

    #[test]
    fn test_register_saves_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let mut shop = Shop::open_with_config(config.clone());
        let applied = shop.register("Widget", "Acme", 10, 2.5).unwrap();
        assert!(applied.persisted);

        // No explicit save step; the document already exists on disk.
        assert!(config.products_path().exists());
    }

    #[test]
    fn test_data_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut shop = Shop::open_with_config(config.clone());
            shop.register("Widget", "Acme", 10, 2.5).unwrap();
            shop.register("Gadget", "Globex", 3, 9.99).unwrap();
        }

        let shop = Shop::open_with_config(config);
        assert_eq!(shop.product_count(), 2);
        let found = shop.find_by_name("widget").unwrap();
        assert_eq!(found.brand, "Acme");
    }

    #[test]
    fn test_delete_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut shop = Shop::open_with_config(config.clone());
            shop.register("Widget", "Acme", 10, 2.5).unwrap();
            let applied = shop.delete("widget").unwrap();
            assert_eq!(applied.value.name, "Widget");
        }

        let shop = Shop::open_with_config(config);
        assert_eq!(shop.product_count(), 0);
    }

    #[test]
    fn test_movement_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut shop = Shop::open_with_config(config.clone());
            shop.register("Widget", "Acme", 10, 2.5).unwrap();
            let applied = shop
                .record_movement("Widget", MovementKind::Outflow, 4)
                .unwrap();
            assert_eq!(applied.value, 6);
        }

        let shop = Shop::open_with_config(config);
        assert_eq!(shop.find_by_name("Widget").unwrap().stock, 6);
    }

    #[test]
    fn test_failed_movement_does_not_save_or_mutate() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let mut shop = Shop::open_with_config(config.clone());
        shop.register("Widget", "Acme", 3, 2.5).unwrap();

        let err = shop
            .record_movement("Widget", MovementKind::Outflow, 5)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InsufficientStock { .. }));
        assert_eq!(shop.find_by_name("Widget").unwrap().stock, 3);

        // Disk still has the pre-movement stock.
        let reopened = Shop::open_with_config(config);
        assert_eq!(reopened.find_by_name("Widget").unwrap().stock, 3);
    }

    #[test]
    fn test_low_stock_uses_configured_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            low_stock_threshold: 2,
        };

        let mut shop = Shop::open_with_config(config);
        shop.register("Widget", "Acme", 3, 2.5).unwrap();
        shop.register("Gadget", "Globex", 1, 9.99).unwrap();

        let alerts = shop.low_stock_default();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name, "Gadget");

        // Explicit threshold overrides the configured one.
        assert_eq!(shop.low_stock(5).len(), 2);
    }

    #[test]
    fn test_report_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut shop = Shop::open_with_config(test_config(&temp_dir));
        shop.register("Widget", "Acme", 10, 2.5).unwrap();
        shop.register("Gadget", "Globex", 3, 9.99).unwrap();

        let first: Vec<Product> = shop.products().to_vec();
        let second: Vec<Product> = shop.products().to_vec();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_failure_keeps_in_memory_state() {
        let temp_dir = TempDir::new().unwrap();

        // Point the data dir below a regular file so directory creation and
        // writes fail.
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = Config {
            data_dir: PathBuf::from(&blocker).join("nested"),
            low_stock_threshold: 5,
        };

        let mut shop = Shop::open_with_config(config);
        let applied = shop.register("Widget", "Acme", 10, 2.5).unwrap();

        assert!(!applied.persisted);
        // The mutation is kept in memory despite the failed save.
        assert_eq!(shop.product_count(), 1);
        assert!(shop.find_by_name("Widget").is_some());
    }
}
