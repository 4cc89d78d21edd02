//! Product document persistence
//!
//! Handles saving and loading the product collection as a single JSON
//! document. Uses atomic writes (write to temp file, then rename) so the
//! document is never left in a partially-written state.
//!
//! Storage location: `~/.local/share/shopstock/products.json` (configurable
//! via `Config`). The document is a pretty-printed JSON array of product
//! records; each save overwrites the full collection.
//!
//! Load failures are not fatal: a missing, unreadable, or malformed document
//! degrades to an empty shop, with the failure logged.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;
use crate::models::Product;

/// Errors from persistence operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the product document
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the product document
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Document content could not be parsed
    #[error("Invalid product document '{path}': {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence adapter for the product collection
pub struct ProductStore {
    path: PathBuf,
}

impl ProductStore {
    /// Create a store backed by the document path from the configuration
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.products_path(),
        }
    }

    /// Create a store backed by an explicit document path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the product document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a document exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the product collection, degrading to empty on any failure
    ///
    /// A missing document means a fresh shop. Unreadable or malformed content
    /// is logged and also yields an empty collection; it never raises.
    pub fn load(&self) -> Vec<Product> {
        match self.try_load() {
            Ok(products) => products,
            Err(err) => {
                error!("failed to load product document, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Load the product collection, surfacing failures
    ///
    /// Returns an empty collection only for a genuinely missing document.
    pub fn try_load(&self) -> StoreResult<Vec<Product>> {
        if !self.path.exists() {
            debug!("no product document at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::InvalidFormat {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the full product collection, overwriting prior content
    ///
    /// The document is pretty-printed and written atomically.
    pub fn save(&self, products: &[Product]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(products).map_err(|source| {
            StoreError::InvalidFormat {
                path: self.path.clone(),
                source,
            }
        })?;

        atomic_write(&self.path, json.as_bytes())?;
        debug!("saved {} product(s) to {:?}", products.len(), self.path);
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    file.write_all(data).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    // Sync to disk before rename
    file.sync_all().map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| StoreError::Rename {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> ProductStore {
        ProductStore::with_path(temp_dir.path().join("products.json"))
    }

    #[test]
    fn test_missing_document_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert!(!store.exists());
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let products = vec![
            Product::new("Widget", "Acme", 10, 2.5),
            Product::new("Gadget", "Globex", 3, 9.99),
        ];
        store.save(&products).unwrap();
        assert!(store.exists());

        let loaded = store.try_load().unwrap();
        assert_eq!(loaded, products);
    }

    #[test]
    fn test_save_of_loaded_collection_reproduces_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store
            .save(&[Product::new("Widget", "Acme", 10, 2.5)])
            .unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();

        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn test_order_preserved_across_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let products: Vec<Product> = (0..10)
            .map(|i| Product::new(format!("Product {}", i), "Acme", i, 1.0))
            .collect();
        store.save(&products).unwrap();

        let names: Vec<String> = store.load().into_iter().map(|p| p.name).collect();
        let expected: Vec<String> = products.into_iter().map(|p| p.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store
            .save(&[
                Product::new("Widget", "Acme", 10, 2.5),
                Product::new("Gadget", "Globex", 3, 9.99),
            ])
            .unwrap();
        store.save(&[Product::new("Gizmo", "Initech", 1, 4.0)]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Gizmo");
    }

    #[test]
    fn test_malformed_document_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        fs::write(store.path(), "{ not json ]").unwrap();

        assert!(store.load().is_empty());
        assert!(matches!(
            store.try_load(),
            Err(StoreError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_legacy_four_field_document_loads() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        fs::write(
            store.path(),
            r#"[
  {
    "name": "Widget",
    "brand": "Acme",
    "stock": 10,
    "price": 2.5
  }
]"#,
        )
        .unwrap();

        let loaded = store.try_load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Widget");
        assert_eq!(loaded[0].stock, 10);
    }

    #[test]
    fn test_document_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store
            .save(&[Product::new("Widget", "Acme", 10, 2.5)])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n  "));
        assert!(content.contains("\"name\": \"Widget\""));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.save(&[Product::new("Widget", "Acme", 1, 1.0)]).unwrap();

        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("products.json");
        let store = ProductStore::with_path(&nested);

        store.save(&[Product::new("Widget", "Acme", 1, 1.0)]).unwrap();

        assert!(nested.exists());
        assert_eq!(store.load().len(), 1);
    }
}
