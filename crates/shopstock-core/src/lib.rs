//! Shopstock Core Library
//!
//! This crate provides the core functionality for shopstock, a flat-file
//! inventory manager for a small shop.
//!
//! # Architecture
//!
//! The product collection lives in memory for the length of a session and is
//! persisted as a single JSON document. The document is loaded once when a
//! [`Shop`] opens; every successful mutation saves the full collection.
//!
//! # Quick Start
//!
//! ```text
//! let mut shop = Shop::open()?;
//!
//! // Register a product
//! shop.register("Widget", "Acme", 10, 2.5)?;
//!
//! // Query the catalog
//! let matches = shop.search("wid");
//! let alerts = shop.low_stock_default();
//! ```
//!
//! # Modules
//!
//! - `shop`: session facade coupling catalog and store (main entry point)
//! - `catalog`: in-memory product collection and operations
//! - `models`: data structures for products and stock movements
//! - `store`: JSON document persistence
//! - `config`: application configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod shop;
pub mod store;

pub use catalog::{Catalog, CatalogError, DEFAULT_LOW_STOCK_THRESHOLD};
pub use config::Config;
pub use models::{InvalidMovementKind, MovementKind, Product, ProductUpdate};
pub use shop::{Applied, Shop};
pub use store::{ProductStore, StoreError, StoreResult};
