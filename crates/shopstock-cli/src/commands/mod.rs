//! Command handlers

pub mod config;
pub mod product;
pub mod stock;

use shopstock_core::Applied;

use crate::output::Output;

/// Warn when a mutation could not be written to disk
///
/// The in-memory change is kept for this session but may be lost between
/// runs.
pub(crate) fn warn_if_unsaved<T>(applied: &Applied<T>, output: &Output) {
    if !applied.persisted {
        output.warn("Could not save the product document; this change may be lost when the session ends.");
    }
}
