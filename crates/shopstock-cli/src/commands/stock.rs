//! Stock movement and alert command handlers

use anyhow::Result;

use shopstock_core::{MovementKind, Shop};

use crate::commands::warn_if_unsaved;
use crate::output::Output;

/// Record a stock movement
pub fn record(
    shop: &mut Shop,
    name: String,
    kind: MovementKind,
    quantity: u32,
    output: &Output,
) -> Result<()> {
    let applied = shop.record_movement(&name, kind, quantity)?;
    warn_if_unsaved(&applied, output);

    output.success(&format!(
        "Recorded {} of {} for '{}' (new stock: {})",
        kind, quantity, name, applied.value
    ));

    Ok(())
}

/// Show the low-stock alert listing
pub fn alert(shop: &Shop, threshold: Option<u32>, output: &Output) -> Result<()> {
    let threshold = threshold.unwrap_or(shop.config().low_stock_threshold);
    let products = shop.low_stock(threshold);
    output.print_low_stock(&products, threshold);
    Ok(())
}
