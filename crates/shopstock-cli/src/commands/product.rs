//! Product command handlers

use anyhow::{anyhow, Result};

use shopstock_core::{ProductUpdate, Shop};

use crate::commands::warn_if_unsaved;
use crate::output::Output;
use crate::prompt::{confirm, prompt_parse_with_default, prompt_with_default};

/// Register a new product
pub fn add(
    shop: &mut Shop,
    name: String,
    brand: String,
    stock: u32,
    price: f64,
    output: &Output,
) -> Result<()> {
    let applied = shop.register(name, brand, stock, price)?;
    warn_if_unsaved(&applied, output);

    output.success(&format!("Registered product: {}", applied.value.name));
    output.print_product(&applied.value);

    Ok(())
}

/// List the full inventory report
pub fn list(shop: &Shop, output: &Output) -> Result<()> {
    let products: Vec<_> = shop.products().iter().collect();
    output.print_products(&products);
    Ok(())
}

/// Show a single product by name
pub fn show(shop: &Shop, name: String, output: &Output) -> Result<()> {
    let product = shop
        .find_by_name(&name)
        .ok_or_else(|| anyhow!("Product not found: {}", name))?;

    output.print_product(product);
    Ok(())
}

/// Edit a product interactively
///
/// Each field shows its current value; pressing Enter keeps it.
pub fn edit(shop: &mut Shop, name: String, output: &Output) -> Result<()> {
    let current = shop
        .find_by_name(&name)
        .ok_or_else(|| anyhow!("Product not found: {}", name))?
        .clone();

    println!("Editing product: {}", current.name);
    println!("Press Enter to keep current value, or type new value.\n");

    let update = ProductUpdate {
        name: prompt_with_default("Name", &current.name)?,
        brand: prompt_with_default("Brand", &current.brand)?,
        stock: prompt_parse_with_default("Stock", &current.stock.to_string())?,
        price: prompt_parse_with_default("Price", &current.price.to_string())?,
    };

    let applied = shop.edit(&name, update)?;
    warn_if_unsaved(&applied, output);

    output.success("Product updated");
    output.print_product(&applied.value);

    Ok(())
}

/// Delete a product by name
pub fn delete(shop: &mut Shop, name: String, yes: bool, output: &Output) -> Result<()> {
    let product = shop
        .find_by_name(&name)
        .ok_or_else(|| anyhow!("Product not found: {}", name))?;

    // Confirm deletion
    if !yes && output.should_prompt() {
        println!("Delete product: {} ({})", product.name, product.brand);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let applied = shop.delete(&name)?;
    warn_if_unsaved(&applied, output);

    output.success(&format!("Deleted product: {}", applied.value.name));

    Ok(())
}

/// Search products by name substring
pub fn search(shop: &Shop, term: String, output: &Output) -> Result<()> {
    let products = shop.search(&term);
    output.print_products(&products);
    Ok(())
}
