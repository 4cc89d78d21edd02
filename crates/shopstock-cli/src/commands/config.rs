//! Config command handlers

use anyhow::{bail, Context, Result};

use shopstock_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "low_stock_threshold": config.low_stock_threshold,
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:            {}", config.data_dir.display());
            println!("  low_stock_threshold: {}", config.low_stock_threshold);
            println!();
            println!("Config file:      {}", Config::config_file_path().display());
            println!("Product document: {}", config.products_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "low_stock_threshold" => {
            config.low_stock_threshold = value
                .parse()
                .context("Invalid value for low_stock_threshold. Use a non-negative integer.")?;
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, low_stock_threshold",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
