//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use shopstock_core::Product;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is in JSON mode
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a single product in detail
    pub fn print_product(&self, product: &Product) {
        match self.format {
            OutputFormat::Human => {
                println!("Name:    {}", product.name);
                println!("Brand:   {}", product.brand);
                println!("Stock:   {}", product.stock);
                println!("Price:   {:.2}", product.price);
                println!("Created: {}", product.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated: {}", product.updated_at.format("%Y-%m-%d %H:%M"));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(product).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", product.name);
            }
        }
    }

    /// Print a list of products (inventory report / search results)
    pub fn print_products(&self, products: &[&Product]) {
        match self.format {
            OutputFormat::Human => {
                if products.is_empty() {
                    println!("No products found.");
                    return;
                }
                for product in products {
                    println!(
                        "{} | {} | stock: {} | price: {:.2}",
                        truncate(&product.name, 30),
                        truncate(&product.brand, 20),
                        product.stock,
                        product.price
                    );
                }
                println!("\n{} product(s)", products.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(products).unwrap());
            }
            OutputFormat::Quiet => {
                for product in products {
                    println!("{}", product.name);
                }
            }
        }
    }

    /// Print the low-stock alert listing
    pub fn print_low_stock(&self, products: &[&Product], threshold: u32) {
        match self.format {
            OutputFormat::Human => {
                if products.is_empty() {
                    println!("No low-stock products.");
                    return;
                }
                println!("Low-stock products (threshold {}):", threshold);
                for product in products {
                    println!("- {} ({} in stock)", product.name, product.stock);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(products).unwrap());
            }
            OutputFormat::Quiet => {
                for product in products {
                    println!("{}", product.name);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a warning to stderr
    ///
    /// Shown in every mode; warnings carry information the caller should not
    /// lose to scripting flags (e.g. a failed save).
    pub fn warn(&self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }
}

/// Truncate a string to max length in characters, adding "..." if truncated
///
/// Counts characters rather than bytes so multi-byte names never split mid
/// character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
