//! Shopstock CLI
//!
//! Command-line interface for shopstock - small-shop inventory management.
//! Subcommands cover scripting use; running without a subcommand starts the
//! interactive role-gated menu.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopstock_core::{MovementKind, Shop};

mod commands;
mod menu;
mod output;
mod prompt;

use menu::Role;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shopstock")]
#[command(about = "Shopstock - inventory management for a small shop")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu session
    Menu {
        /// Role to start as (seller or buyer); prompted for if omitted
        #[arg(long)]
        role: Option<Role>,
    },
    /// Register a new product
    Add {
        /// Product name
        name: String,
        /// Brand or manufacturer
        brand: String,
        /// Units in stock
        stock: u32,
        /// Unit price
        price: f64,
    },
    /// Show the full inventory report
    #[command(alias = "ls")]
    List,
    /// Show a single product
    Show {
        /// Product name (case-insensitive)
        name: String,
    },
    /// Edit a product interactively
    Edit {
        /// Product name (case-insensitive)
        name: String,
    },
    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product name (case-insensitive)
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Record a stock movement
    Move {
        /// Product name (case-insensitive)
        name: String,
        /// Movement kind: inflow or outflow
        kind: MovementKind,
        /// Number of units
        quantity: u32,
    },
    /// Search products by name substring
    Search {
        /// Search term (case-insensitive)
        term: String,
    },
    /// Show products at or below the low-stock threshold
    Alert {
        /// Threshold override (defaults to the configured value)
        #[arg(short, long)]
        threshold: Option<u32>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, low_stock_threshold)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match cli.command {
        // No subcommand: default to the interactive menu.
        None => menu::run(None, &output),
        Some(Commands::Menu { role }) => menu::run(role, &output),
        Some(Commands::Config { command }) => handle_config_command(command, &output),
        Some(Commands::Add {
            name,
            brand,
            stock,
            price,
        }) => with_shop(&output, |shop, output| {
            commands::product::add(shop, name, brand, stock, price, output)
        }),
        Some(Commands::List) => {
            with_shop(&output, |shop, output| commands::product::list(shop, output))
        }
        Some(Commands::Show { name }) => with_shop(&output, |shop, output| {
            commands::product::show(shop, name, output)
        }),
        Some(Commands::Edit { name }) => with_shop(&output, |shop, output| {
            commands::product::edit(shop, name, output)
        }),
        Some(Commands::Delete { name, yes }) => with_shop(&output, |shop, output| {
            commands::product::delete(shop, name, yes, output)
        }),
        Some(Commands::Move {
            name,
            kind,
            quantity,
        }) => with_shop(&output, |shop, output| {
            commands::stock::record(shop, name, kind, quantity, output)
        }),
        Some(Commands::Search { term }) => with_shop(&output, |shop, output| {
            commands::product::search(shop, term, output)
        }),
        Some(Commands::Alert { threshold }) => with_shop(&output, |shop, output| {
            commands::stock::alert(shop, threshold, output)
        }),
    }
}

/// Open the shop (loading the document once) and run one command against it
fn with_shop(
    output: &Output,
    command: impl FnOnce(&mut Shop, &Output) -> Result<()>,
) -> Result<()> {
    let mut shop = Shop::open()?;
    command(&mut shop, output)
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize tracing to stderr, filtered by SHOPSTOCK_LOG
fn init_logging() {
    let filter = EnvFilter::try_from_env("SHOPSTOCK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
