//! Interactive menu session
//!
//! The role-gated menu loop: a seller gets the full operation set, a buyer
//! gets the read-only subset. The session opens one `Shop` up front (the
//! document is loaded once) and every mutation inside the loop saves
//! immediately. Operation failures are printed and control returns to the
//! menu; nothing here terminates the process.

use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use shopstock_core::{MovementKind, Shop};

use crate::commands;
use crate::output::Output;
use crate::prompt::{prompt, prompt_parse};

/// User role selecting the reachable operation set
///
/// Role gating lives entirely in this menu layer; the core exposes all
/// operations uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full access: register, edit, delete, movements, report, alerts
    Seller,
    /// Read-only access: search, report, alerts
    Buyer,
}

/// Error returned when a role token is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized role '{0}' (expected 'seller' or 'buyer')")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seller" => Ok(Role::Seller),
            "buyer" => Ok(Role::Buyer),
            _ => Err(InvalidRole(s.trim().to_string())),
        }
    }
}

/// A single menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Register,
    Edit,
    Delete,
    Movement,
    Report,
    Alert,
    Search,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::Register => "Register product",
            MenuAction::Edit => "Edit product",
            MenuAction::Delete => "Delete product",
            MenuAction::Movement => "Record stock movement",
            MenuAction::Report => "Inventory report",
            MenuAction::Alert => "Low-stock alerts",
            MenuAction::Search => "Search products",
            MenuAction::Quit => "Quit",
        }
    }
}

impl Role {
    /// The operations reachable for this role, in menu order
    pub fn actions(&self) -> &'static [MenuAction] {
        match self {
            Role::Seller => &[
                MenuAction::Register,
                MenuAction::Edit,
                MenuAction::Delete,
                MenuAction::Movement,
                MenuAction::Report,
                MenuAction::Alert,
                MenuAction::Quit,
            ],
            Role::Buyer => &[
                MenuAction::Search,
                MenuAction::Report,
                MenuAction::Alert,
                MenuAction::Quit,
            ],
        }
    }
}

/// Run the interactive menu session
///
/// Prompts for a role when none is given on the command line.
pub fn run(role: Option<Role>, output: &Output) -> Result<()> {
    let role = match role {
        Some(role) => role,
        None => ask_role()?,
    };

    let mut shop = Shop::open()?;
    let actions = role.actions();

    loop {
        println!("\nSelect an option:");
        for (i, action) in actions.iter().enumerate() {
            println!("{}. {}", i + 1, action.label());
        }

        let choice = prompt("Option")?;
        let action = match choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| actions.get(i))
        {
            Some(action) => *action,
            None => {
                println!("Invalid option. Try again.");
                continue;
            }
        };

        if action == MenuAction::Quit {
            println!("Goodbye.");
            return Ok(());
        }

        // Operation failures return control to the menu.
        if let Err(err) = dispatch(action, &mut shop, output) {
            println!("{}", err);
        }
    }
}

/// Gather inputs for one action and run it
fn dispatch(action: MenuAction, shop: &mut Shop, output: &Output) -> Result<()> {
    match action {
        MenuAction::Register => {
            let name = prompt("Product name")?;
            let brand = prompt("Brand")?;
            let stock: u32 = prompt_parse("Stock")?;
            let price: f64 = prompt_parse("Price")?;
            commands::product::add(shop, name, brand, stock, price, output)
        }
        MenuAction::Edit => {
            let name = prompt("Name of the product to edit")?;
            commands::product::edit(shop, name, output)
        }
        MenuAction::Delete => {
            let name = prompt("Name of the product to delete")?;
            commands::product::delete(shop, name, false, output)
        }
        MenuAction::Movement => {
            let name = prompt("Product name")?;
            let kind = match MovementKind::from_str(&prompt("Movement kind (inflow/outflow)")?) {
                Ok(kind) => kind,
                Err(err) => {
                    println!("{}", err);
                    return Ok(());
                }
            };
            let quantity: u32 = prompt_parse("Quantity")?;
            commands::stock::record(shop, name, kind, quantity, output)
        }
        MenuAction::Report => commands::product::list(shop, output),
        MenuAction::Alert => commands::stock::alert(shop, None, output),
        MenuAction::Search => {
            let term = prompt("Name of the product to search for")?;
            commands::product::search(shop, term, output)
        }
        MenuAction::Quit => Ok(()),
    }
}

/// Ask for the user's role interactively
fn ask_role() -> Result<Role> {
    loop {
        let input = prompt("Are you a buyer or a seller? (buyer/seller)")?;
        match input.parse() {
            Ok(role) => return Ok(role),
            Err(err @ InvalidRole(_)) => println!("{}", err),
        }
    }
}
