//! Interactive input helpers
//!
//! Thin wrappers over stdin used by the menu session and the interactive
//! edit flow. Parse failures are handled here by re-asking, so invalid
//! numeric input never reaches the catalog.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;

use anyhow::Result;

/// Prompt for a line of input, trimmed
pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt with a default value, returns None if user keeps default
pub fn prompt_with_default(label: &str, default: &str) -> Result<Option<String>> {
    if default.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, default);
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}

/// Prompt for a value of type `T`, re-asking until it parses
pub fn prompt_parse<T>(label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        let input = prompt(label)?;
        match input.parse() {
            Ok(value) => return Ok(value),
            Err(err) => println!("Invalid value: {}", err),
        }
    }
}

/// Prompt for an optional override of type `T`
///
/// Empty input keeps the current value (returns None); invalid input
/// re-asks.
pub fn prompt_parse_with_default<T>(label: &str, current: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        match prompt_with_default(label, current)? {
            None => return Ok(None),
            Some(input) => match input.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => println!("Invalid value: {}", err),
            },
        }
    }
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(label: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }

    print!("{} [y/N] ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
