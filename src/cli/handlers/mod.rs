//! Reusable command handler patterns

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::error::Result;

mod list;

pub use list::run_paged_list;

/// Ask before a destructive action. `yes` skips the prompt.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        println!("{}", "Cancelled.".dimmed());
    }
    Ok(confirmed)
}
