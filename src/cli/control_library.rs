//! Control library commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, run_paged_list};
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::ControlLibraryApi;
use crate::client::options::{
    DeleteCustomControlLibraryOptions, GetControlLibraryOptions, ListControlLibrariesOptions,
};
use crate::error::Result;
use crate::models::ControlLibraryDisplay;
use crate::output;

/// Run the control-library list command
pub async fn list(
    opts: &GlobalOptions,
    library_type: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_paged_list::<_, ControlLibraryDisplay, _>(opts, pagination, "control libraries", |limit| {
        let options = ListControlLibrariesOptions::new().limit(limit);
        match library_type {
            Some(t) => options.control_library_type(t),
            None => options,
        }
    })
    .await
}

/// Run the control-library get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let library = ctx
        .client
        .get_control_library(&GetControlLibraryOptions::new(id))
        .await?
        .into_result()
        .unwrap_or_default();

    let rows = vec![ControlLibraryDisplay::from(library.clone())];
    output::print_detail(&library, &rows, ctx.format)
}

/// Run the control-library delete command
pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm(&format!("Delete control library {}?", id), yes)? {
        return Ok(());
    }

    debug!("Deleting control library {}", id);
    let deleted = ctx
        .client
        .delete_custom_control_library(&DeleteCustomControlLibraryOptions::new(id))
        .await?
        .into_result()
        .and_then(|d| d.deleted);

    match deleted {
        Some(message) => println!("{} {}", "✓".green(), message),
        None => println!("{} Control library {} deleted", "✓".green(), id),
    }
    Ok(())
}
