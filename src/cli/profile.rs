//! Profile commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, run_paged_list};
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::ProfileApi;
use crate::client::options::{DeleteCustomProfileOptions, GetProfileOptions, ListProfilesOptions};
use crate::error::Result;
use crate::models::ProfileDisplay;
use crate::output;

/// Run the profile list command
pub async fn list(
    opts: &GlobalOptions,
    profile_type: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_paged_list::<_, ProfileDisplay, _>(opts, pagination, "profiles", |limit| {
        let options = ListProfilesOptions::new().limit(limit);
        match profile_type {
            Some(t) => options.profile_type(t),
            None => options,
        }
    })
    .await
}

/// Run the profile get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let profile = ctx
        .client
        .get_profile(&GetProfileOptions::new(id))
        .await?
        .into_result()
        .unwrap_or_default();

    let rows = vec![ProfileDisplay::from(profile.clone())];
    output::print_detail(&profile, &rows, ctx.format)
}

/// Run the profile delete command
pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm(&format!("Delete profile {}?", id), yes)? {
        return Ok(());
    }

    debug!("Deleting profile {}", id);
    ctx.client
        .delete_custom_profile(&DeleteCustomProfileOptions::new(id))
        .await?;

    println!("{} Profile {} deleted", "✓".green(), id.bold());
    Ok(())
}
