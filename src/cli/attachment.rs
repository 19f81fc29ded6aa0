//! Attachment commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm, run_paged_list};
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::AttachmentApi;
use crate::client::options::{
    DeleteProfileAttachmentOptions, GetProfileAttachmentOptions, ListAttachmentsAccountOptions,
    ListAttachmentsOptions,
};
use crate::error::Result;
use crate::models::AttachmentDisplay;
use crate::output;

/// Run the attachment list command
///
/// With a profile, lists that profile's attachments; otherwise every
/// attachment in the account.
pub async fn list(
    opts: &GlobalOptions,
    profile_id: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    match profile_id {
        Some(profile_id) => {
            run_paged_list::<_, AttachmentDisplay, _>(opts, pagination, "attachments", |limit| {
                ListAttachmentsOptions::new(profile_id).limit(limit)
            })
            .await
        }
        None => {
            run_paged_list::<_, AttachmentDisplay, _>(
                opts,
                pagination,
                "account attachments",
                |limit| ListAttachmentsAccountOptions::new().limit(limit),
            )
            .await
        }
    }
}

/// Run the attachment get command
pub async fn get(opts: &GlobalOptions, profile_id: &str, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let attachment = ctx
        .client
        .get_profile_attachment(&GetProfileAttachmentOptions::new(profile_id, id))
        .await?
        .into_result()
        .unwrap_or_default();

    let rows = vec![AttachmentDisplay::from(attachment.clone())];
    output::print_detail(&attachment, &rows, ctx.format)
}

/// Run the attachment delete command
pub async fn delete(opts: &GlobalOptions, profile_id: &str, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm(
        &format!("Delete attachment {} of profile {}?", id, profile_id),
        yes,
    )? {
        return Ok(());
    }

    debug!("Deleting attachment {} of profile {}", id, profile_id);
    ctx.client
        .delete_profile_attachment(&DeleteProfileAttachmentOptions::new(profile_id, id))
        .await?;

    println!("{} Attachment {} deleted", "✓".green(), id.bold());
    Ok(())
}
