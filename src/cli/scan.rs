//! Scan commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AttachmentApi;
use crate::client::options::CreateScanOptions;
use crate::error::Result;
use crate::models::ScanDisplay;
use crate::output;

/// Run the scan create command
pub async fn create(opts: &GlobalOptions, attachment_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let scan = ctx
        .client
        .create_scan(&CreateScanOptions::new(attachment_id))
        .await?
        .into_result()
        .unwrap_or_default();

    let rows = vec![ScanDisplay::from(scan.clone())];
    output::print_detail(&scan, &rows, ctx.format)
}
