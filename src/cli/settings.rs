//! Settings commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::SettingsApi;
use crate::client::models::Settings;
use crate::client::options::GetSettingsOptions;
use crate::error::Result;
use crate::models::display::settings_fields;
use crate::output;

/// Run the settings get command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let settings = ctx
        .client
        .get_settings(&GetSettingsOptions::new())
        .await?
        .into_result()
        .unwrap_or_default();

    output::print_detail::<_, Settings>(&settings, &settings_fields(&settings), ctx.format)
}
