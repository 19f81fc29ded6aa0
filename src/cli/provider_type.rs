//! Provider type commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::ProviderTypeApi;
use crate::client::options::{ListProviderTypeInstancesOptions, ListProviderTypesOptions};
use crate::error::Result;
use crate::models::{ProviderTypeDisplay, ProviderTypeInstanceDisplay};
use crate::output;

/// Run the provider-type list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let collection = ctx
        .client
        .list_provider_types(&ListProviderTypesOptions::new())
        .await?
        .into_result()
        .unwrap_or_default();

    let rows: Vec<ProviderTypeDisplay> = collection
        .provider_types
        .into_iter()
        .map(ProviderTypeDisplay::from)
        .collect();
    output::print_list(&rows, ctx.format)
}

/// Run the provider-type instances command
pub async fn instances(opts: &GlobalOptions, provider_type_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let response = ctx
        .client
        .list_provider_type_instances(&ListProviderTypeInstancesOptions::new(provider_type_id))
        .await?
        .into_result()
        .unwrap_or_default();

    let rows: Vec<ProviderTypeInstanceDisplay> = response
        .provider_type_instances
        .into_iter()
        .map(ProviderTypeInstanceDisplay::from)
        .collect();
    output::print_list(&rows, ctx.format)
}
