//! Generic list command handler
//!
//! Every paged list command follows the same flow:
//! 1. Create command context
//! 2. Build options with the resolved page size
//! 3. Fetch one page, or every page with `--all`
//! 4. Convert to display type
//! 5. Print output

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::operation::invoke;
use crate::client::pagination::{PagedCollection, PagedRequest, Pager};
use crate::error::Result;
use crate::output;

type Item<O> = <<O as crate::client::OperationRequest>::Output as PagedCollection>::Item;

/// Run a paged list command.
///
/// # Type Parameters
///
/// * `O` - Options of the list operation; built by `build` from the page size
/// * `D` - The display type that implements `From` for the collection's item
///
/// # Example
///
/// ```ignore
/// run_paged_list::<_, ProfileDisplay, _>(opts, pagination, "profiles", |limit| {
///     ListProfilesOptions::new().limit(limit)
/// })
/// .await
/// ```
pub async fn run_paged_list<O, D, F>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    build: F,
) -> Result<()>
where
    O: PagedRequest + 'static,
    O::Output: PagedCollection + DeserializeOwned + Send,
    D: From<Item<O>> + Tabled + Serialize,
    F: FnOnce(i64) -> O,
{
    let ctx = CommandContext::new(opts)?;
    let options = build(ctx.page_size(pagination));

    let items: Vec<Item<O>> = if pagination.all {
        debug!("Fetching all pages of {}", resource_name);
        Pager::new(&ctx.client, options).get_all().await?
    } else {
        debug!("Fetching first page of {}", resource_name);
        invoke(&ctx.client, &options)
            .await?
            .into_result()
            .map(PagedCollection::into_items)
            .unwrap_or_default()
    };

    debug!("Fetched {} {}", items.len(), resource_name);

    let rows: Vec<D> = items.into_iter().map(D::from).collect();
    output::print_list(&rows, ctx.format)
}
