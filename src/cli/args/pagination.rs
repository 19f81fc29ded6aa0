//! Pagination argument types for CLI commands

use clap::Args;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command backed by a paged operation:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page size (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub limit: Option<i64>,

    /// Follow `next` links and fetch every page
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl PaginationArgs {
    /// Page size to request: the flag, or `default` when absent.
    pub fn page_size(&self, default: i64) -> i64 {
        self.limit.filter(|l| *l > 0).unwrap_or(default)
    }
}
