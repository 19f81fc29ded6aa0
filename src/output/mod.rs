//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print rows in the requested format.
pub fn print_list<T: Tabled + Serialize>(rows: &[T], format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_table(rows),
        OutputFormat::Json => json::format_json_list(rows)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print a single resource: `rows` for tables, `raw` (the API model) for JSON.
pub fn print_detail<T, R>(raw: &R, rows: &[T], format: OutputFormat) -> Result<()>
where
    T: Tabled,
    R: Serialize + ?Sized,
{
    let output = match format {
        OutputFormat::Table => table::format_table(rows),
        OutputFormat::Json => json::format_json(raw)?,
    };
    println!("{}", output);
    Ok(())
}
