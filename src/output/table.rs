//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Message printed in place of an empty table
pub const EMPTY: &str = "No results found.";

/// Format rows as a rounded table with a centered header
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldDisplay;

    #[derive(Debug, Tabled)]
    struct LibraryRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<LibraryRow> = vec![];
        assert_eq!(format_table(&rows), EMPTY);
    }

    #[test]
    fn test_format_table_rows_and_headers() {
        let rows = vec![
            LibraryRow {
                id: "lib-1".to_string(),
                name: "IBM Cloud Framework".to_string(),
            },
            LibraryRow {
                id: "lib-2".to_string(),
                name: "CIS Benchmark".to_string(),
            },
        ];

        let result = format_table(&rows);
        assert!(result.contains("ID"));
        assert!(result.contains("NAME"));
        assert!(result.contains("IBM Cloud Framework"));
        assert!(result.contains("CIS Benchmark"));
        assert!(result.contains('╭'));
        assert!(result.contains('╰'));
    }

    #[test]
    fn test_format_field_rows() {
        let rows = vec![FieldDisplay::new("Report ID", "rep-1")];
        let result = format_table(&rows);
        assert!(result.contains("FIELD"));
        assert!(result.contains("rep-1"));
    }
}
