//! Key/value display model for single-resource views

use serde::Serialize;
use tabled::Tabled;

/// One labelled value, rendered as a two-column table.
#[derive(Debug, Clone, PartialEq, Tabled, Serialize)]
pub struct FieldDisplay {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FieldDisplay {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}
