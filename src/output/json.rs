//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,

    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// sccop version
    pub version: String,

    /// Number of items when `data` is a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count: None,
            },
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }
}

/// Format a single value as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Format a list as pretty-printed JSON, recording its length in `meta.count`
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(items).with_count(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Debug, Serialize)]
    struct Library {
        id: String,
        name: String,
    }

    #[test]
    fn test_json_output_metadata() {
        let output = JsonOutput::new("settings");
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
        assert!(output.meta.count.is_none());
    }

    #[test]
    fn test_format_json_single_value_has_no_count() {
        let library = Library {
            id: "lib-1".to_string(),
            name: "IBM Cloud Framework".to_string(),
        };

        let parsed: Value = serde_json::from_str(&format_json(&library).unwrap()).unwrap();
        assert_eq!(parsed["data"]["id"], "lib-1");
        assert!(parsed["meta"].get("count").is_none());
    }

    #[test]
    fn test_format_json_list_counts_items() {
        let items = vec![
            Library {
                id: "1".to_string(),
                name: "First".to_string(),
            },
            Library {
                id: "2".to_string(),
                name: "Second".to_string(),
            },
        ];

        let parsed: Value = serde_json::from_str(&format_json_list(&items).unwrap()).unwrap();
        assert_eq!(parsed["meta"]["count"], 2);
        assert_eq!(parsed["data"][1]["name"], "Second");
    }

    #[test]
    fn test_format_json_list_empty() {
        let items: Vec<Library> = vec![];
        let parsed: Value = serde_json::from_str(&format_json_list(&items).unwrap()).unwrap();
        assert_eq!(parsed["data"], Value::Array(vec![]));
        assert_eq!(parsed["meta"]["count"], 0);
    }
}
