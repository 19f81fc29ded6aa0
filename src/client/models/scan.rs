//! Scan models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scan started on demand for an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,

    /// Report the scan will produce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_scan_time: Option<DateTime<Utc>>,

    /// `ondemand` or `scheduled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,

    /// The service spells this field `occurence`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurence: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_deserialize() {
        let scan: Scan = serde_json::from_str(
            r#"{
                "id": "scan-1",
                "attachment_id": "testString",
                "report_id": "rep-1",
                "status": "in_progress",
                "last_scan_time": "2019-01-01T12:00:00.000Z",
                "scan_type": "ondemand",
                "occurence": 9
            }"#,
        )
        .unwrap();

        assert_eq!(scan.attachment_id.as_deref(), Some("testString"));
        assert_eq!(scan.occurence, Some(9));
        assert!(scan.next_scan_time.is_none());
    }
}
