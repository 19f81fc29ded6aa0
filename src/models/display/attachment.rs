//! Attachment and scan display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_datetime, or_none, truncate_string};
use crate::client::models::{AttachmentItem, Scan};

/// Attachment display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AttachmentDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROFILE ID")]
    pub profile_id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SCHEDULE")]
    pub schedule: String,

    #[tabled(rename = "LAST SCAN")]
    pub last_scan: String,

    #[tabled(rename = "NEXT SCAN")]
    pub next_scan: String,
}

impl From<AttachmentItem> for AttachmentDisplay {
    fn from(item: AttachmentItem) -> Self {
        let last_scan = match item.last_scan {
            Some(scan) => match (scan.status, scan.time) {
                (Some(status), time) => format!("{} ({})", status, format_datetime(time)),
                (None, time) => format_datetime(time),
            },
            None => format_datetime(None),
        };
        Self {
            id: or_none(item.id),
            name: truncate_string(&or_none(item.name), 40),
            profile_id: or_none(item.profile_id),
            status: or_none(item.status),
            schedule: or_none(item.schedule),
            last_scan,
            next_scan: format_datetime(item.next_scan_time),
        }
    }
}

/// Scan display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanDisplay {
    #[tabled(rename = "SCAN ID")]
    pub id: String,

    #[tabled(rename = "ATTACHMENT ID")]
    pub attachment_id: String,

    #[tabled(rename = "REPORT ID")]
    pub report_id: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "TYPE")]
    pub scan_type: String,
}

impl From<Scan> for ScanDisplay {
    fn from(scan: Scan) -> Self {
        Self {
            id: or_none(scan.id),
            attachment_id: or_none(scan.attachment_id),
            report_id: or_none(scan.report_id),
            status: or_none(scan.status),
            scan_type: or_none(scan.scan_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::LastScan;

    #[test]
    fn test_attachment_display_last_scan() {
        let item = AttachmentItem {
            id: Some("att-1".to_string()),
            name: Some("account-130003ea8bfa43c5aacea07a86da3000".to_string()),
            status: Some("enabled".to_string()),
            schedule: Some("every_30_days".to_string()),
            last_scan: Some(LastScan {
                id: Some("scan-1".to_string()),
                status: Some("completed".to_string()),
                time: Some("2024-01-15T10:30:00Z".parse().unwrap()),
            }),
            ..Default::default()
        };

        let display = AttachmentDisplay::from(item);
        assert_eq!(display.last_scan, "completed (2024-01-15T10:30:00Z)");
        assert_eq!(display.next_scan, "--");
        assert_eq!(display.schedule, "every_30_days");
    }

    #[test]
    fn test_scan_display() {
        let scan = Scan {
            id: Some("scan-1".to_string()),
            attachment_id: Some("att-1".to_string()),
            status: Some("in_progress".to_string()),
            ..Default::default()
        };

        let display = ScanDisplay::from(scan);
        assert_eq!(display.id, "scan-1");
        assert_eq!(display.report_id, "--");
        assert_eq!(display.status, "in_progress");
    }
}
