//! Attachment models
//!
//! An attachment binds a profile to a scope and a scan schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::pagination::{PagedCollection, PaginationFirst, PaginationNext};

/// Values accepted for attachment `status`
pub mod attachment_status {
    pub const ENABLED: &str = "enabled";
    pub const DISABLED: &str = "disabled";
}

/// Values accepted for attachment `schedule`
pub mod schedule {
    pub const DAILY: &str = "daily";
    pub const EVERY_7_DAYS: &str = "every_7_days";
    pub const EVERY_30_DAYS: &str = "every_30_days";
}

/// An attachment of a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<MultiCloudScope>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    /// `enabled` or `disabled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// `daily`, `every_7_days` or `every_30_days`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<AttachmentsNotificationsPrototype>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_parameters: Option<Vec<AttachmentParameterPrototype>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan: Option<LastScan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_scan_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Page of attachments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentCollection {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default)]
    pub attachments: Vec<AttachmentItem>,
}

impl PagedCollection for AttachmentCollection {
    type Item = AttachmentItem;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.attachments
    }
}

/// Response of an attachment creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentsPrototype>>,
}

/// One attachment to create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub scope: Vec<MultiCloudScope>,

    pub status: String,

    pub schedule: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<AttachmentsNotificationsPrototype>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_parameters: Option<Vec<AttachmentParameterPrototype>>,
}

impl AttachmentsPrototype {
    pub fn new(
        name: impl Into<String>,
        scope: Vec<MultiCloudScope>,
        status: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scope,
            status: status.into(),
            schedule: schedule.into(),
            ..Default::default()
        }
    }
}

/// Scope of an attachment in one cloud environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiCloudScope {
    /// e.g. `ibm-cloud`
    pub environment: String,

    pub properties: Vec<PropertyItem>,
}

/// Scope property such as `scope_id` or `scope_type`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl PropertyItem {
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// Notification settings of an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsNotificationsPrototype {
    pub enabled: bool,

    pub controls: FailedControls,
}

/// Thresholds for failure notifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailedControls {
    /// Notify once this many controls fail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_limit: Option<i64>,

    /// Notify whenever one of these controls fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_control_ids: Option<Vec<String>>,
}

/// Parameter value set on an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentParameterPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
}

/// Most recent scan of an attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastScan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}
