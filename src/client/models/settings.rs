//! Service settings models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account-level settings for the service instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Event Notifications integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_notifications: Option<EventNotifications>,

    /// Cloud Object Storage bucket that receives scan results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_storage: Option<ObjectStorage>,
}

/// Event Notifications instance connected to the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventNotifications {
    /// CRN of the Event Notifications instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_crn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    /// Source ID registered in Event Notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

/// Cloud Object Storage target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorage {
    /// CRN of the Object Storage instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_crn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

/// Result of sending a test event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestEvent {
    /// Whether Event Notifications accepted the event
    #[serde(default)]
    pub success: bool,
}
