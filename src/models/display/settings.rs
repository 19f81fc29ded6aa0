//! Settings display rows

use super::FieldDisplay;
use super::common::{format_datetime, or_none};
use crate::client::models::Settings;

/// Rows describing the service settings.
pub fn settings_fields(settings: &Settings) -> Vec<FieldDisplay> {
    let mut rows = Vec::new();
    if let Some(notifications) = &settings.event_notifications {
        rows.push(FieldDisplay::new(
            "Event Notifications CRN",
            or_none(notifications.instance_crn.clone()),
        ));
        rows.push(FieldDisplay::new(
            "Event Notifications source",
            or_none(notifications.source_name.clone()),
        ));
        rows.push(FieldDisplay::new(
            "Event Notifications updated",
            format_datetime(notifications.updated_on),
        ));
    }
    if let Some(storage) = &settings.object_storage {
        rows.push(FieldDisplay::new(
            "Object Storage CRN",
            or_none(storage.instance_crn.clone()),
        ));
        rows.push(FieldDisplay::new(
            "Object Storage bucket",
            or_none(storage.bucket.clone()),
        ));
        rows.push(FieldDisplay::new(
            "Object Storage location",
            or_none(storage.bucket_location.clone()),
        ));
        rows.push(FieldDisplay::new(
            "Object Storage updated",
            format_datetime(storage.updated_on),
        ));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::ObjectStorage;

    #[test]
    fn test_settings_fields_skip_absent_sections() {
        let settings = Settings {
            event_notifications: None,
            object_storage: Some(ObjectStorage {
                bucket: Some("scc-bucket".to_string()),
                ..Default::default()
            }),
        };

        let rows = settings_fields(&settings);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], FieldDisplay::new("Object Storage bucket", "scc-bucket"));
        assert!(settings_fields(&Settings::default()).is_empty());
    }
}
