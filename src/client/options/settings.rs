use serde::Serialize;

use crate::client::models::{EventNotifications, ObjectStorage, Settings, TestEvent};
use crate::client::operation::{
    GET_SETTINGS, Operation, OperationRequest, POST_TEST_EVENT, RequestHeaders, UPDATE_SETTINGS,
    json_body,
};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSettingsOptions {
    pub headers: RequestHeaders,
}

impl GetSettingsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRequest for GetSettingsOptions {
    type Output = Settings;

    fn operation(&self) -> &'static Operation {
        &GET_SETTINGS
    }

    request_headers!();
}

/// Partial update of the settings, sent as a JSON merge patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSettingsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_notifications: Option<EventNotifications>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_storage: Option<ObjectStorage>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl UpdateSettingsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_notifications(mut self, value: EventNotifications) -> Self {
        self.event_notifications = Some(value);
        self
    }

    pub fn object_storage(mut self, value: ObjectStorage) -> Self {
        self.object_storage = Some(value);
        self
    }
}

impl OperationRequest for UpdateSettingsOptions {
    type Output = Settings;

    fn operation(&self) -> &'static Operation {
        &UPDATE_SETTINGS
    }

    request_headers!();

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostTestEventOptions {
    pub headers: RequestHeaders,
}

impl PostTestEventOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRequest for PostTestEventOptions {
    type Output = TestEvent;

    fn operation(&self) -> &'static Operation {
        &POST_TEST_EVENT
    }

    request_headers!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::operation::{HeaderOptions, MERGE_PATCH_JSON};

    #[test]
    fn test_update_settings_body_is_merge_patch() {
        let options = UpdateSettingsOptions::new()
            .object_storage(ObjectStorage {
                bucket: Some("results".to_string()),
                ..Default::default()
            })
            .x_request_id("req-1");

        let request = options.prepare().unwrap();
        assert_eq!(request.operation.content_type, Some(MERGE_PATCH_JSON));
        assert_eq!(
            request.body,
            Some(serde_json::json!({"object_storage": {"bucket": "results"}}))
        );
        assert_eq!(
            request.headers,
            vec![("X-Request-ID".to_string(), "req-1".to_string())]
        );
    }

    #[test]
    fn test_get_settings_has_no_body() {
        let request = GetSettingsOptions::new().prepare().unwrap();
        assert!(request.body.is_none());
        assert_eq!(request.path_segments, vec!["settings"]);
    }
}
