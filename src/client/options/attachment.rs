use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::models::{
    AttachmentCollection, AttachmentItem, AttachmentParameterPrototype, AttachmentPrototype,
    AttachmentsNotificationsPrototype, AttachmentsPrototype, LastScan, MultiCloudScope, Scan,
};
use crate::client::operation::{
    CREATE_ATTACHMENT, CREATE_SCAN, DELETE_PROFILE_ATTACHMENT, GET_PROFILE_ATTACHMENT,
    LIST_ATTACHMENTS, LIST_ATTACHMENTS_ACCOUNT, Operation, OperationRequest,
    REPLACE_PROFILE_ATTACHMENT, RequestHeaders, json_body, push_query, require,
};
use crate::client::pagination::PagedRequest;
use crate::error::Result;

/// Attachments of one profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAttachmentsOptions {
    pub profile_id: String,
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: RequestHeaders,
}

impl ListAttachmentsOptions {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl OperationRequest for ListAttachmentsOptions {
    type Output = AttachmentCollection;

    fn operation(&self) -> &'static Operation {
        &LIST_ATTACHMENTS
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("profile_id", self.profile_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "limit", &self.limit);
        push_query(&mut query, "start", &self.start);
        query
    }
}

impl PagedRequest for ListAttachmentsOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for attaching a profile to one or more scopes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAttachmentOptions {
    #[serde(skip)]
    pub profile_id: String,

    pub attachments: Vec<AttachmentsPrototype>,

    /// Profile ID repeated in the body
    #[serde(rename = "profile_id", skip_serializing_if = "Option::is_none")]
    pub attachment_profile_id: Option<String>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateAttachmentOptions {
    pub fn new(profile_id: impl Into<String>, attachments: Vec<AttachmentsPrototype>) -> Self {
        Self {
            profile_id: profile_id.into(),
            attachments,
            ..Default::default()
        }
    }

    pub fn attachment_profile_id(mut self, value: impl Into<String>) -> Self {
        self.attachment_profile_id = Some(value.into());
        self
    }
}

impl OperationRequest for CreateAttachmentOptions {
    type Output = AttachmentPrototype;

    fn operation(&self) -> &'static Operation {
        &CREATE_ATTACHMENT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("profile_id", self.profile_id.as_str())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteProfileAttachmentOptions {
    pub profile_id: String,
    pub attachment_id: String,
    pub headers: RequestHeaders,
}

impl DeleteProfileAttachmentOptions {
    pub fn new(profile_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            attachment_id: attachment_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for DeleteProfileAttachmentOptions {
    type Output = AttachmentItem;

    fn operation(&self) -> &'static Operation {
        &DELETE_PROFILE_ATTACHMENT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)?;
        require("attachment_id", &self.attachment_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("profile_id", self.profile_id.as_str()),
            ("attachment_id", self.attachment_id.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProfileAttachmentOptions {
    pub profile_id: String,
    pub attachment_id: String,
    pub headers: RequestHeaders,
}

impl GetProfileAttachmentOptions {
    pub fn new(profile_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            attachment_id: attachment_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetProfileAttachmentOptions {
    type Output = AttachmentItem;

    fn operation(&self) -> &'static Operation {
        &GET_PROFILE_ATTACHMENT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)?;
        require("attachment_id", &self.attachment_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("profile_id", self.profile_id.as_str()),
            ("attachment_id", self.attachment_id.as_str()),
        ]
    }
}

/// Options for replacing an attachment. Only body fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceProfileAttachmentOptions {
    #[serde(skip)]
    pub profile_id: String,

    #[serde(skip)]
    pub attachment_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Profile ID inside the body
    #[serde(rename = "profile_id", skip_serializing_if = "Option::is_none")]
    pub attachment_profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<MultiCloudScope>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<AttachmentsNotificationsPrototype>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_parameters: Option<Vec<AttachmentParameterPrototype>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scan: Option<LastScan>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_scan_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl ReplaceProfileAttachmentOptions {
    pub fn new(profile_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            attachment_id: attachment_id.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn attachment_profile_id(mut self, value: impl Into<String>) -> Self {
        self.attachment_profile_id = Some(value.into());
        self
    }

    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }

    pub fn scope(mut self, scope: Vec<MultiCloudScope>) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn created_on(mut self, value: DateTime<Utc>) -> Self {
        self.created_on = Some(value);
        self
    }

    pub fn created_by(mut self, value: impl Into<String>) -> Self {
        self.created_by = Some(value.into());
        self
    }

    pub fn updated_on(mut self, value: DateTime<Utc>) -> Self {
        self.updated_on = Some(value);
        self
    }

    pub fn updated_by(mut self, value: impl Into<String>) -> Self {
        self.updated_by = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn schedule(mut self, value: impl Into<String>) -> Self {
        self.schedule = Some(value.into());
        self
    }

    pub fn notifications(mut self, value: AttachmentsNotificationsPrototype) -> Self {
        self.notifications = Some(value);
        self
    }

    pub fn attachment_parameters(mut self, value: Vec<AttachmentParameterPrototype>) -> Self {
        self.attachment_parameters = Some(value);
        self
    }

    pub fn last_scan(mut self, value: LastScan) -> Self {
        self.last_scan = Some(value);
        self
    }

    pub fn next_scan_time(mut self, value: DateTime<Utc>) -> Self {
        self.next_scan_time = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
}

impl OperationRequest for ReplaceProfileAttachmentOptions {
    type Output = AttachmentItem;

    fn operation(&self) -> &'static Operation {
        &REPLACE_PROFILE_ATTACHMENT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)?;
        require("attachment_id", &self.attachment_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("profile_id", self.profile_id.as_str()),
            ("attachment_id", self.attachment_id.as_str()),
        ]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

/// Options for starting an on-demand scan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateScanOptions {
    pub attachment_id: String,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateScanOptions {
    pub fn new(attachment_id: impl Into<String>) -> Self {
        Self {
            attachment_id: attachment_id.into(),
            headers: RequestHeaders::default(),
        }
    }
}

impl OperationRequest for CreateScanOptions {
    type Output = Scan;

    fn operation(&self) -> &'static Operation {
        &CREATE_SCAN
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("attachment_id", &self.attachment_id)
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

/// Attachments across every profile of the account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAttachmentsAccountOptions {
    pub limit: Option<i64>,
    pub start: Option<String>,
    pub headers: RequestHeaders,
}

impl ListAttachmentsAccountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl OperationRequest for ListAttachmentsAccountOptions {
    type Output = AttachmentCollection;

    fn operation(&self) -> &'static Operation {
        &LIST_ATTACHMENTS_ACCOUNT
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "limit", &self.limit);
        push_query(&mut query, "start", &self.start);
        query
    }
}

impl PagedRequest for ListAttachmentsAccountOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{PropertyItem, schedule};
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_create_scan_body() {
        let request = CreateScanOptions::new("testString").prepare().unwrap();
        assert_eq!(request.path_segments, vec!["scans"]);
        assert_eq!(request.body, Some(json!({"attachment_id": "testString"})));
    }

    #[test]
    fn test_create_scan_requires_attachment_id() {
        match CreateScanOptions::new("").prepare() {
            Err(Error::Validation(msg)) => assert!(msg.contains("attachment_id")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_attachment_body_profile_id() {
        let attachment = AttachmentsPrototype::new(
            "account scan",
            vec![MultiCloudScope {
                environment: "ibm-cloud".to_string(),
                properties: vec![PropertyItem::new("scope_type", "account")],
            }],
            "enabled",
            schedule::DAILY,
        );
        let request = CreateAttachmentOptions::new("prof-1", vec![attachment])
            .attachment_profile_id("prof-1")
            .prepare()
            .unwrap();

        assert_eq!(request.path_segments, vec!["profiles", "prof-1", "attachments"]);
        let body = request.body.unwrap();
        assert_eq!(body["profile_id"], "prof-1");
        assert_eq!(body["attachments"][0]["schedule"], "daily");
    }

    #[test]
    fn test_replace_attachment_sends_only_set_fields() {
        let request = ReplaceProfileAttachmentOptions::new("prof-1", "att-1")
            .status("disabled")
            .name("renamed")
            .prepare()
            .unwrap();
        assert_eq!(
            request.body,
            Some(json!({"status": "disabled", "name": "renamed"}))
        );
    }

    #[test]
    fn test_get_attachment_requires_both_ids() {
        assert!(matches!(
            GetProfileAttachmentOptions::new("prof-1", "").prepare(),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            DeleteProfileAttachmentOptions::new("", "att-1").prepare(),
            Err(Error::Validation(_))
        ));
    }
}
