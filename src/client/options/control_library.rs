use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::models::{
    ControlLibrary, ControlLibraryCollection, ControlLibraryDelete, ControlsInControlLib,
};
use crate::client::operation::{
    CREATE_CUSTOM_CONTROL_LIBRARY, DELETE_CUSTOM_CONTROL_LIBRARY, GET_CONTROL_LIBRARY,
    LIST_CONTROL_LIBRARIES, Operation, OperationRequest, REPLACE_CUSTOM_CONTROL_LIBRARY,
    RequestHeaders, json_body, push_query, require,
};
use crate::client::pagination::PagedRequest;
use crate::error::Result;

/// Options for listing control libraries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListControlLibrariesOptions {
    /// Page size
    pub limit: Option<i64>,
    /// `predefined` or `custom`
    pub control_library_type: Option<String>,
    /// Page token from a previous response
    pub start: Option<String>,
    pub headers: RequestHeaders,
}

impl ListControlLibrariesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn control_library_type(mut self, value: impl Into<String>) -> Self {
        self.control_library_type = Some(value.into());
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl OperationRequest for ListControlLibrariesOptions {
    type Output = ControlLibraryCollection;

    fn operation(&self) -> &'static Operation {
        &LIST_CONTROL_LIBRARIES
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "limit", &self.limit);
        push_query(&mut query, "control_library_type", &self.control_library_type);
        push_query(&mut query, "start", &self.start);
        query
    }
}

impl PagedRequest for ListControlLibrariesOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for creating a custom control library
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCustomControlLibraryOptions {
    pub control_library_name: String,

    pub control_library_description: String,

    /// Must be `custom`
    pub control_library_type: String,

    pub controls: Vec<ControlsInControlLib>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateCustomControlLibraryOptions {
    pub fn new(
        control_library_name: impl Into<String>,
        control_library_description: impl Into<String>,
        control_library_type: impl Into<String>,
        controls: Vec<ControlsInControlLib>,
    ) -> Self {
        Self {
            control_library_name: control_library_name.into(),
            control_library_description: control_library_description.into(),
            control_library_type: control_library_type.into(),
            controls,
            ..Default::default()
        }
    }

    pub fn version_group_label(mut self, value: impl Into<String>) -> Self {
        self.version_group_label = Some(value.into());
        self
    }

    pub fn control_library_version(mut self, value: impl Into<String>) -> Self {
        self.control_library_version = Some(value.into());
        self
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = Some(latest);
        self
    }

    pub fn controls_count(mut self, count: i64) -> Self {
        self.controls_count = Some(count);
        self
    }
}

impl OperationRequest for CreateCustomControlLibraryOptions {
    type Output = ControlLibrary;

    fn operation(&self) -> &'static Operation {
        &CREATE_CUSTOM_CONTROL_LIBRARY
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("control_library_name", &self.control_library_name)?;
        require("control_library_description", &self.control_library_description)?;
        require("control_library_type", &self.control_library_type)
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteCustomControlLibraryOptions {
    pub control_libraries_id: String,
    pub headers: RequestHeaders,
}

impl DeleteCustomControlLibraryOptions {
    pub fn new(control_libraries_id: impl Into<String>) -> Self {
        Self {
            control_libraries_id: control_libraries_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for DeleteCustomControlLibraryOptions {
    type Output = ControlLibraryDelete;

    fn operation(&self) -> &'static Operation {
        &DELETE_CUSTOM_CONTROL_LIBRARY
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("control_libraries_id", &self.control_libraries_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("control_libraries_id", self.control_libraries_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetControlLibraryOptions {
    pub control_libraries_id: String,
    pub headers: RequestHeaders,
}

impl GetControlLibraryOptions {
    pub fn new(control_libraries_id: impl Into<String>) -> Self {
        Self {
            control_libraries_id: control_libraries_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetControlLibraryOptions {
    type Output = ControlLibrary;

    fn operation(&self) -> &'static Operation {
        &GET_CONTROL_LIBRARY
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("control_libraries_id", &self.control_libraries_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("control_libraries_id", self.control_libraries_id.as_str())]
    }
}

/// Options for replacing a custom control library. Every body field is
/// optional; only those set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceCustomControlLibraryOptions {
    #[serde(skip)]
    pub control_libraries_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_library_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_library_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_library_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_parents_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<ControlsInControlLib>>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl ReplaceCustomControlLibraryOptions {
    pub fn new(control_libraries_id: impl Into<String>) -> Self {
        Self {
            control_libraries_id: control_libraries_id.into(),
            ..Default::default()
        }
    }

    /// Start from a fetched library, replacing it wholesale.
    pub fn from_library(control_libraries_id: impl Into<String>, library: ControlLibrary) -> Self {
        Self {
            control_libraries_id: control_libraries_id.into(),
            id: library.id,
            account_id: library.account_id,
            control_library_name: library.control_library_name,
            control_library_description: library.control_library_description,
            control_library_type: library.control_library_type,
            version_group_label: library.version_group_label,
            control_library_version: library.control_library_version,
            created_on: library.created_on,
            created_by: library.created_by,
            updated_on: library.updated_on,
            updated_by: library.updated_by,
            latest: library.latest,
            hierarchy_enabled: library.hierarchy_enabled,
            controls_count: library.controls_count,
            control_parents_count: library.control_parents_count,
            controls: library.controls,
            headers: RequestHeaders::default(),
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    pub fn control_library_name(mut self, value: impl Into<String>) -> Self {
        self.control_library_name = Some(value.into());
        self
    }

    pub fn control_library_description(mut self, value: impl Into<String>) -> Self {
        self.control_library_description = Some(value.into());
        self
    }

    pub fn control_library_type(mut self, value: impl Into<String>) -> Self {
        self.control_library_type = Some(value.into());
        self
    }

    pub fn version_group_label(mut self, value: impl Into<String>) -> Self {
        self.version_group_label = Some(value.into());
        self
    }

    pub fn control_library_version(mut self, value: impl Into<String>) -> Self {
        self.control_library_version = Some(value.into());
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

    pub fn latest(mut self, value: bool) -> Self {
        self.latest = Some(value);
        self
    }

    pub fn hierarchy_enabled(mut self, value: bool) -> Self {
        self.hierarchy_enabled = Some(value);
        self
    }

    pub fn controls_count(mut self, value: i64) -> Self {
        self.controls_count = Some(value);
        self
    }

    pub fn control_parents_count(mut self, value: i64) -> Self {
        self.control_parents_count = Some(value);
        self
    }

    pub fn controls(mut self, controls: Vec<ControlsInControlLib>) -> Self {
        self.controls = Some(controls);
        self
    }
}

impl OperationRequest for ReplaceCustomControlLibraryOptions {
    type Output = ControlLibrary;

    fn operation(&self) -> &'static Operation {
        &REPLACE_CUSTOM_CONTROL_LIBRARY
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("control_libraries_id", &self.control_libraries_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("control_libraries_id", self.control_libraries_id.as_str())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}
