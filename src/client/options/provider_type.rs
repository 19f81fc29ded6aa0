use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::models::{
    ProviderTypeInstanceItem, ProviderTypeInstancesResponse, ProviderTypeItem,
    ProviderTypesCollection, ProviderTypesInstancesResponse,
};
use crate::client::operation::{
    CREATE_PROVIDER_TYPE_INSTANCE, DELETE_PROVIDER_TYPE_INSTANCE, GET_PROVIDER_TYPE_BY_ID,
    GET_PROVIDER_TYPE_INSTANCE, GET_PROVIDER_TYPES_INSTANCES, LIST_PROVIDER_TYPE_INSTANCES,
    LIST_PROVIDER_TYPES, Operation, OperationRequest, RequestHeaders,
    UPDATE_PROVIDER_TYPE_INSTANCE, json_body, require,
};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProviderTypesOptions {
    pub headers: RequestHeaders,
}

impl ListProviderTypesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRequest for ListProviderTypesOptions {
    type Output = ProviderTypesCollection;

    fn operation(&self) -> &'static Operation {
        &LIST_PROVIDER_TYPES
    }

    request_headers!();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProviderTypeByIdOptions {
    pub provider_type_id: String,
    pub headers: RequestHeaders,
}

impl GetProviderTypeByIdOptions {
    pub fn new(provider_type_id: impl Into<String>) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetProviderTypeByIdOptions {
    type Output = ProviderTypeItem;

    fn operation(&self) -> &'static Operation {
        &GET_PROVIDER_TYPE_BY_ID
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("provider_type_id", self.provider_type_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProviderTypeInstancesOptions {
    pub provider_type_id: String,
    pub headers: RequestHeaders,
}

impl ListProviderTypeInstancesOptions {
    pub fn new(provider_type_id: impl Into<String>) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for ListProviderTypeInstancesOptions {
    type Output = ProviderTypeInstancesResponse;

    fn operation(&self) -> &'static Operation {
        &LIST_PROVIDER_TYPE_INSTANCES
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("provider_type_id", self.provider_type_id.as_str())]
    }
}

/// Options for creating a provider type instance
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProviderTypeInstanceOptions {
    #[serde(skip)]
    pub provider_type_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attribute values required by the provider type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateProviderTypeInstanceOptions {
    pub fn new(provider_type_id: impl Into<String>) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn attributes(mut self, attributes: BTreeMap<String, serde_json::Value>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

impl OperationRequest for CreateProviderTypeInstanceOptions {
    type Output = ProviderTypeInstanceItem;

    fn operation(&self) -> &'static Operation {
        &CREATE_PROVIDER_TYPE_INSTANCE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("provider_type_id", self.provider_type_id.as_str())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

/// Deleting an instance answers 204 with no body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteProviderTypeInstanceOptions {
    pub provider_type_id: String,
    pub provider_type_instance_id: String,
    pub headers: RequestHeaders,
}

impl DeleteProviderTypeInstanceOptions {
    pub fn new(
        provider_type_id: impl Into<String>,
        provider_type_instance_id: impl Into<String>,
    ) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            provider_type_instance_id: provider_type_instance_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for DeleteProviderTypeInstanceOptions {
    type Output = serde_json::Value;

    fn operation(&self) -> &'static Operation {
        &DELETE_PROVIDER_TYPE_INSTANCE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)?;
        require("provider_type_instance_id", &self.provider_type_instance_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("provider_type_id", self.provider_type_id.as_str()),
            (
                "provider_type_instance_id",
                self.provider_type_instance_id.as_str(),
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProviderTypeInstanceOptions {
    pub provider_type_id: String,
    pub provider_type_instance_id: String,
    pub headers: RequestHeaders,
}

impl GetProviderTypeInstanceOptions {
    pub fn new(
        provider_type_id: impl Into<String>,
        provider_type_instance_id: impl Into<String>,
    ) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            provider_type_instance_id: provider_type_instance_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetProviderTypeInstanceOptions {
    type Output = ProviderTypeInstanceItem;

    fn operation(&self) -> &'static Operation {
        &GET_PROVIDER_TYPE_INSTANCE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)?;
        require("provider_type_instance_id", &self.provider_type_instance_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("provider_type_id", self.provider_type_id.as_str()),
            (
                "provider_type_instance_id",
                self.provider_type_instance_id.as_str(),
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProviderTypeInstanceOptions {
    #[serde(skip)]
    pub provider_type_id: String,

    #[serde(skip)]
    pub provider_type_instance_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl UpdateProviderTypeInstanceOptions {
    pub fn new(
        provider_type_id: impl Into<String>,
        provider_type_instance_id: impl Into<String>,
    ) -> Self {
        Self {
            provider_type_id: provider_type_id.into(),
            provider_type_instance_id: provider_type_instance_id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn attributes(mut self, attributes: BTreeMap<String, serde_json::Value>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

impl OperationRequest for UpdateProviderTypeInstanceOptions {
    type Output = ProviderTypeInstanceItem;

    fn operation(&self) -> &'static Operation {
        &UPDATE_PROVIDER_TYPE_INSTANCE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("provider_type_id", &self.provider_type_id)?;
        require("provider_type_instance_id", &self.provider_type_instance_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("provider_type_id", self.provider_type_id.as_str()),
            (
                "provider_type_instance_id",
                self.provider_type_instance_id.as_str(),
            ),
        ]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProviderTypesInstancesOptions {
    pub headers: RequestHeaders,
}

impl GetProviderTypesInstancesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationRequest for GetProviderTypesInstancesOptions {
    type Output = ProviderTypesInstancesResponse;

    fn operation(&self) -> &'static Operation {
        &GET_PROVIDER_TYPES_INSTANCES
    }

    request_headers!();
}
