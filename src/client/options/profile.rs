use serde::Serialize;

use crate::client::models::{
    DefaultParametersPrototype, Profile, ProfileCollection, ProfileControlsPrototype,
};
use crate::client::operation::{
    CREATE_PROFILE, DELETE_CUSTOM_PROFILE, GET_PROFILE, LIST_PROFILES, Operation,
    OperationRequest, REPLACE_PROFILE, RequestHeaders, json_body, push_query, require,
};
use crate::client::pagination::PagedRequest;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProfilesOptions {
    pub limit: Option<i64>,
    /// `predefined` or `custom`
    pub profile_type: Option<String>,
    pub start: Option<String>,
    pub headers: RequestHeaders,
}

impl ListProfilesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn profile_type(mut self, value: impl Into<String>) -> Self {
        self.profile_type = Some(value.into());
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

impl OperationRequest for ListProfilesOptions {
    type Output = ProfileCollection;

    fn operation(&self) -> &'static Operation {
        &LIST_PROFILES
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "limit", &self.limit);
        push_query(&mut query, "profile_type", &self.profile_type);
        push_query(&mut query, "start", &self.start);
        query
    }
}

impl PagedRequest for ListProfilesOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

/// Options for creating a custom profile
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProfileOptions {
    pub profile_name: String,
    pub profile_description: String,
    /// Must be `custom`
    pub profile_type: String,
    pub controls: Vec<ProfileControlsPrototype>,
    pub default_parameters: Vec<DefaultParametersPrototype>,
    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateProfileOptions {
    pub fn new(
        profile_name: impl Into<String>,
        profile_description: impl Into<String>,
        profile_type: impl Into<String>,
        controls: Vec<ProfileControlsPrototype>,
        default_parameters: Vec<DefaultParametersPrototype>,
    ) -> Self {
        Self {
            profile_name: profile_name.into(),
            profile_description: profile_description.into(),
            profile_type: profile_type.into(),
            controls,
            default_parameters,
            headers: RequestHeaders::default(),
        }
    }
}

impl OperationRequest for CreateProfileOptions {
    type Output = Profile;

    fn operation(&self) -> &'static Operation {
        &CREATE_PROFILE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_name", &self.profile_name)?;
        require("profile_description", &self.profile_description)?;
        require("profile_type", &self.profile_type)
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteCustomProfileOptions {
    pub profile_id: String,
    pub headers: RequestHeaders,
}

impl DeleteCustomProfileOptions {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for DeleteCustomProfileOptions {
    type Output = Profile;

    fn operation(&self) -> &'static Operation {
        &DELETE_CUSTOM_PROFILE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("profile_id", self.profile_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProfileOptions {
    pub profile_id: String,
    pub headers: RequestHeaders,
}

impl GetProfileOptions {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetProfileOptions {
    type Output = Profile;

    fn operation(&self) -> &'static Operation {
        &GET_PROFILE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("profile_id", self.profile_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceProfileOptions {
    #[serde(skip)]
    pub profile_id: String,
    pub profile_name: String,
    pub profile_description: String,
    pub profile_type: String,
    pub controls: Vec<ProfileControlsPrototype>,
    pub default_parameters: Vec<DefaultParametersPrototype>,
    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl ReplaceProfileOptions {
    pub fn new(
        profile_id: impl Into<String>,
        profile_name: impl Into<String>,
        profile_description: impl Into<String>,
        profile_type: impl Into<String>,
        controls: Vec<ProfileControlsPrototype>,
        default_parameters: Vec<DefaultParametersPrototype>,
    ) -> Self {
        Self {
            profile_id: profile_id.into(),
            profile_name: profile_name.into(),
            profile_description: profile_description.into(),
            profile_type: profile_type.into(),
            controls,
            default_parameters,
            headers: RequestHeaders::default(),
        }
    }
}

impl OperationRequest for ReplaceProfileOptions {
    type Output = Profile;

    fn operation(&self) -> &'static Operation {
        &REPLACE_PROFILE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("profile_id", &self.profile_id)?;
        require("profile_name", &self.profile_name)?;
        require("profile_description", &self.profile_description)?;
        require("profile_type", &self.profile_type)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("profile_id", self.profile_id.as_str())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}
