use serde::Serialize;

use crate::client::models::{Import, RequiredConfig, Rule, RulesPageBase, Target};
use crate::client::operation::{
    CREATE_RULE, DELETE_RULE, GET_RULE, LIST_RULES, Operation, OperationRequest, REPLACE_RULE,
    RequestHeaders, json_body, push_query, require,
};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRulesOptions {
    /// Sent as `type`: `user_defined` or `system_defined`
    pub rule_type: Option<String>,
    /// Matches rule descriptions
    pub search: Option<String>,
    /// Service the rules target
    pub service_name: Option<String>,
    pub headers: RequestHeaders,
}

impl ListRulesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule_type(mut self, value: impl Into<String>) -> Self {
        self.rule_type = Some(value.into());
        self
    }

    pub fn search(mut self, value: impl Into<String>) -> Self {
        self.search = Some(value.into());
        self
    }

    pub fn service_name(mut self, value: impl Into<String>) -> Self {
        self.service_name = Some(value.into());
        self
    }
}

impl OperationRequest for ListRulesOptions {
    type Output = RulesPageBase;

    fn operation(&self) -> &'static Operation {
        &LIST_RULES
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "type", &self.rule_type);
        push_query(&mut query, "search", &self.search);
        push_query(&mut query, "service_name", &self.service_name);
        query
    }
}

/// Options for creating a custom rule
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRuleOptions {
    pub description: String,

    pub target: Target,

    pub required_config: RequiredConfig,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl CreateRuleOptions {
    pub fn new(
        description: impl Into<String>,
        target: Target,
        required_config: RequiredConfig,
    ) -> Self {
        Self {
            description: description.into(),
            target,
            required_config,
            ..Default::default()
        }
    }

    pub fn rule_type(mut self, value: impl Into<String>) -> Self {
        self.rule_type = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.import = Some(import);
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

impl OperationRequest for CreateRuleOptions {
    type Output = Rule;

    fn operation(&self) -> &'static Operation {
        &CREATE_RULE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("description", &self.description)?;
        require("target.service_name", &self.target.service_name)?;
        require("target.resource_kind", &self.target.resource_kind)
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

/// Deleting a rule answers 204 with no body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteRuleOptions {
    pub rule_id: String,
    pub headers: RequestHeaders,
}

impl DeleteRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for DeleteRuleOptions {
    type Output = serde_json::Value;

    fn operation(&self) -> &'static Operation {
        &DELETE_RULE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("rule_id", &self.rule_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("rule_id", self.rule_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRuleOptions {
    pub rule_id: String,
    pub headers: RequestHeaders,
}

impl GetRuleOptions {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetRuleOptions {
    type Output = Rule;

    fn operation(&self) -> &'static Operation {
        &GET_RULE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("rule_id", &self.rule_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("rule_id", self.rule_id.as_str())]
    }
}

/// Options for replacing a rule. `if_match` must carry the rule's current
/// `ETag`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceRuleOptions {
    #[serde(skip)]
    pub rule_id: String,

    /// Sent as `If-Match`
    #[serde(skip)]
    pub if_match: String,

    pub description: String,

    pub target: Target,

    pub required_config: RequiredConfig,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(skip)]
    pub headers: RequestHeaders,
}

impl ReplaceRuleOptions {
    pub fn new(
        rule_id: impl Into<String>,
        if_match: impl Into<String>,
        description: impl Into<String>,
        target: Target,
        required_config: RequiredConfig,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            if_match: if_match.into(),
            description: description.into(),
            target,
            required_config,
            ..Default::default()
        }
    }

    pub fn rule_type(mut self, value: impl Into<String>) -> Self {
        self.rule_type = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.import = Some(import);
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

impl OperationRequest for ReplaceRuleOptions {
    type Output = Rule;

    fn operation(&self) -> &'static Operation {
        &REPLACE_RULE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("rule_id", &self.rule_id)?;
        require("if_match", &self.if_match)?;
        require("description", &self.description)?;
        require("target.service_name", &self.target.service_name)?;
        require("target.resource_kind", &self.target.resource_kind)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("rule_id", self.rule_id.as_str())]
    }

    fn extra_headers(&self) -> Vec<(&'static str, String)> {
        vec![("If-Match", self.if_match.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        json_body(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::operation::HeaderOptions;
    use crate::error::Error;
    use serde_json::json;

    fn required_config() -> RequiredConfig {
        RequiredConfig::condition("storage_class", "string_equals").with_value(json!("smart"))
    }

    #[test]
    fn test_list_rules_type_query_name() {
        let request = ListRulesOptions::new()
            .rule_type("user_defined")
            .search("bucket")
            .prepare()
            .unwrap();
        assert_eq!(
            request.query,
            vec![
                ("type", "user_defined".to_string()),
                ("search", "bucket".to_string())
            ]
        );
    }

    #[test]
    fn test_create_rule_body() {
        let options = CreateRuleOptions::new(
            "Example rule",
            Target::new("cloud-object-storage", "bucket"),
            required_config(),
        )
        .version("1.0.0")
        .labels(vec![]);

        let body = options.prepare().unwrap().body.unwrap();
        assert_eq!(
            body,
            json!({
                "description": "Example rule",
                "target": {"service_name": "cloud-object-storage", "resource_kind": "bucket"},
                "required_config": {
                    "property": "storage_class",
                    "operator": "string_equals",
                    "value": "smart"
                },
                "version": "1.0.0",
                "labels": []
            })
        );
    }

    #[test]
    fn test_replace_rule_sends_if_match() {
        let options = ReplaceRuleOptions::new(
            "rule-1",
            "W/\"etag\"",
            "Example rule",
            Target::new("cloud-object-storage", "bucket"),
            required_config(),
        )
        .x_correlation_id("corr");

        let request = options.prepare().unwrap();
        assert_eq!(
            request.headers,
            vec![
                ("X-Correlation-ID".to_string(), "corr".to_string()),
                ("If-Match".to_string(), "W/\"etag\"".to_string()),
            ]
        );
        let body = request.body.unwrap();
        assert!(body.get("if_match").is_none());
        assert!(body.get("rule_id").is_none());
    }

    #[test]
    fn test_replace_rule_requires_if_match() {
        let options = ReplaceRuleOptions::new(
            "rule-1",
            "",
            "Example rule",
            Target::new("iam", "user"),
            required_config(),
        );
        match options.prepare() {
            Err(Error::Validation(msg)) => assert!(msg.contains("if_match")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
