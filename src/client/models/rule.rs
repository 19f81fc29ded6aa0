//! Rule models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Values accepted for rule `type`
pub mod rule_type {
    pub const USER_DEFINED: &str = "user_defined";
    pub const SYSTEM_DEFINED: &str = "system_defined";
}

/// A rule evaluated against resources during a scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `user_defined` or `system_defined`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_config: Option<RequiredConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// Page of rules. Rules are not paginated by token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesPageBase {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<crate::client::pagination::PaginationFirst>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<crate::client::pagination::PaginationNext>,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Parameters a rule imports from the attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Import {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<RuleParameter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `string`, `numeric`, `general`, `boolean`, `string_list`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
}

/// Resource kind a rule applies to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Service name, e.g. `cloud-object-storage`
    pub service_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_display_name: Option<String>,

    /// Resource kind, e.g. `bucket`
    pub resource_kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_target_attributes: Option<Vec<AdditionalTargetAttribute>>,
}

impl Target {
    pub fn new(service_name: impl Into<String>, resource_kind: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            resource_kind: resource_kind.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalTargetAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Condition tree a resource must satisfy.
///
/// A node is either a single condition (`property`/`operator`/`value`) or a
/// combinator holding nested nodes under `and` / `or`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<RequiredConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<RequiredConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// e.g. `string_equals`, `num_greater_than`, `is_true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Comparison value of any JSON type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl RequiredConfig {
    /// Leaf condition
    pub fn condition(property: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            operator: Some(operator.into()),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn all(conditions: Vec<RequiredConfig>) -> Self {
        Self {
            and: Some(conditions),
            ..Default::default()
        }
    }

    pub fn any(conditions: Vec<RequiredConfig>) -> Self {
        Self {
            or: Some(conditions),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_type_field_renamed() {
        let rule: Rule = serde_json::from_str(
            r#"{"id": "rule-1", "type": "user_defined", "labels": ["a"]}"#,
        )
        .unwrap();
        assert_eq!(rule.rule_type.as_deref(), Some(rule_type::USER_DEFINED));

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "user_defined");
        assert!(json.get("rule_type").is_none());
    }

    #[test]
    fn test_required_config_nested() {
        let config = RequiredConfig::all(vec![
            RequiredConfig::condition("storage_class", "string_equals")
                .with_value(json!("smart")),
            RequiredConfig::any(vec![RequiredConfig::condition("encrypted", "is_true")]),
        ]);

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "and": [
                    {"property": "storage_class", "operator": "string_equals", "value": "smart"},
                    {"or": [{"property": "encrypted", "operator": "is_true"}]}
                ]
            })
        );

        let parsed: RequiredConfig =
            serde_json::from_value(serde_json::to_value(&config).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_target_requires_service_and_kind() {
        let result: Result<Target, _> = serde_json::from_str(r#"{"service_name": "iam"}"#);
        assert!(result.is_err());

        let target = Target::new("cloud-object-storage", "bucket");
        assert_eq!(target.resource_kind, "bucket");
    }
}
