//! Rule display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{NONE, or_none, truncate_string};
use crate::client::models::Rule;

/// Rule display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RuleDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "TYPE")]
    pub rule_type: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "RESOURCE KIND")]
    pub resource_kind: String,

    #[tabled(rename = "VERSION")]
    pub version: String,
}

impl From<Rule> for RuleDisplay {
    fn from(rule: Rule) -> Self {
        let (service, resource_kind) = match rule.target {
            Some(target) => (target.service_name, target.resource_kind),
            None => (NONE.to_string(), NONE.to_string()),
        };
        Self {
            id: or_none(rule.id),
            description: truncate_string(&or_none(rule.description), 60),
            rule_type: or_none(rule.rule_type),
            service,
            resource_kind,
            version: or_none(rule.version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Target;

    #[test]
    fn test_rule_display_with_target() {
        let rule = Rule {
            id: Some("rule-1".to_string()),
            description: Some("Buckets use smart storage".to_string()),
            rule_type: Some("user_defined".to_string()),
            target: Some(Target::new("cloud-object-storage", "bucket")),
            ..Default::default()
        };

        let display = RuleDisplay::from(rule);
        assert_eq!(display.service, "cloud-object-storage");
        assert_eq!(display.resource_kind, "bucket");
        assert_eq!(display.rule_type, "user_defined");
    }

    #[test]
    fn test_rule_display_without_target() {
        let display = RuleDisplay::from(Rule::default());
        assert_eq!(display.id, "--");
        assert_eq!(display.service, "--");
    }
}
