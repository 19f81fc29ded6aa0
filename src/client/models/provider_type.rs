//! Provider type models
//!
//! Provider types describe third-party integrations (e.g. Workload
//! Protection); provider type instances are configured connections to them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provider type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypeItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether an account may have more than one instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s2s_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelType>,

    /// Attributes an instance must provide, keyed by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypesCollection {
    #[serde(default)]
    pub provider_types: Vec<ProviderTypeItem>,
}

/// A configured provider type instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypeInstanceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Instances of one provider type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypeInstancesResponse {
    #[serde(default)]
    pub provider_type_instances: Vec<ProviderTypeInstanceItem>,
}

/// Instances across all provider types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTypesInstancesResponse {
    #[serde(default)]
    pub provider_types_instances: Vec<ProviderTypeInstanceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_types_collection() {
        let collection: ProviderTypesCollection = serde_json::from_value(json!({
            "provider_types": [{
                "id": "pt-1",
                "type": "workload-protection",
                "name": "workload-protection",
                "s2s_enabled": true,
                "instance_limit": 1,
                "label": {"text": "1 per instance", "tip": "Only one instance allowed"},
                "attributes": {"wp_crn": {"type": "text", "display_name": "CRN"}}
            }]
        }))
        .unwrap();

        let item = &collection.provider_types[0];
        assert_eq!(item.provider_type.as_deref(), Some("workload-protection"));
        assert!(item.attributes.as_ref().unwrap().contains_key("wp_crn"));
        assert_eq!(item.label.as_ref().unwrap().text.as_deref(), Some("1 per instance"));
    }

    #[test]
    fn test_instances_response() {
        let response: ProviderTypeInstancesResponse = serde_json::from_value(json!({
            "provider_type_instances": [{
                "id": "inst-1",
                "name": "workload-protection-instance-1",
                "attributes": {"wp_crn": "crn:v1:wp"},
                "created_at": "2023-07-24T13:14:18.884Z"
            }]
        }))
        .unwrap();

        let instance = &response.provider_type_instances[0];
        assert_eq!(
            instance.attributes.as_ref().unwrap()["wp_crn"],
            json!("crn:v1:wp")
        );
        assert!(instance.created_at.is_some());
    }
}
