//! Profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::control_library::{ControlDocs, ControlSpecifications};
use crate::client::pagination::{PagedCollection, PaginationFirst, PaginationNext};

/// Values accepted for `profile_type`
pub mod profile_type {
    pub const PREDEFINED: &str = "predefined";
    pub const CUSTOM: &str = "custom";
}

/// A profile: a set of controls drawn from control libraries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_description: Option<String>,

    /// `predefined` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_parents_count: Option<i64>,

    /// Number of attachments that use this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<ProfileControls>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_parameters: Option<Vec<DefaultParametersPrototype>>,
}

/// Profile summary as returned by the list operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments_count: Option<i64>,
}

/// Page of profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCollection {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default)]
    pub profiles: Vec<ProfileItem>,
}

impl PagedCollection for ProfileCollection {
    type Item = ProfileItem;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.profiles
    }
}

/// A control as it appears inside a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControls {
    /// Library the control comes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_requirement: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_docs: Option<ControlDocs>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specifications_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specifications: Option<Vec<ControlSpecifications>>,
}

/// Reference to a library control, used when creating or replacing a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControlsPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
}

impl ProfileControlsPrototype {
    pub fn new(control_library_id: impl Into<String>, control_id: impl Into<String>) -> Self {
        Self {
            control_library_id: Some(control_library_id.into()),
            control_id: Some(control_id.into()),
        }
    }
}

/// Default value of an assessment parameter within a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultParametersPrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,

    /// Default value, serialized as a string by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialize() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "id": "prof-1",
                "profile_name": "FS Cloud",
                "profile_type": "predefined",
                "attachments_count": 2,
                "controls": [{
                    "control_library_id": "lib-1",
                    "control_id": "ctrl-1",
                    "control_specifications": [{"control_specification_id": "spec-1"}]
                }],
                "default_parameters": [{
                    "assessment_id": "rule-1",
                    "parameter_name": "session_timeout",
                    "parameter_default_value": "120"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.attachments_count, Some(2));
        let controls = profile.controls.unwrap();
        assert_eq!(controls[0].control_library_id.as_deref(), Some("lib-1"));
        assert_eq!(
            profile.default_parameters.unwrap()[0]
                .parameter_default_value
                .as_deref(),
            Some("120")
        );
    }

    #[test]
    fn test_controls_prototype_serialize() {
        let control = ProfileControlsPrototype::new("lib-1", "ctrl-1");
        assert_eq!(
            serde_json::to_value(&control).unwrap(),
            serde_json::json!({"control_library_id": "lib-1", "control_id": "ctrl-1"})
        );
    }
}
