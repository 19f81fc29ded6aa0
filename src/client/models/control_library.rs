//! Control library models
//!
//! A control library owns controls; each control owns control
//! specifications, each specification owns assessments, and each assessment
//! owns its parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::pagination::{PagedCollection, PaginationFirst, PaginationNext};

/// Values accepted for `control_library_type`
pub mod control_library_type {
    pub const PREDEFINED: &str = "predefined";
    pub const CUSTOM: &str = "custom";
}

/// A control library with its controls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibrary {
    /// Control library ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Account that owns the library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_description: Option<String>,

    /// `predefined` or `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_type: Option<String>,

    /// Groups versions of the same library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    /// Whether this is the latest version in its version group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_parents_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<ControlsInControlLib>>,
}

/// Control library summary as returned by the list operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_group_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_count: Option<i64>,
}

/// Page of control libraries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryCollection {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default)]
    pub control_libraries: Vec<ControlLibraryItem>,
}

impl PagedCollection for ControlLibraryCollection {
    type Item = ControlLibraryItem;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.control_libraries
    }
}

/// Response of a control library deletion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryDelete {
    /// ID of the deleted library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
}

/// A control inside a control library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlsInControlLib {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_category: Option<String>,

    /// Parent control, when the library is hierarchical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specifications: Option<Vec<ControlSpecifications>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_docs: Option<ControlDocs>,

    /// Whether the control is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_requirement: Option<bool>,

    /// `enabled` or `disabled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// How a control is met by a particular component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSpecifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specification_id: Option<String>,

    /// Usually `user`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,

    /// Component (service) the specification applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    /// Cloud environment, e.g. `ibm-cloud`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specification_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessments_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Vec<Implementation>>,
}

/// External documentation for a control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlDocs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_docs_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_docs_type: Option<String>,
}

/// An assessment (rule) implementing a control specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    /// Rule ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_method: Option<String>,

    /// `automated` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterInfo>>,
}

/// A parameter of an assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_display_name: Option<String>,

    /// `string`, `numeric`, `boolean`, `general`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,

    /// Value of any JSON type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<serde_json::Value>,
}
