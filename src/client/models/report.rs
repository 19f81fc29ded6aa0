//! Report models
//!
//! Reports are produced by scans and break compliance results down by
//! control, rule, evaluation, and resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::pagination::{PagedCollection, PaginationFirst, PaginationNext};

/// Values of compliance and evaluation `status`
pub mod compliance_status {
    pub const COMPLIANT: &str = "compliant";
    pub const NOT_COMPLIANT: &str = "not_compliant";
    pub const UNABLE_TO_PERFORM: &str = "unable_to_perform";
    pub const USER_EVALUATION_REQUIRED: &str = "user_evaluation_required";
    pub const PASS: &str = "pass";
    pub const FAILURE: &str = "failure";
    pub const ERROR: &str = "error";
    pub const SKIPPED: &str = "skipped";
}

/// A scan report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Groups reports of the same attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_time: Option<DateTime<Utc>>,

    /// `scheduled` or `ondemand`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cos_object: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// Page of reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default)]
    pub reports: Vec<Report>,
}

impl PagedCollection for ReportPage {
    type Item = Report;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.reports
    }
}

/// Latest reports across attachments with aggregate statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportLatest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls_summary: Option<ComplianceStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations_summary: Option<EvalStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ComplianceScore>,

    #[serde(default)]
    pub reports: Vec<Report>,
}

/// Compliance counts for controls or resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unable_to_perform_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_evaluation_required_count: Option<i64>,
}

/// Evaluation outcome counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
}

/// Summary of a single report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    /// Sent by the service as `isntance_id`
    #[serde(
        rename = "isntance_id",
        alias = "instance_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instance_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ComplianceScore>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<ComplianceStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<EvalStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unable_to_perform_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_evaluation_required_count: Option<i64>,

    /// Resources with the most failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_failed: Option<Vec<ResourceSummaryItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummaryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i64>,
}

/// Controls of a report with their compliance statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unable_to_perform_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_evaluation_required_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default)]
    pub controls: Vec<ControlWithStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlWithStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_library_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unable_to_perform_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_evaluation_required_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specifications: Option<Vec<ControlSpecificationWithStats>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSpecificationWithStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specification_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_specification_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessments: Option<Vec<AssessmentWithStats>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_compliant_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unable_to_perform_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_evaluation_required_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentWithStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<crate::client::models::ParameterInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i64>,
}

/// A rule as evaluated in a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Page of evaluations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPage {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

impl PagedCollection for EvaluationPage {
    type Item = Evaluation;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.evaluations
    }
}

/// Result of one assessment against one target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetInfo>,

    /// `pass`, `failure`, `error` or `skipped`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<EvalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<crate::client::models::ParameterInfo>>,
}

/// Resource an evaluation ran against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_crn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

/// Observed property of an evaluated resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_value: Option<serde_json::Value>,
}

/// Page of evaluated resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub first: PaginationFirst,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationNext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl PagedCollection for ResourcePage {
    type Item = Resource;

    fn next_link(&self) -> Option<&PaginationNext> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.resources
    }
}

/// A resource with its evaluation counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i64>,
}

/// Tags grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Compliance trend of the report's group over time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportViolationsDrift {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_group_id: Option<String>,

    #[serde(default)]
    pub data_points: Vec<ReportViolationDataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportViolationDataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<ComplianceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// Profile a report was produced from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Attachment a report was produced from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<AttachmentScope>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<crate::client::models::PropertyItem>>,
}
