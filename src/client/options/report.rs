use crate::client::models::{
    EvaluationPage, Report, ReportControls, ReportLatest, ReportPage, ReportSummary, ReportTags,
    ReportViolationsDrift, ResourcePage, RuleInfo,
};
use crate::client::operation::{
    GET_LATEST_REPORTS, GET_REPORT, GET_REPORT_CONTROLS, GET_REPORT_EVALUATION, GET_REPORT_RULE,
    GET_REPORT_SUMMARY, GET_REPORT_TAGS, GET_REPORT_VIOLATIONS_DRIFT, LIST_REPORT_EVALUATIONS,
    LIST_REPORT_RESOURCES, LIST_REPORTS, Operation, OperationRequest, RequestHeaders, push_query,
    require,
};
use crate::client::pagination::PagedRequest;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetLatestReportsOptions {
    /// Field to sort by, e.g. `profile_name`
    pub sort: Option<String>,
    pub headers: RequestHeaders,
}

impl GetLatestReportsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }
}

impl OperationRequest for GetLatestReportsOptions {
    type Output = ReportLatest;

    fn operation(&self) -> &'static Operation {
        &GET_LATEST_REPORTS
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "sort", &self.sort);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportsOptions {
    pub attachment_id: Option<String>,
    pub group_id: Option<String>,
    pub profile_id: Option<String>,
    /// Sent as `type`: `scheduled` or `ondemand`
    pub report_type: Option<String>,
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub headers: RequestHeaders,
}

impl ListReportsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachment_id(mut self, value: impl Into<String>) -> Self {
        self.attachment_id = Some(value.into());
        self
    }

    pub fn group_id(mut self, value: impl Into<String>) -> Self {
        self.group_id = Some(value.into());
        self
    }

    pub fn profile_id(mut self, value: impl Into<String>) -> Self {
        self.profile_id = Some(value.into());
        self
    }

    pub fn report_type(mut self, value: impl Into<String>) -> Self {
        self.report_type = Some(value.into());
        self
    }

    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }
}

impl OperationRequest for ListReportsOptions {
    type Output = ReportPage;

    fn operation(&self) -> &'static Operation {
        &LIST_REPORTS
    }

    request_headers!();

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "attachment_id", &self.attachment_id);
        push_query(&mut query, "group_id", &self.group_id);
        push_query(&mut query, "profile_id", &self.profile_id);
        push_query(&mut query, "type", &self.report_type);
        push_query(&mut query, "start", &self.start);
        push_query(&mut query, "limit", &self.limit);
        push_query(&mut query, "sort", &self.sort);
        query
    }
}

impl PagedRequest for ListReportsOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportOptions {
    pub report_id: String,
    pub headers: RequestHeaders,
}

impl GetReportOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetReportOptions {
    type Output = Report;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportSummaryOptions {
    pub report_id: String,
    pub headers: RequestHeaders,
}

impl GetReportSummaryOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetReportSummaryOptions {
    type Output = ReportSummary;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_SUMMARY
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }
}

/// Download of a report's evaluations as CSV
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportEvaluationOptions {
    pub report_id: String,
    /// Leave the summary rows out of the CSV
    pub exclude_summary: Option<bool>,
    pub headers: RequestHeaders,
}

impl GetReportEvaluationOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    pub fn exclude_summary(mut self, value: bool) -> Self {
        self.exclude_summary = Some(value);
        self
    }
}

impl OperationRequest for GetReportEvaluationOptions {
    type Output = Vec<u8>;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_EVALUATION
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "exclude_summary", &self.exclude_summary);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportControlsOptions {
    pub report_id: String,
    pub control_id: Option<String>,
    pub control_name: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    /// `compliant`, `not_compliant`, `unable_to_perform` or `user_evaluation_required`
    pub status: Option<String>,
    pub sort: Option<String>,
    pub headers: RequestHeaders,
}

impl GetReportControlsOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    pub fn control_id(mut self, value: impl Into<String>) -> Self {
        self.control_id = Some(value.into());
        self
    }

    pub fn control_name(mut self, value: impl Into<String>) -> Self {
        self.control_name = Some(value.into());
        self
    }

    pub fn control_description(mut self, value: impl Into<String>) -> Self {
        self.control_description = Some(value.into());
        self
    }

    pub fn control_category(mut self, value: impl Into<String>) -> Self {
        self.control_category = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }
}

impl OperationRequest for GetReportControlsOptions {
    type Output = ReportControls;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_CONTROLS
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "control_id", &self.control_id);
        push_query(&mut query, "control_name", &self.control_name);
        push_query(&mut query, "control_description", &self.control_description);
        push_query(&mut query, "control_category", &self.control_category);
        push_query(&mut query, "status", &self.status);
        push_query(&mut query, "sort", &self.sort);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportRuleOptions {
    pub report_id: String,
    pub rule_id: String,
    pub headers: RequestHeaders,
}

impl GetReportRuleOptions {
    pub fn new(report_id: impl Into<String>, rule_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            rule_id: rule_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetReportRuleOptions {
    type Output = RuleInfo;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_RULE
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)?;
        require("rule_id", &self.rule_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("report_id", self.report_id.as_str()),
            ("rule_id", self.rule_id.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportEvaluationsOptions {
    pub report_id: String,
    pub assessment_id: Option<String>,
    pub component_id: Option<String>,
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    /// `pass`, `failure`, `error` or `skipped`
    pub status: Option<String>,
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub headers: RequestHeaders,
}

impl ListReportEvaluationsOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    pub fn assessment_id(mut self, value: impl Into<String>) -> Self {
        self.assessment_id = Some(value.into());
        self
    }

    pub fn component_id(mut self, value: impl Into<String>) -> Self {
        self.component_id = Some(value.into());
        self
    }

    pub fn target_id(mut self, value: impl Into<String>) -> Self {
        self.target_id = Some(value.into());
        self
    }

    pub fn target_name(mut self, value: impl Into<String>) -> Self {
        self.target_name = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl OperationRequest for ListReportEvaluationsOptions {
    type Output = EvaluationPage;

    fn operation(&self) -> &'static Operation {
        &LIST_REPORT_EVALUATIONS
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "assessment_id", &self.assessment_id);
        push_query(&mut query, "component_id", &self.component_id);
        push_query(&mut query, "target_id", &self.target_id);
        push_query(&mut query, "target_name", &self.target_name);
        push_query(&mut query, "status", &self.status);
        push_query(&mut query, "start", &self.start);
        push_query(&mut query, "limit", &self.limit);
        query
    }
}

impl PagedRequest for ListReportEvaluationsOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListReportResourcesOptions {
    pub report_id: String,
    /// Resource ID
    pub id: Option<String>,
    pub resource_name: Option<String>,
    pub account_id: Option<String>,
    pub component_id: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub headers: RequestHeaders,
}

impl ListReportResourcesOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn resource_name(mut self, value: impl Into<String>) -> Self {
        self.resource_name = Some(value.into());
        self
    }

    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }

    pub fn component_id(mut self, value: impl Into<String>) -> Self {
        self.component_id = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.sort = Some(value.into());
        self
    }

    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl OperationRequest for ListReportResourcesOptions {
    type Output = ResourcePage;

    fn operation(&self) -> &'static Operation {
        &LIST_REPORT_RESOURCES
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "id", &self.id);
        push_query(&mut query, "resource_name", &self.resource_name);
        push_query(&mut query, "account_id", &self.account_id);
        push_query(&mut query, "component_id", &self.component_id);
        push_query(&mut query, "status", &self.status);
        push_query(&mut query, "sort", &self.sort);
        push_query(&mut query, "start", &self.start);
        push_query(&mut query, "limit", &self.limit);
        query
    }
}

impl PagedRequest for ListReportResourcesOptions {
    fn set_start(&mut self, start: Option<String>) {
        self.start = start;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportTagsOptions {
    pub report_id: String,
    pub headers: RequestHeaders,
}

impl GetReportTagsOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }
}

impl OperationRequest for GetReportTagsOptions {
    type Output = ReportTags;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_TAGS
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetReportViolationsDriftOptions {
    pub report_id: String,
    /// Look-back window in days
    pub scan_time_duration: Option<i64>,
    pub headers: RequestHeaders,
}

impl GetReportViolationsDriftOptions {
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            ..Default::default()
        }
    }

    pub fn scan_time_duration(mut self, days: i64) -> Self {
        self.scan_time_duration = Some(days);
        self
    }
}

impl OperationRequest for GetReportViolationsDriftOptions {
    type Output = ReportViolationsDrift;

    fn operation(&self) -> &'static Operation {
        &GET_REPORT_VIOLATIONS_DRIFT
    }

    request_headers!();

    fn validate(&self) -> Result<()> {
        require("report_id", &self.report_id)
    }

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![("report_id", self.report_id.as_str())]
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "scan_time_duration", &self.scan_time_duration);
        query
    }
}
