//! Report API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{
    EvaluationPage, Report, ReportControls, ReportLatest, ReportPage, ReportSummary, ReportTags,
    ReportViolationsDrift, ResourcePage, RuleInfo,
};
use crate::client::operation::{invoke, invoke_bytes};
use crate::client::options::{
    GetLatestReportsOptions, GetReportControlsOptions, GetReportEvaluationOptions,
    GetReportOptions, GetReportRuleOptions, GetReportSummaryOptions, GetReportTagsOptions,
    GetReportViolationsDriftOptions, ListReportEvaluationsOptions, ListReportResourcesOptions,
    ListReportsOptions,
};
use crate::client::pagination::Pager;
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Report operations
///
/// Reports are read-only; they are produced by scheduled and on-demand scans.
#[async_trait]
pub trait ReportApi: Transport {
    /// Latest report of every attachment, with account-wide statistics
    async fn get_latest_reports(
        &self,
        options: &GetLatestReportsOptions,
    ) -> Result<DetailedResponse<ReportLatest>> {
        invoke(self, options).await
    }

    async fn list_reports(
        &self,
        options: &ListReportsOptions,
    ) -> Result<DetailedResponse<ReportPage>> {
        invoke(self, options).await
    }

    fn reports_pager(&self, options: ListReportsOptions) -> Pager<'_, Self, ListReportsOptions> {
        Pager::new(self, options)
    }

    async fn get_report(&self, options: &GetReportOptions) -> Result<DetailedResponse<Report>> {
        invoke(self, options).await
    }

    async fn get_report_summary(
        &self,
        options: &GetReportSummaryOptions,
    ) -> Result<DetailedResponse<ReportSummary>> {
        invoke(self, options).await
    }

    /// Download the report's evaluations as CSV. The body is returned as is.
    async fn get_report_evaluation(
        &self,
        options: &GetReportEvaluationOptions,
    ) -> Result<DetailedResponse<Vec<u8>>> {
        invoke_bytes(self, options).await
    }

    async fn get_report_controls(
        &self,
        options: &GetReportControlsOptions,
    ) -> Result<DetailedResponse<ReportControls>> {
        invoke(self, options).await
    }

    async fn get_report_rule(
        &self,
        options: &GetReportRuleOptions,
    ) -> Result<DetailedResponse<RuleInfo>> {
        invoke(self, options).await
    }

    async fn list_report_evaluations(
        &self,
        options: &ListReportEvaluationsOptions,
    ) -> Result<DetailedResponse<EvaluationPage>> {
        invoke(self, options).await
    }

    fn report_evaluations_pager(
        &self,
        options: ListReportEvaluationsOptions,
    ) -> Pager<'_, Self, ListReportEvaluationsOptions> {
        Pager::new(self, options)
    }

    async fn list_report_resources(
        &self,
        options: &ListReportResourcesOptions,
    ) -> Result<DetailedResponse<ResourcePage>> {
        invoke(self, options).await
    }

    fn report_resources_pager(
        &self,
        options: ListReportResourcesOptions,
    ) -> Pager<'_, Self, ListReportResourcesOptions> {
        Pager::new(self, options)
    }

    async fn get_report_tags(
        &self,
        options: &GetReportTagsOptions,
    ) -> Result<DetailedResponse<ReportTags>> {
        invoke(self, options).await
    }

    async fn get_report_violations_drift(
        &self,
        options: &GetReportViolationsDriftOptions,
    ) -> Result<DetailedResponse<ReportViolationsDrift>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> ReportApi for T {}
