//! Report display models

use serde::Serialize;
use tabled::Tabled;

use super::FieldDisplay;
use super::common::{NONE, count, format_datetime, or_none, truncate_string};
use crate::client::models::{ComplianceStats, ControlWithStats, EvalStats, Report, ReportSummary};

/// Report display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportDisplay {
    #[tabled(rename = "REPORT ID")]
    pub id: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "ATTACHMENT")]
    pub attachment: String,

    #[tabled(rename = "TYPE")]
    pub report_type: String,

    #[tabled(rename = "SCAN TIME")]
    pub scan_time: String,
}

impl From<Report> for ReportDisplay {
    fn from(report: Report) -> Self {
        Self {
            id: or_none(report.id),
            profile: or_none(report.profile.and_then(|p| p.name)),
            attachment: or_none(report.attachment.and_then(|a| a.name)),
            report_type: or_none(report.report_type),
            scan_time: format_datetime(report.scan_time),
        }
    }
}

/// Per-control compliance row of a report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportControlDisplay {
    #[tabled(rename = "CONTROL")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "COMPLIANT")]
    pub compliant: String,

    #[tabled(rename = "NOT COMPLIANT")]
    pub not_compliant: String,

    #[tabled(rename = "UNABLE")]
    pub unable_to_perform: String,
}

impl From<ControlWithStats> for ReportControlDisplay {
    fn from(control: ControlWithStats) -> Self {
        Self {
            name: or_none(control.control_name),
            category: truncate_string(&or_none(control.control_category), 40),
            status: or_none(control.status),
            compliant: count(control.compliant_count),
            not_compliant: count(control.not_compliant_count),
            unable_to_perform: count(control.unable_to_perform_count),
        }
    }
}

fn compliance_line(stats: &ComplianceStats) -> String {
    format!(
        "{} ({} of {} compliant)",
        stats.status.as_deref().unwrap_or(NONE),
        count(stats.compliant_count),
        count(stats.total_count)
    )
}

fn evaluation_line(stats: &EvalStats) -> String {
    format!(
        "{} pass, {} fail, {} error of {}",
        count(stats.pass_count),
        count(stats.failure_count),
        count(stats.error_count),
        count(stats.total_count)
    )
}

/// Rows describing a report summary.
pub fn summary_fields(summary: &ReportSummary) -> Vec<FieldDisplay> {
    let mut rows = vec![
        FieldDisplay::new("Report ID", or_none(summary.report_id.clone())),
        FieldDisplay::new("Instance ID", or_none(summary.instance_id.clone())),
        FieldDisplay::new(
            "Account",
            or_none(summary.account.as_ref().and_then(|a| a.name.clone())),
        ),
    ];
    if let Some(score) = &summary.score {
        rows.push(FieldDisplay::new(
            "Score",
            format!(
                "{}% ({} of {} passed)",
                count(score.percent),
                count(score.passed),
                count(score.total_count)
            ),
        ));
    }
    if let Some(controls) = &summary.controls {
        rows.push(FieldDisplay::new("Controls", compliance_line(controls)));
    }
    if let Some(evaluations) = &summary.evaluations {
        rows.push(FieldDisplay::new("Evaluations", evaluation_line(evaluations)));
    }
    if let Some(resources) = &summary.resources {
        rows.push(FieldDisplay::new(
            "Resources",
            format!(
                "{} ({} of {} compliant)",
                resources.status.as_deref().unwrap_or(NONE),
                count(resources.compliant_count),
                count(resources.total_count)
            ),
        ));
    }
    rows
}
