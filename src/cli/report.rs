//! Report commands

use std::io::Write;

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_paged_list;
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::client::ReportApi;
use crate::client::models::ReportLatest;
use crate::client::options::{
    GetLatestReportsOptions, GetReportControlsOptions, GetReportEvaluationOptions,
    GetReportSummaryOptions, ListReportsOptions,
};
use crate::error::Result;
use crate::models::display::summary_fields;
use crate::models::{ReportControlDisplay, ReportDisplay};
use crate::output::{self, json, table};

/// Filters accepted by `report list`
#[derive(Debug, Default, Clone)]
pub struct ReportFilters {
    pub attachment_id: Option<String>,
    pub profile_id: Option<String>,
    pub report_type: Option<String>,
}

impl ReportFilters {
    fn to_options(&self, limit: i64) -> ListReportsOptions {
        ListReportsOptions {
            attachment_id: self.attachment_id.clone(),
            profile_id: self.profile_id.clone(),
            report_type: self.report_type.clone(),
            ..Default::default()
        }
        .limit(limit)
    }
}

/// Run the report list command
pub async fn list(
    opts: &GlobalOptions,
    filters: &ReportFilters,
    pagination: &PaginationArgs,
) -> Result<()> {
    run_paged_list::<_, ReportDisplay, _>(opts, pagination, "reports", |limit| {
        filters.to_options(limit)
    })
    .await
}

/// Run the report latest command
pub async fn latest(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let latest = ctx
        .client
        .get_latest_reports(&GetLatestReportsOptions::new())
        .await?
        .into_result()
        .unwrap_or_default();

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&latest)?),
        OutputFormat::Table => print_latest(latest),
    }
    Ok(())
}

fn print_latest(latest: ReportLatest) {
    if let Some(score) = &latest.score {
        let percent = score.percent.unwrap_or(0);
        let label = format!("{}%", percent);
        let label = if percent >= 80 {
            label.green()
        } else if percent >= 50 {
            label.yellow()
        } else {
            label.red()
        };
        println!(
            "{} {} ({} of {} controls passed)\n",
            "Compliance score:".bold(),
            label,
            score.passed.unwrap_or(0),
            score.total_count.unwrap_or(0)
        );
    }

    let rows: Vec<ReportDisplay> = latest.reports.into_iter().map(ReportDisplay::from).collect();
    println!("{}", table::format_table(&rows));
}

/// Run the report summary command
pub async fn summary(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = ctx
        .client
        .get_report_summary(&GetReportSummaryOptions::new(id))
        .await?
        .into_result()
        .unwrap_or_default();

    output::print_detail(&summary, &summary_fields(&summary), ctx.format)
}

/// Run the report controls command
pub async fn controls(opts: &GlobalOptions, id: &str, status: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut options = GetReportControlsOptions::new(id);
    if let Some(status) = status {
        options = options.status(status);
    }

    let report_controls = ctx
        .client
        .get_report_controls(&options)
        .await?
        .into_result()
        .unwrap_or_default();

    debug!(
        "Report {} has {} controls",
        id,
        report_controls.controls.len()
    );

    let rows: Vec<ReportControlDisplay> = report_controls
        .controls
        .into_iter()
        .map(ReportControlDisplay::from)
        .collect();
    output::print_list(&rows, ctx.format)
}

/// Run the report download command
pub async fn download(
    opts: &GlobalOptions,
    id: &str,
    output_path: Option<&str>,
    exclude_summary: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut options = GetReportEvaluationOptions::new(id);
    if exclude_summary {
        options = options.exclude_summary(true);
    }

    let csv = ctx
        .client
        .get_report_evaluation(&options)
        .await?
        .into_result()
        .unwrap_or_default();

    match output_path {
        Some(path) => {
            std::fs::write(path, &csv)?;
            eprintln!(
                "{} Wrote {} bytes to {}",
                "✓".green(),
                csv.len(),
                path.cyan()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&csv)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::OperationRequest;

    #[test]
    fn test_filters_to_options() {
        let filters = ReportFilters {
            profile_id: Some("prof-1".to_string()),
            report_type: Some("scheduled".to_string()),
            ..Default::default()
        };

        let request = filters.to_options(25).prepare().unwrap();
        assert!(request.query.contains(&("profile_id", "prof-1".to_string())));
        assert!(request.query.contains(&("type", "scheduled".to_string())));
        assert!(request.query.contains(&("limit", "25".to_string())));
        assert!(!request.query.iter().any(|(k, _)| *k == "attachment_id"));
    }
}
