//! Rule commands
//!
//! Rules are listed in a single response; there is no `start` token to follow.

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::confirm;
use crate::client::RuleApi;
use crate::client::options::{DeleteRuleOptions, GetRuleOptions, ListRulesOptions};
use crate::error::Result;
use crate::models::RuleDisplay;
use crate::output;

/// Filters accepted by `rule list`
#[derive(Debug, Default, Clone)]
pub struct RuleFilters {
    pub rule_type: Option<String>,
    pub search: Option<String>,
    pub service_name: Option<String>,
}

impl RuleFilters {
    fn to_options(&self) -> ListRulesOptions {
        ListRulesOptions {
            rule_type: self.rule_type.clone(),
            search: self.search.clone(),
            service_name: self.service_name.clone(),
            ..Default::default()
        }
    }
}

/// Run the rule list command
pub async fn list(opts: &GlobalOptions, filters: &RuleFilters) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = ctx
        .client
        .list_rules(&filters.to_options())
        .await?
        .into_result()
        .unwrap_or_default();

    debug!("Fetched {} of {} rules", page.rules.len(), page.total_count);

    let rows: Vec<RuleDisplay> = page.rules.into_iter().map(RuleDisplay::from).collect();
    output::print_list(&rows, ctx.format)
}

/// Run the rule get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let response = ctx.client.get_rule(&GetRuleOptions::new(id)).await?;
    if let Some(etag) = response.header("ETag") {
        debug!("Rule {} ETag {}", id, etag);
    }
    let rule = response.into_result().unwrap_or_default();

    let rows = vec![RuleDisplay::from(rule.clone())];
    output::print_detail(&rule, &rows, ctx.format)
}

/// Run the rule delete command
pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    if !confirm(&format!("Delete rule {}?", id), yes)? {
        return Ok(());
    }

    ctx.client.delete_rule(&DeleteRuleOptions::new(id)).await?;

    println!("{} Rule {} deleted", "✓".green(), id.bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_options() {
        let filters = RuleFilters {
            rule_type: Some("user_defined".to_string()),
            search: None,
            service_name: Some("iam-identity".to_string()),
        };

        let options = filters.to_options();
        assert_eq!(options.rule_type.as_deref(), Some("user_defined"));
        assert!(options.search.is_none());
        assert_eq!(options.service_name.as_deref(), Some("iam-identity"));
    }
}
