//! Rule API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{Rule, RulesPageBase};
use crate::client::operation::invoke;
use crate::client::options::{
    CreateRuleOptions, DeleteRuleOptions, GetRuleOptions, ListRulesOptions, ReplaceRuleOptions,
};
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Rule operations
#[async_trait]
pub trait RuleApi: Transport {
    async fn list_rules(
        &self,
        options: &ListRulesOptions,
    ) -> Result<DetailedResponse<RulesPageBase>> {
        invoke(self, options).await
    }

    async fn create_rule(&self, options: &CreateRuleOptions) -> Result<DetailedResponse<Rule>> {
        invoke(self, options).await
    }

    /// Delete a custom rule. The service answers 204, so `result` is `None`.
    async fn delete_rule(
        &self,
        options: &DeleteRuleOptions,
    ) -> Result<DetailedResponse<serde_json::Value>> {
        invoke(self, options).await
    }

    /// Get a rule. The `ETag` response header is needed to replace it.
    async fn get_rule(&self, options: &GetRuleOptions) -> Result<DetailedResponse<Rule>> {
        invoke(self, options).await
    }

    async fn replace_rule(&self, options: &ReplaceRuleOptions) -> Result<DetailedResponse<Rule>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> RuleApi for T {}
