//! Settings API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{Settings, TestEvent};
use crate::client::operation::invoke;
use crate::client::options::{GetSettingsOptions, PostTestEventOptions, UpdateSettingsOptions};
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Service settings operations
#[async_trait]
pub trait SettingsApi: Transport {
    /// Get the settings of the service instance
    async fn get_settings(
        &self,
        options: &GetSettingsOptions,
    ) -> Result<DetailedResponse<Settings>> {
        invoke(self, options).await
    }

    /// Update the Event Notifications and Object Storage settings
    async fn update_settings(
        &self,
        options: &UpdateSettingsOptions,
    ) -> Result<DetailedResponse<Settings>> {
        invoke(self, options).await
    }

    /// Send a test event through Event Notifications
    async fn post_test_event(
        &self,
        options: &PostTestEventOptions,
    ) -> Result<DetailedResponse<TestEvent>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> SettingsApi for T {}
