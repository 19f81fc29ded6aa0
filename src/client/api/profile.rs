//! Profile API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{Profile, ProfileCollection};
use crate::client::operation::invoke;
use crate::client::options::{
    CreateProfileOptions, DeleteCustomProfileOptions, GetProfileOptions, ListProfilesOptions,
    ReplaceProfileOptions,
};
use crate::client::pagination::Pager;
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Profile operations
#[async_trait]
pub trait ProfileApi: Transport {
    async fn list_profiles(
        &self,
        options: &ListProfilesOptions,
    ) -> Result<DetailedResponse<ProfileCollection>> {
        invoke(self, options).await
    }

    fn profiles_pager(&self, options: ListProfilesOptions) -> Pager<'_, Self, ListProfilesOptions> {
        Pager::new(self, options)
    }

    async fn create_profile(
        &self,
        options: &CreateProfileOptions,
    ) -> Result<DetailedResponse<Profile>> {
        invoke(self, options).await
    }

    /// Delete a custom profile. Predefined profiles cannot be deleted.
    async fn delete_custom_profile(
        &self,
        options: &DeleteCustomProfileOptions,
    ) -> Result<DetailedResponse<Profile>> {
        invoke(self, options).await
    }

    async fn get_profile(&self, options: &GetProfileOptions) -> Result<DetailedResponse<Profile>> {
        invoke(self, options).await
    }

    async fn replace_profile(
        &self,
        options: &ReplaceProfileOptions,
    ) -> Result<DetailedResponse<Profile>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> ProfileApi for T {}
