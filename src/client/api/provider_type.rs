//! Provider type API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{
    ProviderTypeInstanceItem, ProviderTypeInstancesResponse, ProviderTypeItem,
    ProviderTypesCollection, ProviderTypesInstancesResponse,
};
use crate::client::operation::invoke;
use crate::client::options::{
    CreateProviderTypeInstanceOptions, DeleteProviderTypeInstanceOptions,
    GetProviderTypeByIdOptions, GetProviderTypeInstanceOptions, GetProviderTypesInstancesOptions,
    ListProviderTypeInstancesOptions, ListProviderTypesOptions,
    UpdateProviderTypeInstanceOptions,
};
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Provider type and provider type instance operations
#[async_trait]
pub trait ProviderTypeApi: Transport {
    async fn list_provider_types(
        &self,
        options: &ListProviderTypesOptions,
    ) -> Result<DetailedResponse<ProviderTypesCollection>> {
        invoke(self, options).await
    }

    async fn get_provider_type_by_id(
        &self,
        options: &GetProviderTypeByIdOptions,
    ) -> Result<DetailedResponse<ProviderTypeItem>> {
        invoke(self, options).await
    }

    async fn list_provider_type_instances(
        &self,
        options: &ListProviderTypeInstancesOptions,
    ) -> Result<DetailedResponse<ProviderTypeInstancesResponse>> {
        invoke(self, options).await
    }

    async fn create_provider_type_instance(
        &self,
        options: &CreateProviderTypeInstanceOptions,
    ) -> Result<DetailedResponse<ProviderTypeInstanceItem>> {
        invoke(self, options).await
    }

    /// Remove an instance. The service answers 204, so `result` is `None`.
    async fn delete_provider_type_instance(
        &self,
        options: &DeleteProviderTypeInstanceOptions,
    ) -> Result<DetailedResponse<serde_json::Value>> {
        invoke(self, options).await
    }

    async fn get_provider_type_instance(
        &self,
        options: &GetProviderTypeInstanceOptions,
    ) -> Result<DetailedResponse<ProviderTypeInstanceItem>> {
        invoke(self, options).await
    }

    async fn update_provider_type_instance(
        &self,
        options: &UpdateProviderTypeInstanceOptions,
    ) -> Result<DetailedResponse<ProviderTypeInstanceItem>> {
        invoke(self, options).await
    }

    /// Instances of every provider type in the account
    async fn get_provider_types_instances(
        &self,
        options: &GetProviderTypesInstancesOptions,
    ) -> Result<DetailedResponse<ProviderTypesInstancesResponse>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> ProviderTypeApi for T {}
