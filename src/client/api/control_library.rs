//! Control library API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{ControlLibrary, ControlLibraryCollection, ControlLibraryDelete};
use crate::client::operation::invoke;
use crate::client::options::{
    CreateCustomControlLibraryOptions, DeleteCustomControlLibraryOptions,
    GetControlLibraryOptions, ListControlLibrariesOptions, ReplaceCustomControlLibraryOptions,
};
use crate::client::pagination::Pager;
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Control library operations
#[async_trait]
pub trait ControlLibraryApi: Transport {
    /// List one page of control libraries
    async fn list_control_libraries(
        &self,
        options: &ListControlLibrariesOptions,
    ) -> Result<DetailedResponse<ControlLibraryCollection>> {
        invoke(self, options).await
    }

    /// Pager over every control library matching `options`
    fn control_libraries_pager(
        &self,
        options: ListControlLibrariesOptions,
    ) -> Pager<'_, Self, ListControlLibrariesOptions> {
        Pager::new(self, options)
    }

    async fn create_custom_control_library(
        &self,
        options: &CreateCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>> {
        invoke(self, options).await
    }

    async fn delete_custom_control_library(
        &self,
        options: &DeleteCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibraryDelete>> {
        invoke(self, options).await
    }

    async fn get_control_library(
        &self,
        options: &GetControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>> {
        invoke(self, options).await
    }

    async fn replace_custom_control_library(
        &self,
        options: &ReplaceCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>> {
        invoke(self, options).await
    }
}

impl<T: Transport + ?Sized> ControlLibraryApi for T {}
