//! Attachment and scan API trait

use async_trait::async_trait;

use crate::client::Transport;
use crate::client::models::{AttachmentCollection, AttachmentItem, AttachmentPrototype, Scan};
use crate::client::operation::invoke;
use crate::client::options::{
    CreateAttachmentOptions, CreateScanOptions, DeleteProfileAttachmentOptions,
    GetProfileAttachmentOptions, ListAttachmentsAccountOptions, ListAttachmentsOptions,
    ReplaceProfileAttachmentOptions,
};
use crate::client::pagination::Pager;
use crate::client::response::DetailedResponse;
use crate::error::Result;

/// Attachment and scan operations
#[async_trait]
pub trait AttachmentApi: Transport {
    /// List attachments of a profile
    async fn list_attachments(
        &self,
        options: &ListAttachmentsOptions,
    ) -> Result<DetailedResponse<AttachmentCollection>> {
        invoke(self, options).await
    }

    fn attachments_pager(
        &self,
        options: ListAttachmentsOptions,
    ) -> Pager<'_, Self, ListAttachmentsOptions> {
        Pager::new(self, options)
    }

    async fn create_attachment(
        &self,
        options: &CreateAttachmentOptions,
    ) -> Result<DetailedResponse<AttachmentPrototype>> {
        invoke(self, options).await
    }

    async fn delete_profile_attachment(
        &self,
        options: &DeleteProfileAttachmentOptions,
    ) -> Result<DetailedResponse<AttachmentItem>> {
        invoke(self, options).await
    }

    async fn get_profile_attachment(
        &self,
        options: &GetProfileAttachmentOptions,
    ) -> Result<DetailedResponse<AttachmentItem>> {
        invoke(self, options).await
    }

    async fn replace_profile_attachment(
        &self,
        options: &ReplaceProfileAttachmentOptions,
    ) -> Result<DetailedResponse<AttachmentItem>> {
        invoke(self, options).await
    }

    /// Start an on-demand scan of an attachment
    async fn create_scan(&self, options: &CreateScanOptions) -> Result<DetailedResponse<Scan>> {
        invoke(self, options).await
    }

    /// List attachments across the whole account
    async fn list_attachments_account(
        &self,
        options: &ListAttachmentsAccountOptions,
    ) -> Result<DetailedResponse<AttachmentCollection>> {
        invoke(self, options).await
    }

    fn account_attachments_pager(
        &self,
        options: ListAttachmentsAccountOptions,
    ) -> Pager<'_, Self, ListAttachmentsAccountOptions> {
        Pager::new(self, options)
    }
}

impl<T: Transport + ?Sized> AttachmentApi for T {}
