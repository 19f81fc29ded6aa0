//! Security and Compliance Center API client
//!
//! Every operation follows the same pipeline: an options struct describes
//! the request, [`operation::invoke`] turns it into a [`PreparedRequest`] and
//! hands it to a [`Transport`], and the raw response is decoded into a
//! [`DetailedResponse`].

use async_trait::async_trait;

use crate::error::Result;

pub mod api;
pub mod auth;
pub mod env;
pub mod models;
pub mod operation;
pub mod options;
pub mod pagination;
pub mod response;
pub mod retry;
pub mod service;

pub use api::{
    AttachmentApi, ControlLibraryApi, ProfileApi, ProviderTypeApi, ReportApi, RuleApi,
    SettingsApi,
};
pub use auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use operation::{HeaderOptions, OperationRequest, PreparedRequest};
pub use pagination::Pager;
pub use response::{DetailedResponse, RawResponse};
pub use retry::RetryPolicy;
pub use service::{
    ClientOptions, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, SecurityComplianceClient,
    WithDeadline,
};

/// Sends prepared requests and returns the raw response.
///
/// Implemented by [`SecurityComplianceClient`] and by the deadline-bound view
/// returned from [`SecurityComplianceClient::with_deadline`]. A 2xx response
/// is `Ok`; anything else is an error carrying the response when one was
/// received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse>;
}

/// All Security and Compliance Center operations
pub trait SecurityComplianceApi:
    SettingsApi + ControlLibraryApi + ProfileApi + RuleApi + AttachmentApi + ReportApi + ProviderTypeApi
{
}

impl<T> SecurityComplianceApi for T where
    T: SettingsApi
        + ControlLibraryApi
        + ProfileApi
        + RuleApi
        + AttachmentApi
        + ReportApi
        + ProviderTypeApi
        + ?Sized
{
}
