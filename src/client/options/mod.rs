//! Per-operation options
//!
//! Each operation has one options struct. Required path and body values are
//! constructor arguments; everything else is an `Option` set through a
//! fluent setter. Fields are public so values can be read back as set.
//!
//! ```ignore
//! let options = ListControlLibrariesOptions::new()
//!     .limit(50)
//!     .control_library_type("custom")
//!     .x_correlation_id("1a2b3c4d");
//! ```

/// Accessors for the `headers` field every options struct carries.
macro_rules! request_headers {
    () => {
        fn request_headers(&self) -> &$crate::client::operation::RequestHeaders {
            &self.headers
        }

        fn request_headers_mut(&mut self) -> &mut $crate::client::operation::RequestHeaders {
            &mut self.headers
        }
    };
}

mod attachment;
mod control_library;
mod profile;
mod provider_type;
mod report;
mod rule;
mod settings;

pub use attachment::{
    CreateAttachmentOptions, CreateScanOptions, DeleteProfileAttachmentOptions,
    GetProfileAttachmentOptions, ListAttachmentsAccountOptions, ListAttachmentsOptions,
    ReplaceProfileAttachmentOptions,
};
pub use control_library::{
    CreateCustomControlLibraryOptions, DeleteCustomControlLibraryOptions,
    GetControlLibraryOptions, ListControlLibrariesOptions, ReplaceCustomControlLibraryOptions,
};
pub use profile::{
    CreateProfileOptions, DeleteCustomProfileOptions, GetProfileOptions, ListProfilesOptions,
    ReplaceProfileOptions,
};
pub use provider_type::{
    CreateProviderTypeInstanceOptions, DeleteProviderTypeInstanceOptions,
    GetProviderTypeByIdOptions, GetProviderTypeInstanceOptions, GetProviderTypesInstancesOptions,
    ListProviderTypeInstancesOptions, ListProviderTypesOptions,
    UpdateProviderTypeInstanceOptions,
};
pub use report::{
    GetLatestReportsOptions, GetReportControlsOptions, GetReportEvaluationOptions,
    GetReportOptions, GetReportRuleOptions, GetReportSummaryOptions, GetReportTagsOptions,
    GetReportViolationsDriftOptions, ListReportEvaluationsOptions, ListReportResourcesOptions,
    ListReportsOptions,
};
pub use rule::{
    CreateRuleOptions, DeleteRuleOptions, GetRuleOptions, ListRulesOptions, ReplaceRuleOptions,
};
pub use settings::{GetSettingsOptions, PostTestEventOptions, UpdateSettingsOptions};
