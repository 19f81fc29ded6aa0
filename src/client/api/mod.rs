//! API trait definitions split by resource
//!
//! Every method is provided: it hands its options to the shared invoker.
//! Each trait is implemented for any [`Transport`](super::Transport), so a
//! [`SecurityComplianceClient`](super::SecurityComplianceClient) and a
//! deadline-bound view of it expose the same operations.
//!
//! The [`SecurityComplianceApi`](super::SecurityComplianceApi) super-trait
//! combines them all.

mod attachment;
mod control_library;
mod profile;
mod provider_type;
mod report;
mod rule;
mod settings;

pub use attachment::AttachmentApi;
pub use control_library::ControlLibraryApi;
pub use profile::ProfileApi;
pub use provider_type::ProviderTypeApi;
pub use report::ReportApi;
pub use rule::RuleApi;
pub use settings::SettingsApi;
