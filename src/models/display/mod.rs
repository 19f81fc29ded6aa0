//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod attachment;
mod common;
mod control_library;
mod field;
mod profile;
mod provider_type;
mod report;
mod rule;
mod settings;

pub use attachment::{AttachmentDisplay, ScanDisplay};
pub use control_library::ControlLibraryDisplay;
pub use field::FieldDisplay;
pub use profile::ProfileDisplay;
pub use provider_type::{ProviderTypeDisplay, ProviderTypeInstanceDisplay};
pub use report::{ReportControlDisplay, ReportDisplay, summary_fields};
pub use rule::RuleDisplay;
pub use settings::settings_fields;
