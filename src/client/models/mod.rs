//! Security and Compliance Center data models
//!
//! Every struct mirrors a JSON schema of the API (snake_case on the wire).
//! Fields the service may omit are `Option`s and are left out when
//! serializing, so the same types serve as request bodies.

mod attachment;
mod control_library;
mod profile;
mod provider_type;
mod report;
mod rule;
mod scan;
mod settings;

pub use attachment::{
    AttachmentCollection, AttachmentItem, AttachmentParameterPrototype, AttachmentPrototype,
    AttachmentsNotificationsPrototype, AttachmentsPrototype, FailedControls, LastScan,
    MultiCloudScope, PropertyItem, attachment_status, schedule,
};
pub use control_library::{
    ControlDocs, ControlLibrary, ControlLibraryCollection, ControlLibraryDelete,
    ControlLibraryItem, ControlSpecifications, ControlsInControlLib, Implementation,
    ParameterInfo, control_library_type,
};
pub use profile::{
    DefaultParametersPrototype, Profile, ProfileCollection, ProfileControls,
    ProfileControlsPrototype, ProfileItem, profile_type,
};
pub use provider_type::{
    LabelType, ProviderTypeInstanceItem, ProviderTypeInstancesResponse, ProviderTypeItem,
    ProviderTypesCollection, ProviderTypesInstancesResponse,
};
pub use report::{
    Account, Assessment, AssessmentWithStats, Attachment, AttachmentScope, ComplianceScore,
    ComplianceStats, ControlSpecificationWithStats, ControlWithStats, EvalDetails, EvalStats,
    Evaluation, EvaluationPage, ProfileInfo, Property, Report, ReportControls, ReportLatest,
    ReportPage, ReportSummary, ReportTags, ReportViolationDataPoint, ReportViolationsDrift,
    Resource, ResourcePage, ResourceSummary, ResourceSummaryItem, RuleInfo, Tags, TargetInfo,
    compliance_status,
};
pub use rule::{
    AdditionalTargetAttribute, Import, RequiredConfig, Rule, RuleParameter, RulesPageBase,
    Target, rule_type,
};
pub use scan::Scan;
pub use settings::{EventNotifications, ObjectStorage, Settings, TestEvent};
