//! Operation descriptors and request preparation
//!
//! Every API call is described by a static [`Operation`] (verb, URL template,
//! accepted media type) plus an options struct implementing
//! [`OperationRequest`], which supplies path/query/header/body values.
//! [`invoke`] is the single execution path shared by all of them.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Transport;
use super::response::DetailedResponse;
use crate::error::{ConfigError, Error, Result};

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

pub const JSON: &str = "application/json";
pub const MERGE_PATCH_JSON: &str = "application/merge-patch+json";
pub const CSV: &str = "application/csv";

/// Static description of one API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, used in logs
    pub id: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the service URL, e.g. `/profiles/{profile_id}`
    pub path: &'static str,
    /// Value of the `Accept` header
    pub accept: &'static str,
    /// Content type of the body, for operations that send one
    pub content_type: Option<&'static str>,
}

impl Operation {
    const fn new(id: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            accept: JSON,
            content_type: None,
        }
    }

    const fn with_body(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    const fn accepting(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    /// Names of the `{placeholders}` in the path template, in order.
    pub fn path_param_names(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }
}

use HttpMethod::{Delete, Get, Patch, Post, Put};

// Settings
pub const GET_SETTINGS: Operation = Operation::new("get_settings", Get, "/settings");
pub const UPDATE_SETTINGS: Operation =
    Operation::new("update_settings", Patch, "/settings").with_body(MERGE_PATCH_JSON);
pub const POST_TEST_EVENT: Operation = Operation::new("post_test_event", Post, "/test_event");

// Control libraries
pub const LIST_CONTROL_LIBRARIES: Operation =
    Operation::new("list_control_libraries", Get, "/control_libraries");
pub const CREATE_CUSTOM_CONTROL_LIBRARY: Operation =
    Operation::new("create_custom_control_library", Post, "/control_libraries").with_body(JSON);
pub const DELETE_CUSTOM_CONTROL_LIBRARY: Operation = Operation::new(
    "delete_custom_control_library",
    Delete,
    "/control_libraries/{control_libraries_id}",
);
pub const GET_CONTROL_LIBRARY: Operation = Operation::new(
    "get_control_library",
    Get,
    "/control_libraries/{control_libraries_id}",
);
pub const REPLACE_CUSTOM_CONTROL_LIBRARY: Operation = Operation::new(
    "replace_custom_control_library",
    Put,
    "/control_libraries/{control_libraries_id}",
)
.with_body(JSON);

// Profiles
pub const LIST_PROFILES: Operation = Operation::new("list_profiles", Get, "/profiles");
pub const CREATE_PROFILE: Operation =
    Operation::new("create_profile", Post, "/profiles").with_body(JSON);
pub const DELETE_CUSTOM_PROFILE: Operation =
    Operation::new("delete_custom_profile", Delete, "/profiles/{profile_id}");
pub const GET_PROFILE: Operation = Operation::new("get_profile", Get, "/profiles/{profile_id}");
pub const REPLACE_PROFILE: Operation =
    Operation::new("replace_profile", Put, "/profiles/{profile_id}").with_body(JSON);

// Rules
pub const LIST_RULES: Operation = Operation::new("list_rules", Get, "/rules");
pub const CREATE_RULE: Operation = Operation::new("create_rule", Post, "/rules").with_body(JSON);
pub const DELETE_RULE: Operation = Operation::new("delete_rule", Delete, "/rules/{rule_id}");
pub const GET_RULE: Operation = Operation::new("get_rule", Get, "/rules/{rule_id}");
pub const REPLACE_RULE: Operation =
    Operation::new("replace_rule", Put, "/rules/{rule_id}").with_body(JSON);

// Attachments and scans
pub const LIST_ATTACHMENTS: Operation = Operation::new(
    "list_attachments",
    Get,
    "/profiles/{profile_id}/attachments",
);
pub const CREATE_ATTACHMENT: Operation = Operation::new(
    "create_attachment",
    Post,
    "/profiles/{profile_id}/attachments",
)
.with_body(JSON);
pub const DELETE_PROFILE_ATTACHMENT: Operation = Operation::new(
    "delete_profile_attachment",
    Delete,
    "/profiles/{profile_id}/attachments/{attachment_id}",
);
pub const GET_PROFILE_ATTACHMENT: Operation = Operation::new(
    "get_profile_attachment",
    Get,
    "/profiles/{profile_id}/attachments/{attachment_id}",
);
pub const REPLACE_PROFILE_ATTACHMENT: Operation = Operation::new(
    "replace_profile_attachment",
    Put,
    "/profiles/{profile_id}/attachments/{attachment_id}",
)
.with_body(JSON);
pub const CREATE_SCAN: Operation = Operation::new("create_scan", Post, "/scans").with_body(JSON);
pub const LIST_ATTACHMENTS_ACCOUNT: Operation =
    Operation::new("list_attachments_account", Get, "/attachments");

// Reports
pub const GET_LATEST_REPORTS: Operation =
    Operation::new("get_latest_reports", Get, "/reports/latest");
pub const LIST_REPORTS: Operation = Operation::new("list_reports", Get, "/reports");
pub const GET_REPORT: Operation = Operation::new("get_report", Get, "/reports/{report_id}");
pub const GET_REPORT_SUMMARY: Operation =
    Operation::new("get_report_summary", Get, "/reports/{report_id}/summary");
pub const GET_REPORT_EVALUATION: Operation =
    Operation::new("get_report_evaluation", Get, "/reports/{report_id}/download").accepting(CSV);
pub const GET_REPORT_CONTROLS: Operation =
    Operation::new("get_report_controls", Get, "/reports/{report_id}/controls");
pub const GET_REPORT_RULE: Operation = Operation::new(
    "get_report_rule",
    Get,
    "/reports/{report_id}/rules/{rule_id}",
);
pub const LIST_REPORT_EVALUATIONS: Operation = Operation::new(
    "list_report_evaluations",
    Get,
    "/reports/{report_id}/evaluations",
);
pub const LIST_REPORT_RESOURCES: Operation = Operation::new(
    "list_report_resources",
    Get,
    "/reports/{report_id}/resources",
);
pub const GET_REPORT_TAGS: Operation =
    Operation::new("get_report_tags", Get, "/reports/{report_id}/tags");
pub const GET_REPORT_VIOLATIONS_DRIFT: Operation = Operation::new(
    "get_report_violations_drift",
    Get,
    "/reports/{report_id}/violations_drift",
);

// Provider types
pub const LIST_PROVIDER_TYPES: Operation =
    Operation::new("list_provider_types", Get, "/provider_types");
pub const GET_PROVIDER_TYPE_BY_ID: Operation = Operation::new(
    "get_provider_type_by_id",
    Get,
    "/provider_types/{provider_type_id}",
);
pub const LIST_PROVIDER_TYPE_INSTANCES: Operation = Operation::new(
    "list_provider_type_instances",
    Get,
    "/provider_types/{provider_type_id}/provider_type_instances",
);
pub const CREATE_PROVIDER_TYPE_INSTANCE: Operation = Operation::new(
    "create_provider_type_instance",
    Post,
    "/provider_types/{provider_type_id}/provider_type_instances",
)
.with_body(JSON);
pub const DELETE_PROVIDER_TYPE_INSTANCE: Operation = Operation::new(
    "delete_provider_type_instance",
    Delete,
    "/provider_types/{provider_type_id}/provider_type_instances/{provider_type_instance_id}",
);
pub const GET_PROVIDER_TYPE_INSTANCE: Operation = Operation::new(
    "get_provider_type_instance",
    Get,
    "/provider_types/{provider_type_id}/provider_type_instances/{provider_type_instance_id}",
);
pub const UPDATE_PROVIDER_TYPE_INSTANCE: Operation = Operation::new(
    "update_provider_type_instance",
    Patch,
    "/provider_types/{provider_type_id}/provider_type_instances/{provider_type_instance_id}",
)
.with_body(JSON);
pub const GET_PROVIDER_TYPES_INSTANCES: Operation =
    Operation::new("get_provider_types_instances", Get, "/provider_types_instances");

/// Every operation the client exposes.
pub const ALL_OPERATIONS: [Operation; 44] = [
    GET_SETTINGS,
    UPDATE_SETTINGS,
    POST_TEST_EVENT,
    LIST_CONTROL_LIBRARIES,
    CREATE_CUSTOM_CONTROL_LIBRARY,
    DELETE_CUSTOM_CONTROL_LIBRARY,
    GET_CONTROL_LIBRARY,
    REPLACE_CUSTOM_CONTROL_LIBRARY,
    LIST_PROFILES,
    CREATE_PROFILE,
    DELETE_CUSTOM_PROFILE,
    GET_PROFILE,
    REPLACE_PROFILE,
    LIST_RULES,
    CREATE_RULE,
    DELETE_RULE,
    GET_RULE,
    REPLACE_RULE,
    LIST_ATTACHMENTS,
    CREATE_ATTACHMENT,
    DELETE_PROFILE_ATTACHMENT,
    GET_PROFILE_ATTACHMENT,
    REPLACE_PROFILE_ATTACHMENT,
    CREATE_SCAN,
    LIST_ATTACHMENTS_ACCOUNT,
    GET_LATEST_REPORTS,
    LIST_REPORTS,
    GET_REPORT,
    GET_REPORT_SUMMARY,
    GET_REPORT_EVALUATION,
    GET_REPORT_CONTROLS,
    GET_REPORT_RULE,
    LIST_REPORT_EVALUATIONS,
    LIST_REPORT_RESOURCES,
    GET_REPORT_TAGS,
    GET_REPORT_VIOLATIONS_DRIFT,
    LIST_PROVIDER_TYPES,
    GET_PROVIDER_TYPE_BY_ID,
    LIST_PROVIDER_TYPE_INSTANCES,
    CREATE_PROVIDER_TYPE_INSTANCE,
    DELETE_PROVIDER_TYPE_INSTANCE,
    GET_PROVIDER_TYPE_INSTANCE,
    UPDATE_PROVIDER_TYPE_INSTANCE,
    GET_PROVIDER_TYPES_INSTANCES,
];

/// Tracing and custom headers every options struct carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Sent as `X-Correlation-ID`
    pub x_correlation_id: Option<String>,
    /// Sent as `X-Request-ID`
    pub x_request_id: Option<String>,
    /// Arbitrary headers, applied after all others
    pub custom: BTreeMap<String, String>,
}

/// A request ready for dispatch: path substituted, headers and body resolved.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub operation: Operation,
    /// Path template with placeholders replaced, each value percent-escaped
    pub path_segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    /// Operation headers in application order; custom headers come last
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl PreparedRequest {
    /// Join the prepared path onto the service URL.
    pub fn url(&self, service_url: &str) -> Result<Url> {
        let mut url = Url::parse(service_url)
            .map_err(|_| ConfigError::InvalidServiceUrl(service_url.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::InvalidServiceUrl(service_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(self.path_segments.iter());
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

/// Options struct for one operation.
pub trait OperationRequest: Send + Sync {
    /// Type the response body decodes into
    type Output;

    fn operation(&self) -> &'static Operation;

    fn request_headers(&self) -> &RequestHeaders;

    fn request_headers_mut(&mut self) -> &mut RequestHeaders;

    /// Check required fields. Runs before anything is sent.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Values for the path template placeholders
    fn path_params(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Operation-specific headers such as `If-Match`
    fn extra_headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        Ok(None)
    }

    /// Validate and resolve everything needed to send the request.
    fn prepare(&self) -> Result<PreparedRequest> {
        self.validate()?;

        let operation = *self.operation();
        let params = self.path_params();
        let path_segments = substitute_path(operation.path, &params)?;

        let common = self.request_headers();
        let mut headers = Vec::new();
        if let Some(id) = &common.x_correlation_id {
            headers.push(("X-Correlation-ID".to_string(), id.clone()));
        }
        if let Some(id) = &common.x_request_id {
            headers.push(("X-Request-ID".to_string(), id.clone()));
        }
        for (name, value) in self.extra_headers() {
            headers.push((name.to_string(), value));
        }
        for (name, value) in &common.custom {
            headers.push((name.clone(), value.clone()));
        }

        Ok(PreparedRequest {
            operation,
            path_segments,
            query: self.query_params(),
            headers,
            body: self.body()?,
        })
    }
}

/// Fluent setters for the headers shared by all options structs.
pub trait HeaderOptions: OperationRequest + Sized {
    fn x_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.request_headers_mut().x_correlation_id = Some(id.into());
        self
    }

    fn x_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_headers_mut().x_request_id = Some(id.into());
        self
    }

    /// Add a custom header. Custom headers override any header the operation sets.
    fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers_mut()
            .custom
            .insert(name.into(), value.into());
        self
    }

    /// Replace all custom headers.
    fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.request_headers_mut().custom = headers;
        self
    }
}

impl<T: OperationRequest + Sized> HeaderOptions for T {}

/// Execute an operation whose response is JSON.
pub async fn invoke<T, O>(transport: &T, options: &O) -> Result<DetailedResponse<O::Output>>
where
    T: Transport + ?Sized,
    O: OperationRequest,
    O::Output: DeserializeOwned,
{
    let request = options.prepare()?;
    let raw = transport.send(request).await?;
    raw.decode_json()
}

/// Execute an operation whose response body is returned verbatim.
pub async fn invoke_bytes<T, O>(transport: &T, options: &O) -> Result<DetailedResponse<Vec<u8>>>
where
    T: Transport + ?Sized,
    O: OperationRequest,
{
    let request = options.prepare()?;
    let raw = transport.send(request).await?;
    Ok(raw.into_bytes())
}

/// Fail validation when a required string field is empty.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Serialize the body field set of an options struct.
pub fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Option<serde_json::Value>> {
    Ok(Some(serde_json::to_value(body)?))
}

fn substitute_path(template: &str, params: &[(&'static str, &str)]) -> Result<Vec<String>> {
    template
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
                    .ok_or_else(|| {
                        Error::Validation(format!("missing path parameter '{}'", name))
                    }),
                None => Ok(segment.to_string()),
            }
        })
        .collect()
}

/// Push an optional query value.
pub(crate) fn push_query<V: ToString>(
    query: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: &Option<V>,
) {
    if let Some(v) = value {
        query.push((name, v.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Default)]
    struct TestOptions {
        profile_id: String,
        attachment_id: String,
        limit: Option<i64>,
        headers: RequestHeaders,
    }

    impl OperationRequest for TestOptions {
        type Output = serde_json::Value;

        fn operation(&self) -> &'static Operation {
            &GET_PROFILE_ATTACHMENT
        }

        fn request_headers(&self) -> &RequestHeaders {
            &self.headers
        }

        fn request_headers_mut(&mut self) -> &mut RequestHeaders {
            &mut self.headers
        }

        fn validate(&self) -> Result<()> {
            require("profile_id", &self.profile_id)?;
            require("attachment_id", &self.attachment_id)
        }

        fn path_params(&self) -> Vec<(&'static str, &str)> {
            vec![
                ("profile_id", self.profile_id.as_str()),
                ("attachment_id", self.attachment_id.as_str()),
            ]
        }

        fn query_params(&self) -> Vec<(&'static str, String)> {
            let mut query = Vec::new();
            push_query(&mut query, "limit", &self.limit);
            query
        }
    }

    #[test]
    fn test_operation_ids_are_unique() {
        let ids: HashSet<_> = ALL_OPERATIONS.iter().map(|op| op.id).collect();
        assert_eq!(ids.len(), ALL_OPERATIONS.len());
    }

    #[test]
    fn test_body_operations_use_body_verbs() {
        for op in ALL_OPERATIONS {
            if op.content_type.is_some() {
                assert!(
                    matches!(op.method, Post | Put | Patch),
                    "{} sends a body with {}",
                    op.id,
                    op.method
                );
            }
        }
    }

    #[test]
    fn test_path_param_names() {
        assert_eq!(
            REPLACE_PROFILE_ATTACHMENT.path_param_names(),
            vec!["profile_id", "attachment_id"]
        );
        assert!(LIST_PROFILES.path_param_names().is_empty());
    }

    #[test]
    fn test_prepare_substitutes_and_escapes_path() {
        let options = TestOptions {
            profile_id: "p/1 2".to_string(),
            attachment_id: "a-1".to_string(),
            ..Default::default()
        };
        let request = options.prepare().unwrap();
        let url = request.url("https://example.com/api/v3").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/api/v3/profiles/p%2F1%202/attachments/a-1"
        );
    }

    #[test]
    fn test_prepare_handles_trailing_slash_in_service_url() {
        let options = TestOptions {
            profile_id: "p1".to_string(),
            attachment_id: "a1".to_string(),
            limit: Some(10),
            ..Default::default()
        };
        let url = options.prepare().unwrap().url("https://example.com/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/profiles/p1/attachments/a1?limit=10"
        );
    }

    #[test]
    fn test_prepare_rejects_empty_required_field() {
        let options = TestOptions {
            profile_id: "p1".to_string(),
            ..Default::default()
        };
        match options.prepare() {
            Err(Error::Validation(msg)) => assert!(msg.contains("attachment_id")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_headers_applied_last() {
        let options = TestOptions {
            profile_id: "p1".to_string(),
            attachment_id: "a1".to_string(),
            ..Default::default()
        }
        .x_correlation_id("corr")
        .x_request_id("req")
        .header("X-Correlation-ID", "override");

        let request = options.prepare().unwrap();
        let names: Vec<_> = request.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["X-Correlation-ID", "X-Request-ID", "X-Correlation-ID"]);
        assert_eq!(request.headers.last().unwrap().1, "override");
    }

    #[test]
    fn test_invalid_service_url() {
        let options = TestOptions {
            profile_id: "p1".to_string(),
            attachment_id: "a1".to_string(),
            ..Default::default()
        };
        let request = options.prepare().unwrap();
        assert!(matches!(
            request.url("not a url"),
            Err(Error::Config(ConfigError::InvalidServiceUrl(_)))
        ));
    }
}
