//! Response decoding
//!
//! Every operation ends here: a successful response is turned into a
//! [`DetailedResponse`] and a failed one into an [`ApiError::Service`].

use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result, ServiceError};

/// HTTP response as received, before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Result of a successful operation.
///
/// `result` is `None` when the service answered 2xx without a body.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Consume the response, keeping only the decoded result.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Value of a response header, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Whether the declared content type is JSON (`application/json`,
    /// `application/problem+json`, ...).
    pub fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| {
                let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false)
    }

    /// Decode the body as JSON into `T`.
    ///
    /// Empty or non-JSON bodies leave the result absent.
    pub fn decode_json<T: DeserializeOwned>(self) -> Result<DetailedResponse<T>> {
        if self.body.is_empty() {
            return Ok(self.into_detailed(None));
        }
        if !self.is_json() {
            log::debug!(
                "Ignoring {} byte response body with content type {:?}",
                self.body.len(),
                self.content_type().unwrap_or("<none>")
            );
            return Ok(self.into_detailed(None));
        }

        match serde_json::from_slice::<T>(&self.body) {
            Ok(value) => Ok(self.into_detailed(Some(value))),
            Err(e) => {
                log::debug!("Failed to decode {} byte response body: {}", self.body.len(), e);
                Err(ApiError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                    response: Box::new(self),
                }
                .into())
            }
        }
    }

    /// Keep the body as raw bytes (used for CSV downloads).
    pub fn into_bytes(self) -> DetailedResponse<Vec<u8>> {
        let RawResponse {
            status_code,
            headers,
            body,
        } = self;
        let result = if body.is_empty() { None } else { Some(body) };
        DetailedResponse {
            status_code,
            headers,
            result,
        }
    }

    fn into_detailed<T>(self, result: Option<T>) -> DetailedResponse<T> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result,
        }
    }

    /// Build the error for a non-2xx response.
    pub(crate) fn into_service_error(self) -> ApiError {
        let payload = ErrorPayload::parse(&self.body);
        let message = payload
            .as_ref()
            .and_then(ErrorPayload::message)
            .unwrap_or_else(|| default_message(self.status_code));
        let code = payload.as_ref().and_then(ErrorPayload::code);
        let trace = payload.and_then(|p| p.trace);

        ApiError::Service(Box::new(ServiceError {
            status_code: self.status_code,
            message,
            code,
            trace,
            response: self,
        }))
    }
}

fn default_message(status_code: u16) -> String {
    reqwest::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown error")
        .to_string()
}

/// Error body returned by IBM Cloud services.
///
/// The canonical form is `{"errors":[{"code","message"}],"trace","status_code"}`
/// but older endpoints answer with a flat `error`/`message`/`errorMessage`.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
    #[serde(default)]
    trace: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorPayload {
    fn parse(body: &[u8]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        serde_json::from_slice(body).ok()
    }

    fn message(&self) -> Option<String> {
        if let Some(msg) = self.errors.first().and_then(|e| e.message.clone()) {
            return Some(msg);
        }
        match &self.error {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Object(obj)) => {
                if let Some(serde_json::Value::String(s)) = obj.get("message") {
                    return Some(s.clone());
                }
            }
            _ => {}
        }
        self.message.clone().or_else(|| self.error_message.clone())
    }

    fn code(&self) -> Option<String> {
        self.errors.first().and_then(|e| e.code.clone())
    }
}
