//! Security and Compliance Center API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::Transport;
use super::auth::Authenticator;
use super::env;
use super::operation::PreparedRequest;
use super::response::RawResponse;
use super::retry::RetryPolicy;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://us-south.compliance.cloud.ibm.com";

/// Default service name, also the environment variable prefix
pub const DEFAULT_SERVICE_NAME: &str = "security_and_compliance_center_api";

/// Default per-request transport timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for constructing a [`SecurityComplianceClient`].
///
/// Fields left as `None` fall back to the environment (with
/// [`SecurityComplianceClient::new_from_env`]) and then to defaults.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub service_name: String,
    pub service_url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub retry: Option<RetryPolicy>,
    pub timeout: Duration,
    pub disable_ssl_verification: Option<bool>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_url: None,
            authenticator: None,
            retry: None,
            timeout: DEFAULT_TIMEOUT,
            disable_ssl_verification: None,
        }
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    pub fn shared_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = Some(disable);
        self
    }

    /// Fill unset fields from the environment. Explicit values always win,
    /// and the variables behind an explicit value are not read at all.
    pub fn with_env_fallback<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = env::EnvReader::new(&self.service_name, lookup);
        if self.service_url.is_none() {
            self.service_url = env.service_url();
        }
        if self.authenticator.is_none() {
            self.authenticator = env.authenticator()?;
        }
        if self.retry.is_none() {
            self.retry = env.retry()?;
        }
        if self.disable_ssl_verification.is_none() {
            self.disable_ssl_verification = env.disable_ssl_verification()?;
        }
        Ok(self)
    }
}

/// Security and Compliance Center API client
///
/// Cheap to share behind an `Arc`; all operations take `&self` and can run
/// concurrently. Configuration setters take `&mut self`, so they cannot race
/// in-flight calls.
#[derive(Debug, Clone)]
pub struct SecurityComplianceClient {
    http: HttpClient,
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    retry: RetryPolicy,
    default_headers: HeaderMap,
}

impl SecurityComplianceClient {
    /// Create a client from explicit options.
    ///
    /// An authenticator is required. A missing service URL falls back to
    /// [`DEFAULT_SERVICE_URL`]; an empty or unparseable one is an error.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let authenticator = options.authenticator.ok_or_else(|| {
            ConfigError::InvalidAuth("no authenticator configured".to_string())
        })?;
        authenticator.validate()?;

        let service_url = options
            .service_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        validate_service_url(&service_url)?;

        let http = HttpClient::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.disable_ssl_verification.unwrap_or(false))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            service_url,
            authenticator,
            retry: options.retry.unwrap_or_default(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Create a client, filling anything `options` leaves unset from the
    /// process environment.
    pub fn new_from_env(options: ClientOptions) -> Result<Self> {
        Self::new(options.with_env_fallback(|key| std::env::var(key).ok())?)
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Change the service URL. An empty URL is accepted here and rejected on
    /// the next call.
    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.service_url = url.into();
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Retry transient failures up to `max_retries` times, starting at
    /// `base_interval` and doubling. `max_retries == 0` disables retries.
    pub fn enable_retries(&mut self, max_retries: u32, base_interval: Duration) {
        self.retry = RetryPolicy::new(max_retries, base_interval);
    }

    pub fn disable_retries(&mut self) {
        self.retry = RetryPolicy::disabled();
    }

    /// Headers sent with every request, before operation headers.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// View of this client whose calls fail with
    /// [`ApiError::DeadlineExceeded`] once `timeout` elapses.
    pub fn with_deadline(&self, timeout: Duration) -> WithDeadline<'_> {
        WithDeadline {
            client: self,
            timeout,
        }
    }

    async fn build_headers(&self, request: &PreparedRequest) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("sccop/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(request.operation.accept));
        if request.body.is_some() {
            if let Some(content_type) = request.operation.content_type {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            }
        }
        for (name, value) in &self.default_headers {
            headers.insert(name.clone(), value.clone());
        }
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Validation(format!("invalid header name '{}'", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::Validation(format!("invalid value for header '{}'", name)))?;
            headers.insert(name, value);
        }
        self.authenticator.authenticate(&mut headers).await?;
        Ok(headers)
    }
}

#[async_trait]
impl Transport for SecurityComplianceClient {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse> {
        if self.service_url.is_empty() {
            return Err(ConfigError::MissingServiceUrl.into());
        }
        let url = request.url(&self.service_url)?;
        let headers = self.build_headers(&request).await?;
        let body = request.body.as_ref().map(serde_json::to_vec).transpose()?;
        let method = request.operation.method;

        let mut attempt = 0;
        loop {
            debug!(
                "{} {} {} (attempt {})",
                request.operation.id,
                method,
                url,
                attempt + 1
            );

            let mut builder = self
                .http
                .request(method.to_reqwest(), url.clone())
                .headers(headers.clone());
            if let Some(ref body) = body {
                builder = builder.body(body.clone());
            }

            match builder.send().await {
                Ok(response) => {
                    let raw = read_response(response).await?;
                    if raw.is_success() {
                        return Ok(raw);
                    }
                    if RetryPolicy::is_retryable_status(raw.status_code)
                        && self.retry.allows(attempt)
                    {
                        let delay = self.retry.delay(attempt, Some(&raw.headers));
                        debug!(
                            "{} returned {}, retrying in {:?}",
                            request.operation.id, raw.status_code, delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(raw.into_service_error().into());
                }
                Err(err) => {
                    if RetryPolicy::is_retryable_error(&err) && self.retry.allows(attempt) {
                        let delay = self.retry.delay(attempt, None);
                        debug!(
                            "{} failed ({}), retrying in {:?}",
                            request.operation.id, err, delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(ApiError::from(err).into());
                }
            }
        }
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;
    Ok(RawResponse {
        status_code,
        headers,
        body: body.to_vec(),
    })
}

fn validate_service_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ConfigError::MissingServiceUrl.into());
    }
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidServiceUrl(url.to_string()).into()),
    }
}

/// A client view with a deadline applied to each call.
///
/// Created by [`SecurityComplianceClient::with_deadline`]. The deadline
/// covers the whole call, retries and backoff included.
#[derive(Debug, Clone, Copy)]
pub struct WithDeadline<'a> {
    client: &'a SecurityComplianceClient,
    timeout: Duration,
}

#[async_trait]
impl Transport for WithDeadline<'_> {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse> {
        match tokio::time::timeout(self.timeout, self.client.send(request)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("Request cancelled after {:?}", self.timeout);
                Err(ApiError::DeadlineExceeded(self.timeout).into())
            }
        }
    }
}
