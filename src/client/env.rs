//! Client settings from environment variables
//!
//! Variables are named `<PREFIX>_<SUFFIX>`, where the prefix is the service
//! name upper-cased with `-` replaced by `_`, e.g.
//! `SECURITY_AND_COMPLIANCE_CENTER_API_URL`.

use std::sync::Arc;
use std::time::Duration;

use super::auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
use super::retry::RetryPolicy;
use crate::error::ConfigError;

pub const URL: &str = "URL";
pub const AUTH_TYPE: &str = "AUTH_TYPE";
pub const USERNAME: &str = "USERNAME";
pub const PASSWORD: &str = "PASSWORD";
pub const BEARER_TOKEN: &str = "BEARER_TOKEN";
pub const ENABLE_RETRIES: &str = "ENABLE_RETRIES";
pub const MAX_RETRIES: &str = "MAX_RETRIES";
pub const RETRY_INTERVAL: &str = "RETRY_INTERVAL";
pub const DISABLE_SSL: &str = "DISABLE_SSL";

/// Retry count used when retries are enabled without an explicit count
pub const DEFAULT_MAX_RETRIES: u32 = 4;
/// Base interval used when retries are enabled without an explicit interval
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Settings found in the environment. Every field is optional; the caller
/// decides what is mandatory.
#[derive(Debug, Default)]
pub struct EnvSettings {
    pub service_url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub retry: Option<RetryPolicy>,
    pub disable_ssl_verification: Option<bool>,
}

/// Variable prefix for a service name.
pub fn prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

/// Reads one group of settings at a time, so a setting the caller already
/// has is never parsed or validated.
pub struct EnvReader<F> {
    prefix: String,
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// `lookup` maps a full variable name to its value.
    pub fn new(service_name: &str, lookup: F) -> Self {
        Self {
            prefix: prefix(service_name),
            lookup,
        }
    }

    fn get(&self, suffix: &str) -> Option<String> {
        (self.lookup)(&format!("{}_{}", self.prefix, suffix)).filter(|v| !v.trim().is_empty())
    }

    fn var_name(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    pub fn service_url(&self) -> Option<String> {
        self.get(URL)
    }

    /// Authenticator from `AUTH_TYPE` and credentials. Without an explicit
    /// type, the type is inferred from whichever credentials are present.
    pub fn authenticator(&self) -> Result<Option<Arc<dyn Authenticator>>, ConfigError> {
        let auth_type = match self.get(AUTH_TYPE) {
            Some(v) => v.parse::<AuthType>()?,
            None if self.get(BEARER_TOKEN).is_some() => AuthType::BearerToken,
            None if self.get(USERNAME).is_some() || self.get(PASSWORD).is_some() => {
                AuthType::Basic
            }
            None => return Ok(None),
        };

        let authenticator: Arc<dyn Authenticator> = match auth_type {
            AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
            AuthType::Basic => Arc::new(BasicAuthenticator::new(
                self.get(USERNAME).unwrap_or_default(),
                self.get(PASSWORD).unwrap_or_default(),
            )),
            AuthType::BearerToken => Arc::new(BearerTokenAuthenticator::new(
                self.get(BEARER_TOKEN).unwrap_or_default(),
            )),
        };
        authenticator.validate()?;
        Ok(Some(authenticator))
    }

    /// Retry policy, `None` when `ENABLE_RETRIES` is unset.
    pub fn retry(&self) -> Result<Option<RetryPolicy>, ConfigError> {
        let Some(enabled) = self.get(ENABLE_RETRIES) else {
            return Ok(None);
        };
        if !parse_bool(&self.var_name(ENABLE_RETRIES), &enabled)? {
            return Ok(Some(RetryPolicy::disabled()));
        }

        let max_retries = match self.get(MAX_RETRIES) {
            Some(v) => v.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!("{} must be a number", self.var_name(MAX_RETRIES)))
            })?,
            None => DEFAULT_MAX_RETRIES,
        };
        let base_interval = match self.get(RETRY_INTERVAL) {
            Some(v) => Duration::from_secs(v.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be a number of seconds",
                    self.var_name(RETRY_INTERVAL)
                ))
            })?),
            None => DEFAULT_RETRY_INTERVAL,
        };
        Ok(Some(RetryPolicy::new(max_retries, base_interval)))
    }

    pub fn disable_ssl_verification(&self) -> Result<Option<bool>, ConfigError> {
        self.get(DISABLE_SSL)
            .map(|v| parse_bool(&self.var_name(DISABLE_SSL), &v))
            .transpose()
    }
}

/// Read every setting through `lookup`.
pub fn load<F>(service_name: &str, lookup: F) -> Result<EnvSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let reader = EnvReader::new(service_name, lookup);
    Ok(EnvSettings {
        service_url: reader.service_url(),
        authenticator: reader.authenticator()?,
        retry: reader.retry()?,
        disable_ssl_verification: reader.disable_ssl_verification()?,
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{} must be true or false, got '{}'",
            name, value
        ))),
    }
}
