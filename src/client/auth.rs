//! Request authenticators
//!
//! The client never acquires tokens itself. An [`Authenticator`] is handed a
//! request's headers right before dispatch and adds whatever credentials it
//! owns. Custom strategies (for example an IAM token exchanger) implement the
//! same trait.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ConfigError, Result};

/// Supported authentication schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[serde(rename = "noauth")]
    NoAuth,
    Basic,
    #[serde(rename = "bearertoken", alias = "bearerToken")]
    BearerToken,
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthType::NoAuth => write!(f, "noauth"),
            AuthType::Basic => write!(f, "basic"),
            AuthType::BearerToken => write!(f, "bearerToken"),
        }
    }
}

impl FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noauth" | "none" => Ok(AuthType::NoAuth),
            "basic" => Ok(AuthType::Basic),
            "bearertoken" | "bearer" => Ok(AuthType::BearerToken),
            other => Err(ConfigError::InvalidAuth(format!(
                "unsupported authentication type '{}'",
                other
            ))),
        }
    }
}

/// Strategy that injects credentials into outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Scheme implemented by this authenticator.
    fn auth_type(&self) -> AuthType;

    /// Check the configuration once, at client construction.
    fn validate(&self) -> std::result::Result<(), ConfigError>;

    /// Add credentials to the request headers.
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::NoAuth
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        Ok(())
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }
}

/// HTTP basic authentication
#[derive(Clone)]
pub struct BasicAuthenticator {
    pub username: String,
    pub password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(username:password)>`
    pub fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", general_purpose::STANDARD.encode(credentials))
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::Basic
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_credential("username", &self.username)?;
        check_credential("password", &self.password)
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        insert_authorization(headers, &self.header_value())
    }
}

/// Static bearer token
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    pub bearer_token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    /// Replace the token, e.g. after the caller refreshed it.
    pub fn set_bearer_token(&mut self, bearer_token: impl Into<String>) {
        self.bearer_token = bearer_token.into();
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"***")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn auth_type(&self) -> AuthType {
        AuthType::BearerToken
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.bearer_token.trim().is_empty() {
            return Err(ConfigError::InvalidAuth(
                "bearer token must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        insert_authorization(headers, &format!("Bearer {}", self.bearer_token))
    }
}

/// Credentials pasted with surrounding braces or quotes are almost always a
/// copy/paste mistake, so they are rejected along with empty values.
fn check_credential(name: &str, value: &str) -> std::result::Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidAuth(format!("{} must not be empty", name)));
    }
    let wrapped = (value.starts_with('{') && value.ends_with('}'))
        || (value.starts_with('"') && value.ends_with('"'));
    if wrapped {
        return Err(ConfigError::InvalidAuth(format!(
            "{} must not start and end with braces or quotes",
            name
        )));
    }
    Ok(())
}

fn insert_authorization(headers: &mut HeaderMap, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| ApiError::Authentication(format!("invalid Authorization header: {}", e)))?;
    headers.insert(AUTHORIZATION, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_parsing() {
        assert_eq!("noauth".parse::<AuthType>().unwrap(), AuthType::NoAuth);
        assert_eq!("BASIC".parse::<AuthType>().unwrap(), AuthType::Basic);
        assert_eq!(
            "bearerToken".parse::<AuthType>().unwrap(),
            AuthType::BearerToken
        );
        assert!("iam".parse::<AuthType>().is_err());
    }

    #[test]
    fn test_basic_header_value() {
        let auth = BasicAuthenticator::new("user", "pass");
        assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_validation() {
        assert!(BasicAuthenticator::new("user", "pass").validate().is_ok());
        assert!(BasicAuthenticator::new("", "pass").validate().is_err());
        assert!(BasicAuthenticator::new("user", "").validate().is_err());
        assert!(BasicAuthenticator::new("{user}", "pass").validate().is_err());
        assert!(BasicAuthenticator::new("user", "\"pass\"").validate().is_err());
    }

    #[test]
    fn test_bearer_validation() {
        assert!(BearerTokenAuthenticator::new("token").validate().is_ok());
        assert!(BearerTokenAuthenticator::new("  ").validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let auth = BasicAuthenticator::new("user", "secret-pass");
        assert!(!format!("{:?}", auth).contains("secret-pass"));

        let auth = BearerTokenAuthenticator::new("secret-token");
        assert!(!format!("{:?}", auth).contains("secret-token"));
    }

    #[tokio::test]
    async fn test_bearer_authenticate_sets_header() {
        let mut auth = BearerTokenAuthenticator::new("abc");
        auth.set_bearer_token("xyz");

        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer xyz");
    }

    #[tokio::test]
    async fn test_noauth_adds_nothing() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).await.unwrap();
        assert!(headers.is_empty());
    }
}
