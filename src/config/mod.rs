//! Configuration management for the sccop CLI
//!
//! The config file only fills what neither a CLI flag nor the environment
//! provided. See [`Config::fill_client_options`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::client::env::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL};
use crate::client::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, ClientOptions,
    NoAuthAuthenticator, RetryPolicy,
};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Service endpoint, e.g. `https://us-south.compliance.cloud.ibm.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub retries: RetryConfig,

    /// Skip TLS certificate verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Credentials used to build the request authenticator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,

    /// Base interval in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Page size for list commands
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_size() -> i64 {
    crate::client::pagination::DEFAULT_PAGE_LIMIT
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
        }
    }
}

impl AuthConfig {
    /// Authenticator described by these settings, `None` when no type is set
    /// and no credential is present.
    pub fn authenticator(&self) -> std::result::Result<Option<Arc<dyn Authenticator>>, ConfigError> {
        let auth_type = match self.auth_type {
            Some(t) => t,
            None if self.bearer_token.is_some() => AuthType::BearerToken,
            None if self.username.is_some() || self.password.is_some() => AuthType::Basic,
            None => return Ok(None),
        };

        let authenticator: Arc<dyn Authenticator> = match auth_type {
            AuthType::NoAuth => Arc::new(NoAuthAuthenticator),
            AuthType::Basic => Arc::new(BasicAuthenticator::new(
                self.username.clone().unwrap_or_default(),
                self.password.clone().unwrap_or_default(),
            )),
            AuthType::BearerToken => Arc::new(BearerTokenAuthenticator::new(
                self.bearer_token.clone().unwrap_or_default(),
            )),
        };
        authenticator.validate()?;
        Ok(Some(authenticator))
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        if !self.enabled {
            return RetryPolicy::disabled();
        }
        RetryPolicy::new(
            self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            self.interval_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_RETRY_INTERVAL),
        )
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".sccop").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default location.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Like [`Config::load_at`], but a missing file yields the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to `path`, or the default location.
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials live here; owner read/write only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Fill whatever `options` leaves unset from this file.
    ///
    /// Callers apply flags and the environment first, so the file sits below
    /// both in precedence.
    pub fn fill_client_options(&self, mut options: ClientOptions) -> Result<ClientOptions> {
        if options.service_url.is_none() {
            options.service_url = self.service_url.clone();
        }
        if options.authenticator.is_none() {
            options.authenticator = self.auth.authenticator()?;
        }
        if options.retry.is_none() && self.retries.enabled {
            options.retry = Some(self.retries.policy());
        }
        if options.disable_ssl_verification.is_none() {
            options.disable_ssl_verification = self.disable_ssl;
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.service_url.is_none());
        assert!(config.auth.auth_type.is_none());
        assert!(!config.retries.enabled);
        assert_eq!(config.preferences.page_size, 50);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            service_url: Some("https://eu-de.compliance.cloud.ibm.com".to_string()),
            auth: AuthConfig {
                auth_type: Some(AuthType::BearerToken),
                bearer_token: Some("token".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path.clone()).unwrap();
        assert_eq!(loaded, config);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = Config::load_from(path.clone()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::NotFound)
        ));

        let config = Config::load_or_default(path.to_str()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_auth_type_inferred_from_credentials() {
        let auth = AuthConfig {
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Default::default()
        };
        let authenticator = auth.authenticator().unwrap().unwrap();
        assert_eq!(authenticator.auth_type(), AuthType::Basic);

        assert!(AuthConfig::default().authenticator().unwrap().is_none());
    }

    #[test]
    fn test_invalid_credentials_rejected() {
        let auth = AuthConfig {
            auth_type: Some(AuthType::BearerToken),
            ..Default::default()
        };
        assert!(matches!(
            auth.authenticator(),
            Err(ConfigError::InvalidAuth(_))
        ));
    }

    #[test]
    fn test_file_fills_only_unset_options() {
        let config = Config {
            service_url: Some("https://file.example.com".to_string()),
            auth: AuthConfig {
                auth_type: Some(AuthType::NoAuth),
                ..Default::default()
            },
            retries: RetryConfig {
                enabled: true,
                max_retries: Some(2),
                interval_secs: Some(3),
            },
            ..Default::default()
        };

        let options = config
            .fill_client_options(ClientOptions::new().service_url("https://flag.example.com"))
            .unwrap();
        assert_eq!(
            options.service_url.as_deref(),
            Some("https://flag.example.com")
        );
        assert_eq!(
            options.authenticator.as_ref().unwrap().auth_type(),
            AuthType::NoAuth
        );
        assert_eq!(
            options.retry,
            Some(RetryPolicy::new(2, Duration::from_secs(3)))
        );
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
service_url: https://us-south.compliance.cloud.ibm.com
auth:
  type: basic
  username: admin
  password: secret
retries:
  enabled: true
preferences:
  format: json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.auth.auth_type, Some(AuthType::Basic));
        assert_eq!(
            config.retries.policy(),
            RetryPolicy::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL)
        );
        assert_eq!(config.preferences.format.as_deref(), Some("json"));
        assert_eq!(config.preferences.page_size, 50);
    }
}
