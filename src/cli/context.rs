//! Command execution context
//!
//! Loads configuration, resolves client options and builds the API client
//! once per command.

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{OutputFormat, PaginationArgs};
use crate::client::{ClientOptions, SecurityComplianceClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Configured API client
    pub client: SecurityComplianceClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error when the config file cannot be parsed, when no
    /// credentials are configured anywhere, or when the resolved settings are
    /// invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let options = resolve_client_options(opts, &config)?;

        if options.authenticator.is_none() {
            return Err(ConfigError::InvalidAuth(
                "no credentials configured. Run `sccop init` or set the \
                 SECURITY_AND_COMPLIANCE_CENTER_API_* environment variables"
                    .to_string(),
            )
            .into());
        }

        let client = SecurityComplianceClient::new(options)?;
        debug!("Using service URL {}", client.service_url());

        let format = opts.resolve_format(config.preferences.format.as_deref());

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Page size for list requests: `--limit`, else the configured size.
    pub fn page_size(&self, pagination: &PaginationArgs) -> i64 {
        pagination.page_size(self.config.preferences.page_size)
    }
}

/// Client options from flags, then the process environment, then `config`.
pub fn resolve_client_options(opts: &GlobalOptions, config: &Config) -> Result<ClientOptions> {
    resolve_with_lookup(opts, config, |key| std::env::var(key).ok())
}

fn resolve_with_lookup<F>(opts: &GlobalOptions, config: &Config, lookup: F) -> Result<ClientOptions>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = ClientOptions::new();
    if let Some(url) = opts.service_url_ref() {
        options = options.service_url(url);
    }
    let options = options.with_env_fallback(lookup)?;
    config.fill_client_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AuthType;
    use crate::config::AuthConfig;
    use std::collections::HashMap;

    fn file_config() -> Config {
        Config {
            service_url: Some("https://file.example.com".to_string()),
            auth: AuthConfig {
                auth_type: Some(AuthType::Basic),
                username: Some("file-user".to_string()),
                password: Some("file-pass".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_flag_beats_environment_and_file() {
        let opts = GlobalOptions {
            service_url: Some("https://flag.example.com".to_string()),
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([(
            "SECURITY_AND_COMPLIANCE_CENTER_API_URL",
            "https://env.example.com",
        )]);

        let options = resolve_with_lookup(&opts, &file_config(), |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(
            options.service_url.as_deref(),
            Some("https://flag.example.com")
        );
    }

    #[test]
    fn test_environment_beats_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SECURITY_AND_COMPLIANCE_CENTER_API_URL", "https://env.example.com"),
            ("SECURITY_AND_COMPLIANCE_CENTER_API_AUTH_TYPE", "noauth"),
        ]);

        let options = resolve_with_lookup(&GlobalOptions::default(), &file_config(), |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(
            options.service_url.as_deref(),
            Some("https://env.example.com")
        );
        assert_eq!(
            options.authenticator.as_ref().unwrap().auth_type(),
            AuthType::NoAuth
        );
    }

    #[test]
    fn test_file_used_when_nothing_else_set() {
        let options =
            resolve_with_lookup(&GlobalOptions::default(), &file_config(), |_| None).unwrap();
        assert_eq!(
            options.service_url.as_deref(),
            Some("https://file.example.com")
        );
        assert_eq!(
            options.authenticator.as_ref().unwrap().auth_type(),
            AuthType::Basic
        );
    }
}
