//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the flag/env layer clap resolves; the config file is applied in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, `None` when neither flag nor `SCCOP_FORMAT` was given
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.sccop/config.yaml)
    pub config: Option<String>,

    /// Service URL override
    pub service_url: Option<String>,

    pub debug: bool,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            service_url: cli.service_url.clone(),
            debug: cli.debug,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get service URL override as `Option<&str>`.
    pub fn service_url_ref(&self) -> Option<&str> {
        self.service_url.as_deref()
    }

    /// Output format, falling back to the config preference and then to tables.
    pub fn resolve_format(&self, preference: Option<&str>) -> OutputFormat {
        self.format
            .or_else(|| preference.and_then(|p| p.parse().ok()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/path".to_string()),
            service_url: Some("http://localhost:8080".to_string()),
            debug: true,
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.service_url_ref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_format_precedence() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Table),
            ..Default::default()
        };
        assert_eq!(opts.resolve_format(Some("json")), OutputFormat::Table);

        let opts = GlobalOptions::default();
        assert_eq!(opts.resolve_format(Some("json")), OutputFormat::Json);
        assert_eq!(opts.resolve_format(Some("bogus")), OutputFormat::Table);
        assert_eq!(opts.resolve_format(None), OutputFormat::Table);
    }
}
