//! Common CLI types shared across commands

use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Parse the `preferences.format` value of the config file.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" Table ".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("pretty".parse::<OutputFormat>().is_err());
    }
}
