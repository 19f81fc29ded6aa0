//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_client_options;
use crate::client::service::DEFAULT_SERVICE_URL;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sccop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(crate::error::Error::Config(crate::error::ConfigError::NotFound)) => {
            println!(
                "{} No config file at {}",
                "○".dimmed(),
                config_path.display()
            );
            Config::default()
        }
        Err(e) => return Err(e),
    };
    println!();

    let options = match resolve_client_options(opts, &config) {
        Ok(options) => options,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  → Run 'sccop init' to reconfigure");
            return Ok(());
        }
    };

    match &options.service_url {
        Some(url) => println!("{} Service URL: {}", "✓".green(), url.cyan()),
        None => println!(
            "{} Service URL: {} {}",
            "○".dimmed(),
            DEFAULT_SERVICE_URL,
            "(default)".dimmed()
        ),
    }

    match &options.authenticator {
        Some(authenticator) => match authenticator.validate() {
            Ok(()) => println!(
                "{} Authentication: {}",
                "✓".green(),
                authenticator.auth_type()
            ),
            Err(e) => println!("{} Authentication: {}", "✗".red(), e),
        },
        None => {
            println!("{} Authentication not configured", "✗".red());
            println!("  → Run 'sccop init' to configure");
        }
    }

    match options.retry {
        Some(policy) if policy.is_enabled() => println!(
            "{} Retries: up to {} (base interval {:?})",
            "✓".green(),
            policy.max_retries,
            policy.base_interval
        ),
        _ => println!("{} Retries disabled", "○".dimmed()),
    }

    if options.disable_ssl_verification == Some(true) {
        println!("{} TLS certificate verification disabled", "⚠".yellow());
    }

    println!();
    Ok(())
}
