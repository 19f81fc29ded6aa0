//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::options::GetSettingsOptions;
use crate::client::service::DEFAULT_SERVICE_URL;
use crate::client::{AuthType, ClientOptions, SecurityComplianceClient, SettingsApi};
use crate::config::{AuthConfig, Config, RetryConfig};
use crate::error::Result;

const AUTH_CHOICES: [(&str, AuthType); 3] = [
    ("Bearer token", AuthType::BearerToken),
    ("Basic (username and password)", AuthType::Basic),
    ("None", AuthType::NoAuth),
];

/// Run the init command
///
/// Prompts for the service URL and credentials, checks them against the
/// service, and writes the config file. Existing preferences are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut config = Config::load_or_default(opts.config_ref())?;

    println!("{}", "Welcome to sccop!".bold().green());
    println!("Let's set up your Security and Compliance Center configuration.\n");

    let default_url = opts
        .service_url
        .clone()
        .or_else(|| config.service_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
    let service_url: String = Input::with_theme(&theme)
        .with_prompt("Service URL")
        .default(default_url)
        .interact_text()?;

    let labels: Vec<&str> = AUTH_CHOICES.iter().map(|(label, _)| *label).collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Authentication")
        .items(&labels)
        .default(0)
        .interact()?;
    let auth_type = AUTH_CHOICES[selection].1;

    let auth = match auth_type {
        AuthType::BearerToken => AuthConfig {
            auth_type: Some(auth_type),
            bearer_token: Some(
                Password::with_theme(&theme)
                    .with_prompt("Bearer token")
                    .interact()?,
            ),
            ..Default::default()
        },
        AuthType::Basic => AuthConfig {
            auth_type: Some(auth_type),
            username: Some(
                Input::with_theme(&theme)
                    .with_prompt("Username")
                    .interact_text()?,
            ),
            password: Some(
                Password::with_theme(&theme)
                    .with_prompt("Password")
                    .interact()?,
            ),
            ..Default::default()
        },
        AuthType::NoAuth => AuthConfig {
            auth_type: Some(auth_type),
            ..Default::default()
        },
    };

    let retries_enabled = Confirm::with_theme(&theme)
        .with_prompt("Retry transient failures?")
        .default(config.retries.enabled)
        .interact()?;

    config.service_url = Some(service_url);
    config.auth = auth;
    config.retries = RetryConfig {
        enabled: retries_enabled,
        ..config.retries
    };

    // Validates credentials locally before anything is written.
    let options = config.fill_client_options(ClientOptions::new())?;
    let client = SecurityComplianceClient::new(options)?;

    println!("\n{}", "Checking connection...".cyan());
    match client.get_settings(&GetSettingsOptions::new()).await {
        Ok(_) => println!("{}", "✓ Connected to the service".green()),
        Err(e) => {
            println!("{} Could not reach the service: {}", "⚠".yellow(), e);
            println!("  The configuration is saved anyway; run 'sccop status' to review it.");
        }
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sccop status".cyan());
    println!("  {} - List profiles", "sccop profile list".cyan());

    Ok(())
}
