//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod attachment;
pub mod completions;
pub mod context;
pub mod control_library;
pub mod handlers;
pub mod init;
pub mod profile;
pub mod provider_type;
pub mod report;
pub mod rule;
pub mod scan;
pub mod settings;
pub mod status;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// sccop - command-line companion for the IBM Security and Compliance Center
#[derive(Parser, Debug)]
#[command(name = "sccop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "SCCOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "SCCOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the service URL
    #[arg(long, global = true, env = "SCCOP_SERVICE_URL", hide_env = true)]
    pub service_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SCCOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize sccop configuration
    Init,

    /// Show resolved configuration
    Status,

    /// View service settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Manage control libraries
    #[command(subcommand)]
    ControlLibrary(ControlLibraryCommands),

    /// Manage profiles
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Manage rules
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Manage profile attachments
    #[command(subcommand)]
    Attachment(AttachmentCommands),

    /// Start on-demand scans
    #[command(subcommand)]
    Scan(ScanCommands),

    /// View scan reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// View provider types and their instances
    #[command(subcommand)]
    ProviderType(ProviderTypeCommands),

    /// Generate shell completions
    #[command(after_help = "\
Install:
  bash:   sccop completion bash > /etc/bash_completion.d/sccop
  zsh:    sccop completion zsh > \"${fpath[1]}/_sccop\"
  fish:   sccop completion fish > ~/.config/fish/completions/sccop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show Event Notifications and Object Storage settings
    Get,
}

#[derive(Subcommand, Debug)]
pub enum ControlLibraryCommands {
    /// List control libraries
    #[command(visible_alias = "ls")]
    List {
        /// Filter by type (predefined, custom)
        #[arg(long = "type", short = 't')]
        library_type: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a control library
    Get {
        /// Control library ID
        id: String,
    },

    /// Delete a custom control library
    Delete {
        /// Control library ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List profiles
    #[command(visible_alias = "ls")]
    List {
        /// Filter by type (predefined, custom)
        #[arg(long = "type", short = 't')]
        profile_type: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a profile
    Get {
        /// Profile ID
        id: String,
    },

    /// Delete a custom profile
    Delete {
        /// Profile ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// List rules
    #[command(visible_alias = "ls")]
    List {
        /// Filter by type (user_defined, system_defined)
        #[arg(long = "type", short = 't')]
        rule_type: Option<String>,

        /// Match rule descriptions
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter by target service
        #[arg(long)]
        service_name: Option<String>,
    },

    /// Show a rule
    Get {
        /// Rule ID
        id: String,
    },

    /// Delete a custom rule
    Delete {
        /// Rule ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AttachmentCommands {
    /// List attachments of a profile, or of the whole account
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            sccop attachment list                    # Every attachment in the account\n  \
            sccop attachment list --profile <id>     # Attachments of one profile"
    )]
    List {
        /// Only attachments of this profile
        #[arg(long, short = 'p')]
        profile: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show an attachment
    Get {
        /// Profile ID
        profile_id: String,

        /// Attachment ID
        id: String,
    },

    /// Delete an attachment
    Delete {
        /// Profile ID
        profile_id: String,

        /// Attachment ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// Start a scan of an attachment
    Create {
        /// Attachment ID
        attachment_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List reports
    #[command(visible_alias = "ls")]
    List {
        /// Only reports of this attachment
        #[arg(long)]
        attachment_id: Option<String>,

        /// Only reports of this profile
        #[arg(long)]
        profile_id: Option<String>,

        /// Filter by type (scheduled, ondemand)
        #[arg(long = "type", short = 't')]
        report_type: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Latest report of every attachment
    Latest,

    /// Show a report summary
    Summary {
        /// Report ID
        id: String,
    },

    /// Show per-control compliance of a report
    Controls {
        /// Report ID
        id: String,

        /// Filter by compliance status
        #[arg(long)]
        status: Option<String>,
    },

    /// Download report evaluations as CSV
    #[command(after_help = "EXAMPLES:\n  \
            sccop report download <id> > report.csv\n  \
            sccop report download <id> --output report.csv --exclude-summary")]
    Download {
        /// Report ID
        id: String,

        /// Write to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Leave the summary section out of the CSV
        #[arg(long)]
        exclude_summary: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProviderTypeCommands {
    /// List provider types
    #[command(visible_alias = "ls")]
    List,

    /// List instances of a provider type
    Instances {
        /// Provider type ID
        provider_type_id: String,
    },
}
