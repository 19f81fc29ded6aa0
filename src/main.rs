//! sccop CLI - command-line companion for the IBM Security and Compliance Center

use clap::Parser;
use log::LevelFilter;

use sccop::cli::args::GlobalOptions;
use sccop::cli::report::ReportFilters;
use sccop::cli::rule::RuleFilters;
use sccop::cli::{
    self, AttachmentCommands, Cli, Commands, ControlLibraryCommands, ProfileCommands,
    ProviderTypeCommands, ReportCommands, RuleCommands, ScanCommands, SettingsCommands,
};
use sccop::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Settings(SettingsCommands::Get) => cli::settings::get(&opts).await,
        Commands::ControlLibrary(cmd) => match cmd {
            ControlLibraryCommands::List {
                library_type,
                pagination,
            } => cli::control_library::list(&opts, library_type.as_deref(), &pagination).await,
            ControlLibraryCommands::Get { id } => cli::control_library::get(&opts, &id).await,
            ControlLibraryCommands::Delete { id, yes } => {
                cli::control_library::delete(&opts, &id, yes).await
            }
        },
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List {
                profile_type,
                pagination,
            } => cli::profile::list(&opts, profile_type.as_deref(), &pagination).await,
            ProfileCommands::Get { id } => cli::profile::get(&opts, &id).await,
            ProfileCommands::Delete { id, yes } => cli::profile::delete(&opts, &id, yes).await,
        },
        Commands::Rule(cmd) => match cmd {
            RuleCommands::List {
                rule_type,
                search,
                service_name,
            } => {
                let filters = RuleFilters {
                    rule_type,
                    search,
                    service_name,
                };
                cli::rule::list(&opts, &filters).await
            }
            RuleCommands::Get { id } => cli::rule::get(&opts, &id).await,
            RuleCommands::Delete { id, yes } => cli::rule::delete(&opts, &id, yes).await,
        },
        Commands::Attachment(cmd) => match cmd {
            AttachmentCommands::List {
                profile,
                pagination,
            } => cli::attachment::list(&opts, profile.as_deref(), &pagination).await,
            AttachmentCommands::Get { profile_id, id } => {
                cli::attachment::get(&opts, &profile_id, &id).await
            }
            AttachmentCommands::Delete {
                profile_id,
                id,
                yes,
            } => cli::attachment::delete(&opts, &profile_id, &id, yes).await,
        },
        Commands::Scan(ScanCommands::Create { attachment_id }) => {
            cli::scan::create(&opts, &attachment_id).await
        }
        Commands::Report(cmd) => match cmd {
            ReportCommands::List {
                attachment_id,
                profile_id,
                report_type,
                pagination,
            } => {
                let filters = ReportFilters {
                    attachment_id,
                    profile_id,
                    report_type,
                };
                cli::report::list(&opts, &filters, &pagination).await
            }
            ReportCommands::Latest => cli::report::latest(&opts).await,
            ReportCommands::Summary { id } => cli::report::summary(&opts, &id).await,
            ReportCommands::Controls { id, status } => {
                cli::report::controls(&opts, &id, status.as_deref()).await
            }
            ReportCommands::Download {
                id,
                output,
                exclude_summary,
            } => cli::report::download(&opts, &id, output.as_deref(), exclude_summary).await,
        },
        Commands::ProviderType(cmd) => match cmd {
            ProviderTypeCommands::List => cli::provider_type::list(&opts).await,
            ProviderTypeCommands::Instances { provider_type_id } => {
                cli::provider_type::instances(&opts, &provider_type_id).await
            }
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
