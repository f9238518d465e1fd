//! tablectl CLI - one-shot PostgreSQL table tools
//!
//! Each subcommand opens a pool, runs a short fixed sequence of statements,
//! prints the result and exits:
//! - Table inspection: existence, columns, rows (`inspect` subcommand)
//! - Table removal with catalog confirmation (`drop` subcommand)
//! - Single-record lookups (`fetch` subcommand)
//! - Configuration helpers (`config` subcommand)

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tablectl_core::TablectlConfig;
use tracing::error;

mod commands;
mod config;
mod render;
mod tracing_setup;
mod ui;

use commands::{CommandContext, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "tablectl",
    author,
    version,
    about = "Inspect, drop and spot-check PostgreSQL tables",
    long_about = "One-shot operational tools over information_schema and plain SELECTs. \
                  The connection string comes from --database-url, DATABASE_URL, .env or tablectl.toml."
)]
struct Cli {
    /// PostgreSQL connection string (overrides config files)
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress spinners
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show whether a table exists, its columns and its rows
    Inspect(commands::inspect::InspectArgs),
    /// Drop a table with CASCADE and confirm it is gone
    Drop(commands::drop::DropArgs),
    /// Fetch a single record
    Fetch(commands::fetch::FetchArgs),
    /// Manage tablectl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing so DATABASE_URL from .env reaches the clap env fallback
    let dotenv = tablectl_core::config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();
    dotenv.log();
    ui::init_quiet_mode(cli.quiet);

    let result = run(cli).await;
    tracing_setup::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext {
        config: TablectlConfig::load(),
        database_url: cli.database_url,
        format: cli.format,
    };

    match cli.command {
        Commands::Inspect(args) => commands::run_inspect(args, &ctx).await?,
        Commands::Drop(args) => commands::run_drop(args, &ctx).await?,
        Commands::Fetch(args) => commands::run_fetch(args, &ctx).await?,
        Commands::Config(args) => config::run_config(args, &ctx)?,
        Commands::Completions(args) => run_completions(args),
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
