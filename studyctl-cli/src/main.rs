//! studyctl CLI - study scheduler backend
//!
//! Entry point for running and maintaining the study scheduler API:
//! - `serve`: run the HTTP API
//! - `migrate`: create the database tables
//! - `check`: verify database connectivity
//! - `completions`: generate shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "studyctl",
    author,
    version,
    about = "Backend for the study scheduler: stores schedules and completed topics"
)]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if missing
    Migrate(commands::migrate::DatabaseArgs),
    /// Check database connectivity
    Check(commands::migrate::DatabaseArgs),
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
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is a dev convenience; real deployments set variables directly
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    }) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Check(args) => commands::run_check(args).await,
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
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
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
