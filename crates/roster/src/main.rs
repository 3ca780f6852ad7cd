//! Roster - admin CLI for a hosted user directory.
//!
//! Main entry point for the Roster CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod paths;

use commands::{auth, cache, users};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Roster - admin CLI for a hosted user directory
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory API base URL (default: https://reqres.in)
    #[arg(long, global = true, env = "ROSTER_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with the demo credentials
    Login(auth::LoginArgs),

    /// Register the demo account
    Register(auth::RegisterArgs),

    /// Log out, clearing stored tokens
    Logout,

    /// Show session and cache status
    Status,

    /// Browse and edit the user directory
    Users(users::UsersArgs),

    /// Manage the local page cache
    Cache(cache::CacheArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "roster=debug,roster_app=debug,roster_client=debug,roster_cache=debug,roster_session=debug,info"
    } else {
        "roster=info,roster_app=info,roster_client=info,roster_cache=info,roster_session=info,warn"
    };

    let file_appender = tracing_appender::rolling::daily(paths::log_dir(), "roster.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "roster=trace,roster_app=trace,roster_client=trace,roster_cache=trace,roster_session=trace,info",
                )),
        )
        .init();

    let api_url = cli
        .api_url
        .unwrap_or_else(|| "https://reqres.in".to_string());

    let ctx = commands::Context {
        api_url,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Login(args) => auth::login(args, &ctx).await,
        Commands::Register(args) => auth::register(args, &ctx).await,
        Commands::Logout => auth::logout(&ctx).await,
        Commands::Status => auth::status(&ctx).await,
        Commands::Users(args) => users::run(args, &ctx).await,
        Commands::Cache(args) => cache::run(args, &ctx).await,
    }
}
