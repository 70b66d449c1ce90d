//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::RunOptions;
use crate::app::config::ConfigOverrides;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "readme-install")]
#[command(version)]
#[command(
    about = "Clone a repository, generate and run an install script from its README, then write simplified instructions",
    long_about = None
)]
struct Cli {
    /// Repository URL (prompted for when omitted)
    #[arg(short, long)]
    url: Option<String>,
    /// Language for the simplified instructions (prompted for when omitted)
    #[arg(short, long)]
    language: Option<String>,
    /// Model identifier sent to the chat-completion API
    #[arg(short, long)]
    model: Option<String>,
    /// Chat-completion endpoint URL
    #[arg(long)]
    api_url: Option<String>,
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Do not open the instructions file when done
    #[arg(long)]
    no_open: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = RunOptions {
        url: cli.url,
        language: cli.language,
        config_path: cli.config,
        overrides: ConfigOverrides { model: cli.model, api_url: cli.api_url },
        open_instructions: !cli.no_open,
    };

    let result: Result<(), AppError> = crate::run(options).map(|outcome| {
        println!("✅ Done: {} installed", outcome.repository.local_name());
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("readme_install=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
