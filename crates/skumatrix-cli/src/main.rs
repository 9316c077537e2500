mod render;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skumatrix-cli")]
#[command(about = "Replay product variant editing sessions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a session script and print the resulting variant table
    Replay {
        /// Session script to replay (defaults to SKUMATRIX_SESSION_PATH)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Output format for the variant table
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also print the save payload built from included variants
        #[arg(long)]
        submit: bool,
    },
    /// Load and validate a session script without replaying it
    Check {
        /// Session script to check (defaults to SKUMATRIX_SESSION_PATH)
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = skumatrix_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Replay {
            script,
            format,
            submit,
        }) => {
            let path = script.unwrap_or_else(|| config.session_path.clone());
            session::run_replay(&config, &path, format, submit)?;
        }
        Some(Commands::Check { script }) => {
            let path = script.unwrap_or_else(|| config.session_path.clone());
            session::run_check(&path)?;
        }
        None => println!("skumatrix-cli: use `replay` or `check`; see --help"),
    }

    Ok(())
}
