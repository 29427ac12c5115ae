use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

mod commands;
use commands::{execute_backend_command, execute_example_command, BackendArgs, ExampleArgs};
use mockd_fixture::{DEFAULT_ANSWERS_PATH, DEFAULT_EXAMPLE_PATH};

#[derive(Parser)]
#[command(name = "mockd")]
#[command(about = "Mock backend servers for frontend development")]
#[command(after_help = "The listen port is read from $PORT (default 8080).")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve a random canned answer after a 0-4 second delay
    Backend(BackendCommandArgs),
    /// Serve the example fixture unchanged
    Example(ExampleCommandArgs),
}

#[derive(Args)]
pub struct BackendCommandArgs {
    /// Path to the answer fixture (JSON array)
    #[arg(short, long, default_value = DEFAULT_ANSWERS_PATH)]
    pub answers: PathBuf,
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
    /// Seed the random source for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ExampleCommandArgs {
    /// Path to the example fixture
    #[arg(short, long, default_value = DEFAULT_EXAMPLE_PATH)]
    pub fixture: PathBuf,
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    mockd_server::init_logging().context("Failed to install logger")?;

    match cli.command {
        Commands::Backend(args) => {
            let backend_args = BackendArgs {
                answers: args.answers,
                host: args.host,
                seed: args.seed,
            };
            execute_backend_command(backend_args).await
        }
        Commands::Example(args) => {
            let example_args = ExampleArgs {
                fixture: args.fixture,
                host: args.host,
            };
            execute_example_command(example_args).await
        }
    }
}
