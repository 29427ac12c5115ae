//! Backend command implementation
//!
//! This module implements `mockd backend`, the stand-in for the real backend:
//! random canned answers after a random delay.

use anyhow::{Context, Result};
use mockd_fixture::{AnswerSet, Fixture};
use mockd_server::{DelayPolicy, HttpServer, RandomDelayResponder, RandomSource, ServerConfig};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Arguments for the backend command
pub struct BackendArgs {
    /// Answer fixture (JSON array)
    pub answers: PathBuf,
    /// Interface to bind
    pub host: IpAddr,
    /// Fixed RNG seed, for reproducible sessions
    pub seed: Option<u64>,
}

/// Execute the backend command
pub async fn execute_backend_command(args: BackendArgs) -> Result<()> {
    let answers = load_answers(&args.answers)?;
    info!(
        path = %args.answers.display(),
        answers = answers.len(),
        "Loaded answer fixture"
    );
    if answers.is_empty() {
        warn!("Answer fixture is empty, every request will get a 500");
    }

    let rng = match args.seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            RandomSource::seeded(seed)
        }
        None => RandomSource::from_entropy(),
    };
    let responder = RandomDelayResponder::new(answers, DelayPolicy::default(), rng);

    let config = ServerConfig::from_env().with_host(args.host);
    let server = HttpServer::bind(&config)
        .await
        .context("Failed to start backend mock")?;

    server
        .serve(responder.router())
        .await
        .context("Backend mock stopped")
}

/// Load the answer fixture, which must be a JSON array
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let answers = Fixture::load(path)?.into_answers()?;
    Ok(answers)
}
