//! Example command implementation
//!
//! This module implements `mockd example`, which serves the example fixture
//! unchanged and without delay.

use anyhow::{Context, Result};
use mockd_fixture::Fixture;
use mockd_server::{HttpServer, ServerConfig, StaticResponder};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for the example command
pub struct ExampleArgs {
    /// Example fixture (any JSON value)
    pub fixture: PathBuf,
    /// Interface to bind
    pub host: IpAddr,
}

/// Execute the example command
pub async fn execute_example_command(args: ExampleArgs) -> Result<()> {
    let fixture = load_example(&args.fixture)?;
    let responder = StaticResponder::new(&fixture)
        .with_context(|| format!("Failed to prepare fixture {}", args.fixture.display()))?;
    info!(
        path = %args.fixture.display(),
        bytes = responder.body().len(),
        "Loaded example fixture"
    );

    let config = ServerConfig::from_env().with_host(args.host);
    let server = HttpServer::bind(&config)
        .await
        .context("Failed to start example mock")?;

    server
        .serve(responder.router())
        .await
        .context("Example mock stopped")
}

pub fn load_example(path: &Path) -> Result<Fixture> {
    Ok(Fixture::load(path)?)
}
