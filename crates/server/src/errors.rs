//! Server and responder errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::warn;

/// Startup errors for the HTTP listener. Both are fatal.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP server error: {source}")]
    Serve { source: std::io::Error },
}

/// Errors a responder can hit while building or answering a request
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("answer fixture is empty")]
    EmptyAnswers,

    #[error("failed to serialize fixture: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("responder task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ResponderError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Responding with 500");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
