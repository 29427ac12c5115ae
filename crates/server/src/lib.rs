//! HTTP responders for the mockd development servers
//!
//! Two standalone services are built from this crate: a responder that picks
//! a random canned answer and delays it by a whole number of seconds, and a
//! responder that echoes a static fixture immediately. Each runs in its own
//! process behind [`HttpServer`].

pub mod errors;
pub mod http_server;
pub mod logging;
pub mod random;
pub mod random_delay;
pub mod static_responder;

pub use errors::{ResponderError, ServerError};
pub use http_server::{resolve_port, HttpServer, ServerConfig, DEFAULT_PORT, PORT_ENV};
pub use logging::{build_subscriber, init_logging, use_ansi, LocalClock};
pub use random::RandomSource;
pub use random_delay::{DelayPolicy, RandomDelayResponder};
pub use static_responder::StaticResponder;
