//! Fixture loading for the mockd development servers
//!
//! A fixture is a pre-authored JSON payload read from disk once at process
//! startup and served unchanged for the lifetime of the process. Two shapes
//! are used: a whole [`Fixture`] echoed back as-is, and an [`AnswerSet`]
//! from which one element is picked per request.

pub mod errors;
pub mod loader;

pub use errors::FixtureError;
pub use loader::{AnswerSet, Fixture};

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Default location of the answer fixture, relative to the working directory
pub const DEFAULT_ANSWERS_PATH: &str = "fixtures/answers.json";

/// Default location of the static example fixture
pub const DEFAULT_EXAMPLE_PATH: &str = "fixtures/example.json";
