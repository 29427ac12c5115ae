//! CLI command modules

pub mod backend;
pub mod example;

pub use backend::{execute_backend_command, BackendArgs};
pub use example::{execute_example_command, ExampleArgs};
