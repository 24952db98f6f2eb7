//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod auth;
pub mod fetch;
pub mod metadata;
pub mod write_config;

// Re-export commonly used types
pub use auth::run as auth_run;
pub use fetch::{run as fetch_run, FetchOptions};
pub use metadata::run as metadata_run;
pub use write_config::run as write_config_run;
