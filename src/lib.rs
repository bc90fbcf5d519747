pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod fetch;
pub mod flatten;
pub mod menu;
pub mod pipeline;
pub mod request;

// Re-export commonly used types
pub use cli::{Cli, Settings};
pub use config::{ApiConfig, Credentials};
pub use entity::EntityType;
pub use error::{ConfigError, FetchError};
pub use export::{export_csv, ExportOutcome};
pub use fetch::{fetch, Fetched};
pub use flatten::{flatten, Table};
pub use pipeline::{export_entity, run, run_with_menu};
pub use request::{build_params, build_url, RequestSpec};
