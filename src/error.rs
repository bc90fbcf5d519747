use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the static config file or the credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing config key '{0}'")]
    MissingKey(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

/// Failures of the single GET issued per run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered {status}")]
    Status { status: reqwest::StatusCode },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}
