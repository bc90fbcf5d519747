use log::{debug, info, warn};
use mime::Mime;
use reqwest::{header, Client, Response};
use serde_json::Value;
use std::time::Instant;

use crate::error::FetchError;
use crate::request::{RequestSpec, VerboseInfo};

/// What a successful GET produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Data(Value),
    /// The body was `null`, `{}` or `[]`.
    Empty,
}

impl Fetched {
    pub fn from_value(value: Value) -> Self {
        if is_empty_payload(&value) {
            Fetched::Empty
        } else {
            Fetched::Data(value)
        }
    }
}

pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

pub async fn fetch(client: &Client, spec: &RequestSpec, verbose: bool) -> Result<Fetched, FetchError> {
    let mut verbose_info = verbose.then(|| VerboseInfo::new("GET", &spec.url));
    let builder = spec.build(client, &mut verbose_info);
    if let Some(info) = verbose_info {
        info.print();
    }

    info!("Fetching {} from {}", spec.entity, spec.url);
    let start = Instant::now();
    let resp = builder.send().await.map_err(FetchError::Transport)?;
    debug!(
        "{} answered {} in {:.2} ms",
        spec.url,
        resp.status(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    match get_content_type(&resp) {
        Some(m) if m.essence_str() == mime::APPLICATION_JSON.essence_str() => {}
        other => warn!(
            "Expected application/json, got {}",
            other.map(|m| m.to_string()).unwrap_or_else(|| "no content type".into())
        ),
    }

    let value: Value = resp.json().await.map_err(FetchError::Decode)?;
    Ok(Fetched::from_value(value))
}

pub fn get_content_type(resp: &Response) -> Option<Mime> {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

// ============================================================================
// Tests
// ============================================================================
