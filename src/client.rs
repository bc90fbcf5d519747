use anyhow::Result;
use reqwest::{header, Client};
use std::time::Duration;

use crate::cli::Settings;

pub fn build_client(settings: &Settings) -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    let user_agent = format!("hrexport/{}", env!("CARGO_PKG_VERSION"));
    headers.insert(header::USER_AGENT, header::HeaderValue::from_str(&user_agent)?);

    let mut client_builder = Client::builder().default_headers(headers);

    // No timeout unless asked for.
    if let Some(secs) = settings.timeout {
        client_builder = client_builder.timeout(Duration::from_secs(secs));
    }

    Ok(client_builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_default() {
        let settings = Settings::default();
        assert!(build_client(&settings).is_ok());
    }

    #[test]
    fn test_build_client_with_timeout() {
        let settings = Settings {
            timeout: Some(5),
            ..Settings::default()
        };
        assert!(build_client(&settings).is_ok());
    }
}
