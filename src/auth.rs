use reqwest::header;

use crate::request::VerboseInfo;

/// Sends the API key as-is in the `Authorization` header. The key already
/// carries whatever scheme the API expects, so no `Bearer` prefix is added.
pub fn apply_auth(
    builder: reqwest::RequestBuilder,
    api_key: &str,
    verbose_info: &mut Option<VerboseInfo>,
) -> reqwest::RequestBuilder {
    if let Some(info) = verbose_info {
        info.add_header(header::AUTHORIZATION.as_str().to_string(), api_key.to_string());
    }
    builder.header(header::AUTHORIZATION, api_key)
}

/// Hides the middle of a secret for display.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 20 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "*".repeat(chars.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
