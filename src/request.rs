use colored::Colorize;
use reqwest::{header, Client, RequestBuilder, Url};

use crate::auth::{apply_auth, mask_secret};
use crate::config::{ApiConfig, Credentials, API_URL_MIDDLE_KEY, API_URL_START_KEY};
use crate::entity::EntityType;
use crate::error::ConfigError;

/// Everything needed to issue the GET for one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub entity: EntityType,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub api_key: String,
}

impl RequestSpec {
    pub fn new(
        config: &ApiConfig,
        credentials: &Credentials,
        entity: EntityType,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            entity,
            url: build_url(
                &credentials.account_name,
                &credentials.sandbox_name,
                config,
                entity,
            )?,
            params: build_params(config, entity)?,
            api_key: credentials.api_key.clone(),
        })
    }

    pub fn build(&self, client: &Client, verbose_info: &mut Option<VerboseInfo>) -> RequestBuilder {
        let mut builder = client
            .get(&self.url)
            .header(header::ACCEPT, mime::APPLICATION_JSON.essence_str());
        if let Some(info) = verbose_info {
            info.add_header(
                header::ACCEPT.as_str().to_string(),
                mime::APPLICATION_JSON.to_string(),
            );
        }

        builder = apply_auth(builder, &self.api_key, verbose_info);

        if let Some(info) = verbose_info {
            for (key, value) in &self.params {
                info.add_query_param(key.clone(), value.clone());
            }
        }
        builder.query(&self.params)
    }
}

/// `start + account-sandbox + middle + end`, with no separators added.
pub fn build_url(
    account_name: &str,
    sandbox_name: &str,
    config: &ApiConfig,
    entity: EntityType,
) -> Result<String, ConfigError> {
    let start = config.get(API_URL_START_KEY)?;
    let middle = config.get(API_URL_MIDDLE_KEY)?;
    let end = config.get(&entity.url_end_key())?;
    Ok(format!("{start}{account_name}-{sandbox_name}{middle}{end}"))
}

pub fn build_params(
    config: &ApiConfig,
    entity: EntityType,
) -> Result<Vec<(String, String)>, ConfigError> {
    let fields = config.get(&entity.params_key())?;
    Ok(vec![("fields".to_string(), fields.to_string())])
}

#[derive(Debug, Default)]
pub struct VerboseInfo {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    query_params: Vec<(String, String)>,
}

impl VerboseInfo {
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: method.to_string(),
            url: url.to_string(),
            headers: Vec::new(),
            query_params: Vec::new(),
        }
    }

    pub fn add_header(&mut self, key: String, value: String) {
        self.headers.push((key, value));
    }

    pub fn add_query_param(&mut self, key: String, value: String) {
        self.query_params.push((key, value));
    }

    pub fn request_line(&self) -> String {
        let path = match Url::parse_with_params(&self.url, &self.query_params) {
            Ok(url) => match url.query() {
                Some(query) if !self.query_params.is_empty() => {
                    format!("{}?{}", url.path(), query)
                }
                _ => url.path().to_string(),
            },
            Err(_) => self.url.clone(),
        };
        format!("{} {}", self.method, path)
    }

    pub fn print(&self) {
        eprintln!(
            "{} {} {}",
            ">".cyan().bold(),
            self.request_line().cyan(),
            "HTTP/1.1".cyan().dimmed()
        );

        if let Some(host) = Url::parse(&self.url).ok().and_then(|u| u.host_str().map(String::from)) {
            eprintln!("{} {}: {}", ">".cyan().bold(), "Host".cyan(), host);
        }

        for (key, value) in &self.headers {
            let shown = if key.eq_ignore_ascii_case("authorization") {
                mask_secret(value)
            } else {
                value.clone()
            };
            eprintln!("{} {}: {}", ">".cyan().bold(), key.cyan(), shown);
        }
        eprintln!("{}", ">".cyan().bold());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> ApiConfig {
        [
            ("api_url_start", "https://"),
            ("api_url_middle", ".ilucca-sandbox.net/api/"),
            ("contracts_api_url_end", "v3/workcontracts"),
            ("contracts_params", "id,startsOn,endsOn"),
            ("employees_api_url_end", "v3/users"),
            ("employees_params", "id,firstName,department.id,manager.id"),
        ]
        .into_iter()
        .collect()
    }

    fn sample_credentials() -> Credentials {
        Credentials {
            api_key: "lucca application=0123456789abcdef".into(),
            account_name: "acct".into(),
            sandbox_name: "sbx".into(),
        }
    }

    #[test]
    fn build_url_concatenates_fragments() {
        let url = build_url("acct", "sbx", &sample_config(), EntityType::Contracts).unwrap();
        assert_eq!(url, "https://acct-sbx.ilucca-sandbox.net/api/v3/workcontracts");
    }

    #[test]
    fn build_url_missing_entity_key() {
        let err = build_url("acct", "sbx", &sample_config(), EntityType::Departments).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref k) if k == "departments_api_url_end"));
    }

    #[test]
    fn build_params_uses_field_list() {
        let params = build_params(&sample_config(), EntityType::Employees).unwrap();
        assert_eq!(
            params,
            vec![(
                "fields".to_string(),
                "id,firstName,department.id,manager.id".to_string()
            )]
        );
    }

    #[test]
    fn request_spec_sets_headers_and_query() {
        let spec =
            RequestSpec::new(&sample_config(), &sample_credentials(), EntityType::Contracts).unwrap();
        let client = Client::new();
        let mut info = Some(VerboseInfo::new("GET", &spec.url));
        let request = spec.build(&client, &mut info).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.headers()[header::ACCEPT], "application/json");
        assert_eq!(
            request.headers()[header::AUTHORIZATION],
            "lucca application=0123456789abcdef"
        );
        assert_eq!(request.url().query(), Some("fields=id%2CstartsOn%2CendsOn"));

        let info = info.unwrap();
        assert_eq!(info.headers.len(), 2);
        assert_eq!(
            info.request_line(),
            "GET /api/v3/workcontracts?fields=id%2CstartsOn%2CendsOn"
        );
    }

    #[test]
    fn verbose_info_without_params() {
        let info = VerboseInfo::new("GET", "https://example.com/api/users");
        assert_eq!(info.request_line(), "GET /api/users");
    }
}
