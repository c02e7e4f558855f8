pub mod alerts;
pub mod assets;
pub mod types;

use crate::config::InsightVmConfig;
use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// HTTP verbs the InsightVM wrapper dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Holds the console credentials and produces the Basic-Auth header.
///
/// The header is deterministic for a given username/password pair, so it
/// is safe to rebuild (or cache) across calls.
#[derive(Clone, Debug)]
pub struct InsightVmAuth {
    pub username: String,
    pub password: String,
    pub base_url: String,
}

impl InsightVmAuth {
    /// Fails with [`Error::Configuration`] when any credential part is
    /// empty; an empty string is treated the same as an absent one.
    pub fn new(config: InsightVmConfig) -> Result<Self> {
        if config.username.is_empty() || config.password.is_empty() || config.base_url.is_empty() {
            return Err(Error::Configuration(
                "Missing ISVM API credentials or BASE URL. Please check .env file.".to_string(),
            ));
        }
        Ok(Self {
            username: config.username,
            password: config.password,
            base_url: config.base_url,
        })
    }

    /// `{"Authorization": "Basic " + base64(username:password)}`.
    pub fn basic_auth_header(&self) -> BTreeMap<String, String> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), format!("Basic {encoded}"));
        headers
    }
}

/// Thin call executor for one `/api/3/{api_name}/...` resource namespace.
///
/// Each [`call`](InsightVmApi::call) issues exactly one HTTP request and
/// raises on any non-2xx status. No retries, no pagination.
#[derive(Clone, Debug)]
pub struct InsightVmApi {
    auth: InsightVmAuth,
    api_name: String,
    client: Client,
}

impl InsightVmApi {
    /// `timeout` is `(connect, read)` in seconds, applied to every call
    /// made through this instance.
    pub fn new(auth: InsightVmAuth, api_name: &str, timeout: (u64, u64)) -> Result<Self> {
        let (connect, read) = timeout;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect))
            .timeout(Duration::from_secs(read))
            .build()?;
        Ok(Self {
            auth,
            api_name: api_name.to_string(),
            client,
        })
    }

    pub fn auth(&self) -> &InsightVmAuth {
        &self.auth
    }

    /// HEAD the console base URL to confirm it is reachable.
    pub async fn check_base_url(&self) -> Result<u16> {
        let response = self.client.head(&self.auth.base_url).send().await?;
        Ok(response.status().as_u16())
    }

    fn api_url(&self, call_name: &str) -> String {
        if call_name.is_empty() {
            format!("{}/api/3/{}", self.auth.base_url, self.api_name)
        } else {
            format!("{}/api/3/{}/{}", self.auth.base_url, self.api_name, call_name)
        }
    }

    /// Execute one API call against `{base_url}/api/3/{api_name}/{call_name}`.
    ///
    /// The Basic-Auth header is merged with `extra_headers`; extras win on
    /// key collision. Query `params` apply to GET, `json_value` to POST/PUT.
    pub async fn call(
        &self,
        call_name: &str,
        method: ApiMethod,
        params: &[(&str, String)],
        json_value: Option<&serde_json::Value>,
        extra_headers: &BTreeMap<String, String>,
    ) -> Result<reqwest::Response> {
        let url = self.api_url(call_name);

        let mut headers = self.auth.basic_auth_header();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.extend(extra_headers.iter().map(|(k, v)| (k.clone(), v.clone())));

        let mut request = match method {
            ApiMethod::Get => self.client.get(&url).query(params),
            ApiMethod::Post => {
                let builder = self.client.post(&url);
                match json_value {
                    Some(body) => builder.json(body),
                    None => builder.json(&serde_json::json!({})),
                }
            }
            ApiMethod::Put => {
                let builder = self.client.put(&url);
                match json_value {
                    Some(body) => builder.json(body),
                    None => builder.json(&serde_json::json!({})),
                }
            }
            ApiMethod::Delete => self.client.delete(&url),
        };

        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
