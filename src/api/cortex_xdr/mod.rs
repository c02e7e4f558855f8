pub mod auth;
pub mod types;

use crate::config::XdrConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use types::{Endpoint, EndpointSummary, GetEndpointResponse, GetEndpointsResponse};

#[derive(Clone, Debug)]
pub struct XdrClient {
    client: Client,
    config: XdrConfig,
}

impl XdrClient {
    pub fn new(config: XdrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// HEAD the base URL to confirm it is reachable before doing real work.
    /// The probe carries signed headers like any other XDR request.
    pub async fn check_base_url(&self) -> Result<u16> {
        let response = self
            .client
            .head(&self.config.base_url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        Ok(response.status().as_u16())
    }

    /// List endpoint summaries from the EDR inventory (single page).
    pub async fn get_endpoints(&self) -> Result<Vec<EndpointSummary>> {
        let url = format!("{}/public_api/v1/endpoints/get_endpoints/", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GetEndpointsResponse = response.json().await?;
        Ok(parsed.reply)
    }

    /// Fetch up to `limit` full endpoint records.
    pub async fn get_endpoint(&self, limit: u32) -> Result<Vec<Endpoint>> {
        let url = format!("{}/public_api/v1/endpoints/get_endpoint/", self.config.base_url);

        let payload = json!({
            "request_data": {
                "limit": limit
            }
        });

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GetEndpointResponse = response.json().await?;
        Ok(parsed.reply.endpoints)
    }

    /// Fresh signed headers for one request. Never reused.
    fn auth_headers(&self) -> Result<reqwest::header::HeaderMap> {
        let signed =
            auth::advanced_authentication(&self.config.api_key, &self.config.api_key_id, None);

        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &signed {
            let name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Configuration(format!("invalid header name {name}: {e}")))?;
            let value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|e| Error::Configuration(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bind a local server that answers 200 only when the signed headers
    /// arrived, 400 otherwise.
    async fn spawn_signed_header_check_server() -> String {
        use axum::Router;
        use axum::http::{HeaderMap, StatusCode};
        use axum::routing::any;

        let app = Router::new().route(
            "/",
            any(|headers: HeaderMap| async move {
                if headers.contains_key("x-xdr-auth-id")
                    && headers.contains_key("x-xdr-nonce")
                    && headers.contains_key("x-xdr-timestamp")
                    && headers.contains_key("authorization")
                {
                    StatusCode::OK
                } else {
                    StatusCode::BAD_REQUEST
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn base_url_probe_carries_signed_headers() {
        let base_url = spawn_signed_header_check_server().await;
        let client = XdrClient::new(XdrConfig {
            api_key: "K1".to_string(),
            api_key_id: "ID1".to_string(),
            base_url,
        })
        .unwrap();

        assert_eq!(client.check_base_url().await.unwrap(), 200);
    }
}
