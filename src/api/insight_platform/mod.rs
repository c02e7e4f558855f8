//! Rapid7 Insight Platform authentication. The platform API takes a
//! static `X-Api-Key` header rather than Basic auth.

use crate::config::PlatformConfig;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct PlatformAuth {
    pub api_key: String,
    pub base_url: String,
}

impl PlatformAuth {
    pub fn new(config: PlatformConfig) -> Result<Self> {
        if config.api_key.is_empty() || config.base_url.is_empty() {
            return Err(Error::Configuration(
                "Missing Insight Platform API credentials or BASE URL. Please check .env file."
                    .to_string(),
            ));
        }
        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    pub fn api_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("X-Api-Key".to_string(), self.api_key.clone());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_the_api_key() {
        let auth = PlatformAuth::new(PlatformConfig {
            api_key: "key123".to_string(),
            base_url: "https://us.api.insight.rapid7.com".to_string(),
        })
        .unwrap();

        let headers = auth.api_headers();
        assert_eq!(headers["X-Api-Key"], "key123");
        assert_eq!(headers["Accept"], "application/json");
    }

    #[test]
    fn empty_key_is_rejected() {
        let result = PlatformAuth::new(PlatformConfig {
            api_key: String::new(),
            base_url: "https://us.api.insight.rapid7.com".to_string(),
        });
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
