use crate::error::{Error, Result};
use std::env;

/// Cortex XDR API credentials.
#[derive(Clone, Debug)]
pub struct XdrConfig {
    pub api_key: String,
    pub api_key_id: String,
    pub base_url: String,
}

/// InsightVM console credentials.
#[derive(Clone, Debug)]
pub struct InsightVmConfig {
    pub username: String,
    pub password: String,
    pub base_url: String,
}

/// Rapid7 Insight Platform credentials.
#[derive(Clone, Debug)]
pub struct PlatformConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Relay settings for the SMTP alert tool.
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub sender: String,
}

/// Read a required variable, treating an empty value as absent.
fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Configuration(format!(
            "{name} must be set. Please check .env file."
        ))),
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl XdrConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = require_env("XDR_API_KEY")?;
        let api_key_id = require_env("XDR_API_KEY_ID")?;
        let base_url = require_env("XDR_BASE_URL")?;

        Ok(Self {
            api_key,
            api_key_id,
            base_url,
        })
    }
}

impl InsightVmConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // Older scripts used INSIGHTVM_API_KEY / INSIGHTVM_API_SECRET,
        // IVM_AUTH and IVM_CONNECTION; accept them as fallbacks.
        let username = env_non_empty("INSIGHTVM_API_USERNAME")
            .or_else(|| env_non_empty("INSIGHTVM_API_KEY"))
            .or_else(|| env_non_empty("IVM_AUTH"))
            .ok_or_else(|| {
                Error::Configuration(
                    "INSIGHTVM_API_USERNAME must be set. Please check .env file.".to_string(),
                )
            })?;
        let password = env_non_empty("INSIGHTVM_API_PASSWORD")
            .or_else(|| env_non_empty("INSIGHTVM_API_SECRET"))
            .ok_or_else(|| {
                Error::Configuration(
                    "INSIGHTVM_API_PASSWORD must be set. Please check .env file.".to_string(),
                )
            })?;
        let base_url = env_non_empty("INSIGHTVM_BASE_URL")
            .or_else(|| env_non_empty("IVM_CONNECTION"))
            .ok_or_else(|| {
                Error::Configuration(
                    "INSIGHTVM_BASE_URL must be set. Please check .env file.".to_string(),
                )
            })?;

        Ok(Self {
            username,
            password,
            base_url,
        })
    }
}

impl PlatformConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = require_env("INSIGHT_PLATFORM_API_KEY")?;
        let base_url = require_env("INSIGHT_PLATFORM_BASE_URL")?;

        Ok(Self { api_key, base_url })
    }
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = require_env("SMTP_HOST")?;
        let sender = require_env("SMTP_SENDER")?;

        Ok(Self { host, sender })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_env_rejects_missing_variable() {
        let err = require_env("XDR_IVM_TOOLS_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("XDR_IVM_TOOLS_TEST_UNSET_VAR"));
    }

    #[test]
    fn ivm_auth_legacy_variable_supplies_the_username() {
        unsafe {
            env::remove_var("INSIGHTVM_API_USERNAME");
            env::remove_var("INSIGHTVM_API_KEY");
            env::set_var("IVM_AUTH", "legacy_user");
            env::set_var("INSIGHTVM_API_PASSWORD", "p");
            env::set_var("IVM_CONNECTION", "https://console.example.com:3780");
        }

        let config = InsightVmConfig::from_env().unwrap();
        assert_eq!(config.username, "legacy_user");
        assert_eq!(config.base_url, "https://console.example.com:3780");
    }
}
