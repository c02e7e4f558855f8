//! SMTP alert management for a site: list existing alert ids, then create
//! or update alerts with a merged default + override configuration.

use super::types::{AlertUpsertResponse, SmtpAlertsResponse};
use super::{ApiMethod, InsightVmApi};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvents {
    pub failed: bool,
    pub paused: bool,
    pub resumed: bool,
    pub started: bool,
    pub stopped: bool,
}

impl Default for ScanEvents {
    fn default() -> Self {
        Self {
            failed: false,
            paused: false,
            resumed: false,
            started: false,
            stopped: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityEvents {
    pub confirmed_vulnerabilities: bool,
    pub potential_vulnerabilities: bool,
    pub unconfirmed_vulnerabilities: bool,
    pub vulnerability_severity: String,
}

impl Default for VulnerabilityEvents {
    fn default() -> Self {
        Self {
            confirmed_vulnerabilities: true,
            potential_vulnerabilities: true,
            unconfirmed_vulnerabilities: true,
            vulnerability_severity: "any_severity".to_string(),
        }
    }
}

/// Alert configuration sent to the console. Serializes to the camelCase
/// body the alerts endpoint expects; `id` is present only for updates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpAlertConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub enabled: bool,
    pub enabled_scan_events: ScanEvents,
    pub enabled_vulnerability_events: VulnerabilityEvents,
    pub notification: String,
    pub recipients: Vec<String>,
    pub relay_server: String,
    pub sender_email_address: String,
    pub maximum_alerts: u32,
}

impl SmtpAlertConfig {
    /// Defaults mirror the console UI: no scan events, all vulnerability
    /// events at any severity, one alert maximum.
    pub fn new(
        name: &str,
        recipients: Vec<String>,
        relay_server: &str,
        sender_email_address: &str,
    ) -> Result<Self> {
        if name.is_empty() || recipients.is_empty() {
            return Err(Error::Configuration(
                "Name of alert or alert recipients are missing".to_string(),
            ));
        }
        Ok(Self {
            id: None,
            name: name.to_string(),
            enabled: true,
            enabled_scan_events: ScanEvents::default(),
            enabled_vulnerability_events: VulnerabilityEvents::default(),
            notification: "SMTP".to_string(),
            recipients,
            relay_server: relay_server.to_string(),
            sender_email_address: sender_email_address.to_string(),
            maximum_alerts: 1,
        })
    }
}

/// Ids of the SMTP alerts already configured for a site.
pub async fn list_smtp_alert_ids(api: &InsightVmApi, site_id: u32) -> Result<Vec<i64>> {
    let response = api
        .call(
            &format!("{site_id}/alerts/smtp"),
            ApiMethod::Get,
            &[],
            None,
            &BTreeMap::new(),
        )
        .await?;

    let parsed: SmtpAlertsResponse = response.json().await?;
    Ok(parsed.resources.into_iter().map(|a| a.id).collect())
}

/// Create the alert (POST) when it has no id, update it (PUT) otherwise.
/// Returns the alert id reported by the console.
pub async fn upsert_smtp_alert(
    api: &InsightVmApi,
    site_id: u32,
    alert: &SmtpAlertConfig,
) -> Result<Option<i64>> {
    if alert.name.is_empty() || alert.recipients.is_empty() {
        return Err(Error::Configuration(
            "Name of alert or alert recipients are missing".to_string(),
        ));
    }

    let method = if alert.id.is_some() {
        ApiMethod::Put
    } else {
        ApiMethod::Post
    };

    let body = serde_json::to_value(alert)?;
    let response = api
        .call(
            &format!("{site_id}/alerts/smtp"),
            method,
            &[],
            Some(&body),
            &BTreeMap::new(),
        )
        .await?;

    let parsed: AlertUpsertResponse = response.json().await?;
    Ok(parsed.id.or(alert.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_body_serializes_with_camel_case_defaults() {
        let alert = SmtpAlertConfig::new(
            "Test",
            vec!["ops@example.com".to_string()],
            "smtp.example.com",
            "scanner@example.com",
        )
        .unwrap();

        let body = serde_json::to_value(&alert).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["notification"], "SMTP");
        assert_eq!(body["maximumAlerts"], 1);
        assert_eq!(body["enabledScanEvents"]["failed"], false);
        assert_eq!(
            body["enabledVulnerabilityEvents"]["vulnerabilitySeverity"],
            "any_severity"
        );
        assert_eq!(body["relayServer"], "smtp.example.com");
    }

    #[test]
    fn update_body_carries_the_alert_id() {
        let mut alert = SmtpAlertConfig::new(
            "Test",
            vec!["ops@example.com".to_string()],
            "smtp.example.com",
            "scanner@example.com",
        )
        .unwrap();
        alert.id = Some(12);

        let body = serde_json::to_value(&alert).unwrap();
        assert_eq!(body["id"], 12);
    }

    #[test]
    fn missing_name_or_recipients_is_rejected() {
        let err = SmtpAlertConfig::new("", vec!["a@b".to_string()], "relay", "sender").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = SmtpAlertConfig::new("Test", vec![], "relay", "sender").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
