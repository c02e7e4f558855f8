use serde::Deserialize;

/// Managed host record from the vulnerability console.
///
/// The console emits kebab-case field names (`host-name`, `last-scan-time`).
#[derive(Debug, Deserialize, Clone)]
pub struct Asset {
    pub id: i64,
    #[serde(rename = "host-name")]
    pub host_name: Option<String>,
    pub os: Option<String>,
    pub ip: Option<String>,
    pub mac: Option<String>,
    #[serde(rename = "last-scan-time")]
    pub last_scan_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssetsPage {
    #[serde(default)]
    pub resources: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpAlert {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SmtpAlertsResponse {
    #[serde(default)]
    pub resources: Vec<SmtpAlert>,
}

/// Body returned by alert create/update calls.
#[derive(Debug, Deserialize)]
pub struct AlertUpsertResponse {
    pub id: Option<i64>,
}
