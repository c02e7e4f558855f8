//! Create or update the SMTP alerts for one InsightVM site.
//!
//! If the site already has SMTP alerts, each one is updated in place;
//! otherwise a single new alert is created.

use anyhow::Result;
use std::env;
use tracing::info;
use xdr_ivm_tools::api::insight_vm::alerts::{self, SmtpAlertConfig};
use xdr_ivm_tools::api::insight_vm::{InsightVmApi, InsightVmAuth};
use xdr_ivm_tools::config::{InsightVmConfig, SmtpConfig};
use xdr_ivm_tools::error::Error;

#[tokio::main]
async fn main() -> Result<()> {
    xdr_ivm_tools::init_tracing();

    let auth = InsightVmAuth::new(InsightVmConfig::from_env()?)?;
    let smtp = SmtpConfig::from_env()?;

    let site_id: u32 = env::var("IVM_SITE_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(70);
    let name = env::var("IVM_ALERT_NAME").unwrap_or_else(|_| "Scan alert".to_string());
    let recipients: Vec<String> = env::var("IVM_ALERT_RECIPIENTS")
        .map_err(|_| Error::Configuration("IVM_ALERT_RECIPIENTS must be set".to_string()))?
        .split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    let api = InsightVmApi::new(auth, "sites", (5, 30))?;
    let alert = SmtpAlertConfig::new(&name, recipients, &smtp.host, &smtp.sender)?;

    let alert_ids = alerts::list_smtp_alert_ids(&api, site_id).await?;

    if alert_ids.is_empty() {
        let id = alerts::upsert_smtp_alert(&api, site_id, &alert).await?;
        match id {
            Some(id) => println!("Created alert for site {site_id}: {id}"),
            None => println!("Created alert for site {site_id}"),
        }
    } else {
        for id in alert_ids {
            info!(id, "updating existing SMTP alert");
            let mut update = alert.clone();
            update.id = Some(id);
            alerts::upsert_smtp_alert(&api, site_id, &update).await?;
            println!("Updated alert for site {site_id}: {id}");
        }
    }

    Ok(())
}
