//! Check whether Cortex XDR-reported hosts are present in the InsightVM
//! asset inventory. One pass, one line of output per hostname.

use anyhow::Result;
use tracing::{info, warn};
use xdr_ivm_tools::api::cortex_xdr::XdrClient;
use xdr_ivm_tools::api::insight_vm::{InsightVmApi, InsightVmAuth, assets};
use xdr_ivm_tools::compare::compare_hostnames;
use xdr_ivm_tools::config::{InsightVmConfig, XdrConfig};

#[tokio::main]
async fn main() -> Result<()> {
    xdr_ivm_tools::init_tracing();

    let xdr_client = XdrClient::new(XdrConfig::from_env()?)?;
    let auth = InsightVmAuth::new(InsightVmConfig::from_env()?)?;
    let ivm_assets = InsightVmApi::new(auth, "assets", (5, 30))?;

    // Confirm both consoles answer before doing real work.
    let status = xdr_client.check_base_url().await?;
    info!(status, "connected to Cortex XDR");
    let status = ivm_assets.check_base_url().await?;
    info!(status, "connected to InsightVM");

    let endpoints = xdr_client.get_endpoints().await?;

    let mut xdr_hostnames = Vec::new();
    for endpoint in &endpoints {
        match &endpoint.hostname {
            Some(hostname) => xdr_hostnames.push(hostname.clone()),
            None => warn!("Hostname not found in Cortex XDR asset"),
        }
    }

    // Confirm membership per hostname with an exact-match search, then
    // report from the two lists.
    let mut present = Vec::new();
    for hostname in &xdr_hostnames {
        let matches = assets::search_hostname(&ivm_assets, hostname).await?;
        if !matches.is_empty() {
            present.push(hostname.clone());
        }
    }

    for result in compare_hostnames(&xdr_hostnames, &present) {
        if result.found {
            info!("{} found in InsightVM", result.hostname);
        } else {
            info!("{} not found in InsightVM", result.hostname);
        }
    }

    Ok(())
}
