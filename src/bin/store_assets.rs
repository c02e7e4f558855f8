//! Fetch one page of InsightVM assets and append them to a local SQLite
//! table. No dedup: re-running duplicates rows.

use anyhow::Result;
use std::path::Path;
use tracing::info;
use xdr_ivm_tools::api::insight_vm::{InsightVmApi, InsightVmAuth, assets};
use xdr_ivm_tools::config::InsightVmConfig;
use xdr_ivm_tools::store::{AssetStore, StoredAsset};

#[tokio::main]
async fn main() -> Result<()> {
    xdr_ivm_tools::init_tracing();

    let auth = InsightVmAuth::new(InsightVmConfig::from_env()?)?;
    let api = InsightVmApi::new(auth, "assets", (5, 30))?;

    let fetched = assets::list(&api, 1, 10).await?;

    let rows: Vec<StoredAsset> = fetched
        .iter()
        .map(|asset| StoredAsset {
            id: asset.id.to_string(),
            hostname: asset.host_name.clone(),
            os: asset.os.clone(),
            last_scan_date: asset.last_scan_time.clone(),
        })
        .collect();

    let store = AssetStore::open(Path::new("isvm_assets.db"))?;
    let written = store.insert_assets(&rows)?;

    info!(written, total = store.count()?, "stored InsightVM assets");

    Ok(())
}
