//! Asset list and hostname search calls.
//!
//! Both are single-shot: one page, one request, no follow-up paging.

use super::types::{Asset, AssetsPage};
use super::{ApiMethod, InsightVmApi};
use crate::error::Result;
use serde_json::json;
use std::collections::BTreeMap;

/// Fetch one page of assets from `/api/3/assets`.
pub async fn list(api: &InsightVmApi, page: u32, page_size: u32) -> Result<Vec<Asset>> {
    let params = [
        ("page", page.to_string()),
        ("page_size", page_size.to_string()),
    ];

    let response = api
        .call("", ApiMethod::Get, &params, None, &BTreeMap::new())
        .await?;

    let parsed: AssetsPage = response.json().await?;
    Ok(parsed.resources)
}

/// Exact-match search on the `host-name` field via `/api/3/assets/search`.
pub async fn search_hostname(api: &InsightVmApi, hostname: &str) -> Result<Vec<Asset>> {
    let body = json!({
        "match": "all",
        "filters": [
            {
                "field": "host-name",
                "operator": "is",
                "value": hostname
            }
        ]
    });

    let response = api
        .call("search", ApiMethod::Post, &[], Some(&body), &BTreeMap::new())
        .await?;

    let parsed: AssetsPage = response.json().await?;
    Ok(parsed.resources)
}
