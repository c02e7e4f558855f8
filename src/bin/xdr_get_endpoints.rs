//! List Cortex XDR endpoints and print their details.

use anyhow::Result;
use xdr_ivm_tools::api::cortex_xdr::XdrClient;
use xdr_ivm_tools::config::XdrConfig;

#[tokio::main]
async fn main() -> Result<()> {
    xdr_ivm_tools::init_tracing();

    let config = XdrConfig::from_env()?;
    let client = XdrClient::new(config)?;

    let endpoints = client.get_endpoint(10).await?;

    for (i, endpoint) in endpoints.iter().enumerate() {
        println!("Endpoint {}:", i + 1);
        println!("  Endpoint ID: {}", endpoint.endpoint_id);
        println!("  Hostname: {}", endpoint.endpoint_name);
        println!("  OS Type: {}", endpoint.os_type.as_deref().unwrap_or("unknown"));
        println!("  IP: {}", endpoint.ip.join(", "));
    }

    Ok(())
}
