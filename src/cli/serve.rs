use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

/// Flags win over `CARBNB_HOST` and `CARBNB_PORT`.
pub async fn run(host: Option<String>, port: Option<String>, config: AppConfig) -> Result<()> {
    let host = host.unwrap_or_else(|| config.host.clone());
    let port = port.unwrap_or_else(|| config.port.clone());
    api::serve(host, port, config).await
}
