use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use http::HeaderMap;
use http::header::COOKIE;

use crate::core::AppConfig;
use crate::marketplace::MarketplaceClient;

pub struct AppState {
    pub client: MarketplaceClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = MarketplaceClient::new(&config.api_url, config.session_cookie.clone());
        Self { client, config }
    }
}

pub type SharedState = Arc<RwLock<AppState>>;

/// Client acting for the caller: the request's own `Cookie` header
/// when it sent one, otherwise the configured session.
pub fn upstream_client(
    state: &SharedState,
    headers: &HeaderMap,
) -> anyhow::Result<MarketplaceClient> {
    let cookie = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string);
    let state = state.read().map_err(|_| anyhow!("App state lock poisoned"))?;
    Ok(state.client.with_session(cookie))
}

pub fn page_size(state: &SharedState) -> anyhow::Result<usize> {
    let state = state.read().map_err(|_| anyhow!("App state lock poisoned"))?;
    Ok(state.config.page_size)
}
