use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "2323";
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the marketplace API.
    pub api_url: String,
    /// Cookie sent upstream when a request carries none of its own.
    pub session_cookie: Option<String>,
    pub page_size: usize,
    pub host: String,
    pub port: String,
}

impl AppConfig {
    /// Builds the config from a variable lookup. Unset, blank or
    /// unparseable values fall back to their defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let page_size = match var("CARBNB_PAGE_SIZE").map(|v| v.trim().parse::<usize>()) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                tracing::warn!("Ignoring invalid CARBNB_PAGE_SIZE");
                DEFAULT_PAGE_SIZE
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Self {
            api_url: var("CARBNB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            session_cookie: var("CARBNB_SESSION_COOKIE"),
            page_size,
            host: var("CARBNB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: var("CARBNB_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }
}
