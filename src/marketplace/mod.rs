//! Client for the marketplace JSON API.
//!
//! Calls are authenticated by the session cookie. Reads are `POST`s
//! with an empty JSON request. Writes send a multipart form holding
//! one JSON part named after the resource; removals carry no body.

pub mod de;
mod payments;
mod reservations;
mod reviews;
mod schedules;
mod users;
mod vehicles;
mod withdrawals;

pub use payments::*;
pub use reservations::*;
pub use reviews::*;
pub use schedules::*;
pub use users::*;
pub use vehicles::*;
pub use withdrawals::*;

use http::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const JSON: &str = "application/json";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Error: {0}")]
    Status(u16),
    #[error("Error: Incorrect data")]
    UnexpectedContentType(Option<String>),
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode request for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Upstream HTTP status when the API answered with an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MarketplaceClient {
    base_url: String,
    session: Option<String>,
    http: Client,
}

impl MarketplaceClient {
    pub fn new(base_url: &str, session: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Same client acting for another caller. `None` keeps the current
    /// session.
    pub fn with_session(&self, session: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            session: session.or_else(|| self.session.clone()),
            http: self.http.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, JSON);
        match &self.session {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    /// Reads a resource.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!("POST {}", path);
        let resp = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, JSON)
            .send()
            .await?;
        decode(path, resp).await
    }

    /// Writes a resource as a multipart form with a single JSON part.
    pub(crate) async fn submit<B, T>(
        &self,
        method: Method,
        path: &str,
        part_name: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!("{} {} ({})", method, path, part_name);
        let json = serde_json::to_string(body).map_err(|source| ClientError::Encode {
            path: path.to_string(),
            source,
        })?;
        let part = Part::text(json).mime_str(JSON)?;
        let form = Form::new().part(part_name.to_string(), part);

        let resp = self.request(method, path).multipart(form).send().await?;
        decode(path, resp).await
    }

    /// Sends a bodiless state change such as a removal.
    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!("PATCH {}", path);
        let resp = self.request(Method::PATCH, path).send().await?;
        decode(path, resp).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        tracing::debug!("{} answered {}", path, status);
        return Err(ClientError::Status(status.as_u16()));
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if !content_type.as_deref().is_some_and(|ct| ct.contains(JSON)) {
        return Err(ClientError::UnexpectedContentType(content_type));
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}
