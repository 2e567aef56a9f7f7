use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::TransportError;

/// JSON client bound to one base address.
///
/// Sends JSON `Accept`/`Content-Type` headers and keeps a cookie store so
/// session cookies set by the service ride along on later calls.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns `TransportError` on network failures, non-2xx responses or
    /// bodies that are not JSON.
    pub async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path)?;
        self.send(Method::GET, self.client.get(url.clone()), &url).await
    }

    /// # Errors
    ///
    /// Returns `TransportError` on network failures, non-2xx responses or
    /// bodies that are not JSON.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(Method::POST, self.client.post(url.clone()).json(body), &url)
            .await
    }

    /// # Errors
    ///
    /// Returns `TransportError` on network failures, non-2xx responses or
    /// bodies that are not JSON.
    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(Method::PATCH, self.client.patch(url.clone()).json(body), &url)
            .await
    }

    fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| TransportError::InvalidPath {
                path: path.to_string(),
                source,
            })
    }

    async fn send(
        &self,
        method: Method,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<Value, TransportError> {
        let started = Instant::now();
        let response = request.send().await.inspect_err(|err| {
            warn!(%method, path = url.path(), error = %err, "request failed");
        })?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            %method,
            path = url.path(),
            status = status.as_u16(),
            bytes = text.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "response received"
        );

        if !status.is_success() {
            let body = error_body(&text, status);
            return Err(TransportError::Status { status, body });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// The server's JSON error body when it sent one, else its text, else the
/// status reason.
fn error_body(text: &str, status: reqwest::StatusCode) -> Value {
    if let Ok(json) = serde_json::from_str::<Value>(text) {
        return json;
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Value::String(
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        )
    } else {
        Value::String(trimmed.to_string())
    }
}
