//! Transport seam between the API client and an HTTP implementation.

use std::future::Future;

use crate::request::ApiRequest;

/// Performs one HTTP exchange.
///
/// Implementations must send the request exactly as given: no retries, no
/// extra headers, no status-based error mapping. `Response` and `Error` are
/// whatever the underlying HTTP stack produces; the API client never
/// inspects them.
pub trait Transport {
    type Response;
    type Error;

    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Self::Response, Self::Error>>;
}

/// `reqwest`-backed transport. Works natively and on `wasm32` (fetch).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing `reqwest` client (connection pool, proxies, ...).
    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;
    type Error = reqwest::Error;

    async fn send(&self, request: ApiRequest) -> Result<Self::Response, Self::Error> {
        let ApiRequest { method, url, body } = request;
        let builder = self.http.request(method, url);
        let builder = match body {
            Some(body) => builder.json(&body),
            None => builder,
        };
        builder.send().await
    }
}
