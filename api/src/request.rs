//! Endpoint table and request construction.
//!
//! Payloads are opaque JSON objects. POST endpoints carry them as the body;
//! the GET endpoint flattens them into a query string using the same rules
//! a browser HTTP client applies to a params object.

use reqwest::{Method, Url};
use serde_json::{Map, Value};

use crate::config::ApiConfig;

/// Caller-supplied fields, passed through without modification.
pub type Payload = Map<String, Value>;

/// The five backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    Login,
    BookTrip,
    MakePayment,
    SearchFlights,
}

impl Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Register,
        Self::Login,
        Self::BookTrip,
        Self::MakePayment,
        Self::SearchFlights,
    ];

    /// Path relative to the configured origin.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
            Self::BookTrip => "/book-trip",
            Self::MakePayment => "/make-payment",
            Self::SearchFlights => "/search-flights",
        }
    }

    /// HTTP method used for this endpoint.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::SearchFlights => Method::GET,
            Self::Register | Self::Login | Self::BookTrip | Self::MakePayment => Method::POST,
        }
    }
}

/// One fully-resolved HTTP exchange, handed to a transport as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body; `None` for GET.
    pub body: Option<Payload>,
}

impl ApiRequest {
    /// Build the request for `endpoint` with `payload` as body or query.
    #[must_use]
    pub fn for_endpoint(config: &ApiConfig, endpoint: Endpoint, payload: &Payload) -> Self {
        let method = endpoint.method();
        let mut url = config.url_for(endpoint.path());

        if method == Method::GET {
            append_query(&mut url, payload);
            Self { method, url, body: None }
        } else {
            Self { method, url, body: Some(payload.clone()) }
        }
    }
}

/// Append `params` to `url` as `application/x-www-form-urlencoded` pairs.
///
/// `null` values are skipped, arrays become repeated `key[]` pairs, and
/// nested objects are sent as their JSON text. No `?` is added when nothing
/// survives.
pub(crate) fn append_query(url: &mut Url, params: &Payload) {
    let pairs = query_pairs(params);
    if pairs.is_empty() {
        return;
    }
    url.query_pairs_mut().extend_pairs(pairs);
}

fn query_pairs(params: &Payload) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                pairs.extend(
                    items
                        .iter()
                        .filter_map(query_text)
                        .map(|text| (array_key.clone(), text)),
                );
            }
            other => {
                if let Some(text) = query_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn query_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
