//! HTTP client for the travel booking backend.
//!
//! This crate owns the five REST calls used by both `client` (the browser
//! SPA) and `cli`. Every operation issues exactly one request through a
//! [`Transport`] and hands back whatever the transport produced: responses
//! (including non-2xx ones) and errors both reach the caller untouched.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` validates the injected backend origin, `request` maps endpoints
//! to method + URL + body, `transport` performs the exchange, and `client`
//! exposes the named operations.

pub mod client;
pub mod config;
pub mod request;
pub mod transport;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError, DEFAULT_ORIGIN, ORIGIN_ENV_VAR};
pub use request::{ApiRequest, Endpoint, Payload};
pub use transport::{ReqwestTransport, Transport};
