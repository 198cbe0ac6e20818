//! The five backend operations.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is translated. Each call returns the transport's own
//! `Result`, so a 401 from `/login` arrives as an ordinary response and a
//! connection failure arrives as the transport's error value.

use tracing::debug;

use crate::config::ApiConfig;
use crate::request::{ApiRequest, Endpoint, Payload};
use crate::transport::{ReqwestTransport, Transport};

/// Result of one API call: exactly what the transport returned.
pub type ApiResult<T> = Result<<T as Transport>::Response, <T as Transport>::Error>;

/// Backend client bound to one origin and one transport.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Client using a fresh `reqwest` transport.
    #[must_use]
    pub fn with_reqwest(config: ApiConfig) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}

impl<T> ApiClient<T> {
    #[must_use]
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> ApiClient<T> {
    /// `POST /register` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn register_user(&self, data: &Payload) -> ApiResult<T> {
        self.call(Endpoint::Register, data).await
    }

    /// `POST /login` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn login_user(&self, data: &Payload) -> ApiResult<T> {
        self.call(Endpoint::Login, data).await
    }

    /// `POST /book-trip` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn book_trip(&self, data: &Payload) -> ApiResult<T> {
        self.call(Endpoint::BookTrip, data).await
    }

    /// `POST /make-payment` with `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn make_payment(&self, data: &Payload) -> ApiResult<T> {
        self.call(Endpoint::MakePayment, data).await
    }

    /// `GET /search-flights` with `params` encoded as the query string.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn search_flights(&self, params: &Payload) -> ApiResult<T> {
        self.call(Endpoint::SearchFlights, params).await
    }

    /// Issue the request for `endpoint`. The named operations delegate here.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    pub async fn call(&self, endpoint: Endpoint, payload: &Payload) -> ApiResult<T> {
        let request = ApiRequest::for_endpoint(&self.config, endpoint, payload);
        debug!(method = %request.method, url = %request.url, "api request");
        self.transport.send(request).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
