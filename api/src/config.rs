//! Backend origin configuration.
//!
//! DESIGN
//! ======
//! The origin is validated once, here, so building an endpoint URL later can
//! never fail. Callers choose the origin; [`DEFAULT_ORIGIN`] is only the
//! fallback used when nothing else is configured.

use reqwest::Url;

/// Origin used when no override is configured.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const ORIGIN_ENV_VAR: &str = "TRAVEL_API_ORIGIN";

/// Errors produced while building an [`ApiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The origin is not an absolute URL.
    #[error("invalid API origin `{origin}`: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    /// The origin parsed, but not as an `http`/`https` URL.
    #[error("unsupported API origin scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
}

/// Scheme + host + port prefix against which every API path is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: Url,
}

impl ApiConfig {
    /// Validate `origin` and build a config from it.
    ///
    /// A trailing `/` is ignored; any query string or fragment is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the origin is not an absolute `http` or
    /// `https` URL.
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let mut url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidOrigin {
            origin: origin.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_owned()));
        }
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidOrigin {
                origin: origin.to_owned(),
                reason: "origin cannot be used as a base URL".to_owned(),
            });
        }

        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { origin: url })
    }

    /// Config pointing at [`DEFAULT_ORIGIN`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`ApiConfig::new`].
    pub fn local() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_ORIGIN)
    }

    /// Build from [`ORIGIN_ENV_VAR`], falling back to [`DEFAULT_ORIGIN`] when
    /// the variable is unset or blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable holds an invalid origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ORIGIN_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::local(),
        }
    }

    /// The validated origin.
    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Absolute URL for `path` under this origin.
    ///
    /// Any path prefix carried by the origin (e.g. `http://host/api`) is kept.
    #[must_use]
    pub fn url_for(&self, path: &str) -> Url {
        let mut url = self.origin.clone();
        let prefix = self.origin.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{path}"));
        url
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
