//! # sky-client
//!
//! Stateless HTTP resource clients for the Skylark flight-booking services.
//!
//! Each operation is one outbound request (method, path, query, body) and
//! one inbound mapping to a typed record. No retries, no caching, no
//! batching. Failure is never interpreted here; it is converted to
//! [`ApiError`] and propagated unchanged to the command handler, which owns
//! user-facing messaging.

mod admin;
mod auth;
mod bookings;
mod error;
mod flights;
mod http;
mod payments;
mod settle;

pub use error::ApiError;
pub use settle::Sections;

use std::time::Duration;

/// Client for the remote booking gateway.
///
/// Holds the base address and, when a session exists, the bearer token
/// attached to every request. The remote service re-checks authorization on
/// each call; the client itself gates nothing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Build a request for `path`, attaching the bearer token when present.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(
            "http://localhost:8080/",
            Duration::from_secs(5),
            None,
        )
        .expect("client should build");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn token_is_optional() {
        let client = ApiClient::new("http://localhost:8080", Duration::from_secs(5), None)
            .expect("client should build");
        assert!(client.token.is_none());
    }
}
