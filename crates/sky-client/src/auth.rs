//! Session lifecycle client (`/auth/*`).

use reqwest::Method;
use sky_core::records::{AuthResponse, LoginRequest, RegisterRequest};

use crate::{ApiClient, error::ApiError, http::check_response};

/// Wire shape of `POST /auth/refresh-token`.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

impl ApiClient {
    /// `POST /auth/login`: exchange credentials for a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the service returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/auth/login")
                .json(credentials)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `POST /auth/create`: register an account; the service logs the new
    /// account in and returns a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn register(&self, user: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/auth/create")
                .json(user)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `POST /auth/refresh-token`: trade a refresh token for a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request, status, or parse failure.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthResponse, ApiError> {
        let resp = check_response(
            self.request(Method::POST, "/auth/refresh-token")
                .json(&RefreshRequest { refresh_token })
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    /// `GET /auth/logout`: invalidate the session server-side. Returns the
    /// service's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn logout(&self) -> Result<String, ApiError> {
        let resp = check_response(self.request(Method::GET, "/auth/logout").send().await?).await?;
        Ok(resp.text().await?)
    }

    /// `DELETE /auth/delete?email=`: delete the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on request or status failure.
    pub async fn delete_account(&self, email: &str) -> Result<String, ApiError> {
        let resp = check_response(
            self.request(Method::DELETE, "/auth/delete")
                .query(&[("email", email)])
                .send()
                .await?,
        )
        .await?;
        Ok(resp.text().await?)
    }
}
