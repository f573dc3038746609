//! Shared HTTP response helpers for the resource clients.
//!
//! Centralizes the status-code check (non-success → [`ApiError::Api`] with
//! the response body) so the resource modules stay focused on request
//! construction and response mapping. No retry handling lives here; a
//! failed request is the caller's problem to report.

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise maps to
/// [`ApiError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let resp = mock_response(401, "invalid token");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }
}
