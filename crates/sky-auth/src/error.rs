use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed session token: {0}")]
    MalformedToken(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("no refresh token stored — run `sky auth login`")]
    MissingRefreshToken,
}
