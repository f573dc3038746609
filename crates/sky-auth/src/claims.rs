//! Session token payload decoding.
//!
//! The token is an opaque `header.payload.signature` string issued by the
//! remote auth service. Only the middle segment is read: base64url-decoded
//! (no padding), parsed as JSON, and mapped onto an [`Identity`]. No
//! signature verification happens client-side.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sky_core::Identity;
use sky_core::enums::Role;

use crate::error::AuthError;

/// Raw claims carried in the payload segment. Every field is optional;
/// the mapping below substitutes defaults rather than rejecting a token the
/// service considered good enough to issue.
#[derive(Debug, Deserialize)]
struct TokenPayload {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Decode a session token into an [`Identity`].
///
/// Mapping: `sub` (or `email`) → email, `name` → name with the email
/// local-part as fallback, `role` → [`Role`] with unknown tags collapsing
/// to `USER`, `id` → id defaulting to `0`.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] when the string does not have
/// exactly three dot-separated segments, the middle segment is not valid
/// base64url, or the decoded bytes are not a JSON object.
pub fn decode_identity(token: &str) -> Result<Identity, AuthError> {
    let payload = decode_payload(token)?;

    let email = payload.sub.or(payload.email).unwrap_or_default();
    let name = payload
        .name
        .filter(|name| !name.is_empty())
        .or_else(|| local_part(&email))
        .unwrap_or_else(|| String::from("User"));
    let role = payload.role.map_or(Role::User, |tag| Role::from_tag(&tag));

    Ok(Identity {
        id: payload.id.unwrap_or(0),
        name,
        email,
        role,
    })
}

/// Decode the `exp` claim for display purposes.
///
/// Expiry is never used to gate anything client-side: an expired token
/// stays "valid" locally until the remote service rejects it.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] on the same conditions as
/// [`decode_identity`], or when the `exp` claim is absent or not a valid
/// timestamp.
pub fn decode_expiry(token: &str) -> Result<DateTime<Utc>, AuthError> {
    let payload = decode_payload(token)?;
    let exp = payload
        .exp
        .ok_or_else(|| AuthError::MalformedToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))
}

fn decode_payload(token: &str) -> Result<TokenPayload, AuthError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken(
            "expected three dot-separated segments".into(),
        ));
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|error| AuthError::MalformedToken(format!("payload is not base64url: {error}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|error| AuthError::MalformedToken(format!("payload is not valid JSON: {error}")))
}

fn local_part(email: &str) -> Option<String> {
    email
        .split('@')
        .next()
        .filter(|part| !part.is_empty())
        .map(String::from)
}

/// Build an unsigned token around the given payload JSON, for tests across
/// this crate.
#[cfg(test)]
pub(crate) fn make_token(payload_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload_json);
    let signature = URL_SAFE_NO_PAD.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn decode_maps_all_fields() {
        let token = make_token(
            r#"{"id": 9, "sub": "ada@example.com", "role": "ADMIN", "name": "Ada"}"#,
        );
        let identity = decode_identity(&token).expect("token should decode");
        assert_eq!(identity.id, 9);
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(identity.name, "Ada");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn decode_missing_name_falls_back_to_local_part() {
        let token = make_token(r#"{"sub": "ada@example.com", "role": "USER"}"#);
        let identity = decode_identity(&token).expect("token should decode");
        assert_eq!(identity.name, "ada");
    }

    #[test]
    fn decode_missing_role_defaults_to_user() {
        let token = make_token(r#"{"sub": "ada@example.com"}"#);
        let identity = decode_identity(&token).expect("token should decode");
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.id, 0);
    }

    #[test]
    fn decode_unknown_role_defaults_to_user() {
        let token = make_token(r#"{"sub": "ada@example.com", "role": "SUPERUSER"}"#);
        let identity = decode_identity(&token).expect("token should decode");
        assert_eq!(identity.role, Role::User);
    }

    #[rstest]
    #[case::two_segments("header.payload")]
    #[case::four_segments("a.b.c.d")]
    #[case::bad_base64("header.!!!not-base64!!!.signature")]
    #[case::not_json("header.bm90LWpzb24.signature")]
    fn decode_rejects_malformed_tokens(#[case] token: &str) {
        let error = decode_identity(token).expect_err("token should be rejected");
        assert!(matches!(error, AuthError::MalformedToken(_)));
    }

    #[test]
    fn decode_expiry_reads_exp_claim() {
        let token = make_token(r#"{"sub": "ada@example.com", "exp": 1790000000}"#);
        let expiry = decode_expiry(&token).expect("expiry should decode");
        assert_eq!(expiry.timestamp(), 1_790_000_000);
    }

    #[test]
    fn decode_expiry_requires_exp_claim() {
        let token = make_token(r#"{"sub": "ada@example.com"}"#);
        let error = decode_expiry(&token).expect_err("missing exp should be rejected");
        assert!(error.to_string().contains("missing exp claim"));
    }
}
