use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /auth/create`. The role is optional; the
/// user service defaults it to `USER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Token pair issued on login, registration, and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Account record returned by the user administration endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Server-assigned role tag, carried verbatim.
    pub role: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn auth_response_tolerates_missing_refresh_token() {
        let with: AuthResponse =
            serde_json::from_str(r#"{"token": "a.b.c", "refreshToken": "r.s.t"}"#)
                .expect("should parse");
        assert_eq!(with.refresh_token.as_deref(), Some("r.s.t"));

        let without: AuthResponse =
            serde_json::from_str(r#"{"token": "a.b.c", "refreshToken": null}"#)
                .expect("should parse");
        assert_eq!(without.refresh_token, None);
    }

    #[test]
    fn register_request_omits_absent_role() {
        let request = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            role: None,
        };
        let body = serde_json::to_value(&request).expect("should serialize");
        assert!(body.get("role").is_none());
    }
}
