//! Remote service endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("http://localhost:8080")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base address of the remote booking gateway.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slash removed, so paths can be appended
    /// verbatim.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_local_gateway() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.trimmed_base_url(), "https://api.example.com");
    }
}
