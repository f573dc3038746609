use std::time::Duration;

use anyhow::Context;
use sky_auth::Session;
use sky_auth::token_store::{self, TokenKind};
use sky_client::ApiClient;
use sky_config::SkyConfig;

/// Shared application resources initialized once at startup.
///
/// The session lives here, scoped to the process. Command handlers receive
/// it through the context instead of reaching for a global.
pub struct AppContext {
    pub config: SkyConfig,
    pub session: Session,
    pub client: ApiClient,
}

impl AppContext {
    /// Restore the session from persisted state and wire the API client
    /// against the configured base address, attaching the stored access
    /// token when the session decoded cleanly.
    pub fn init(config: SkyConfig) -> anyhow::Result<Self> {
        let session = Session::initialize();
        let token = if session.is_authenticated() {
            token_store::load(TokenKind::Access)
        } else {
            None
        };

        let client = ApiClient::new(
            config.api.trimmed_base_url(),
            Duration::from_secs(config.api.timeout_secs),
            token,
        )
        .context("failed to initialize API client")?;

        Ok(Self {
            config,
            session,
            client,
        })
    }
}
