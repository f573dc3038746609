use anyhow::Context;

/// Load layered configuration, with `.env` support for local development.
pub fn load_config() -> anyhow::Result<sky_config::SkyConfig> {
    sky_config::SkyConfig::load_with_dotenv().context("failed to load skylark configuration")
}
