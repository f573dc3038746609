use figment::Jail;
use sky_config::SkyConfig;

#[test]
fn env_var_overrides_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("SKYLARK_API__BASE_URL", "https://booking.example.com");

        let config: SkyConfig = SkyConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://booking.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_var_overrides_nested_general_section() {
    Jail::expect_with(|jail| {
        jail.set_env("SKYLARK_GENERAL__DEFAULT_LIMIT", "50");
        jail.set_env("SKYLARK_GENERAL__DEFAULT_CURRENCY", "EUR");

        let config: SkyConfig = SkyConfig::figment().extract()?;
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_currency, "EUR");
        Ok(())
    });
}
