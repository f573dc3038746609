use figment::Jail;
use sky_config::SkyConfig;

#[test]
fn local_toml_fills_config_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "skylark.toml",
            r#"
            [api]
            base_url = "https://staging.example.com"

            [general]
            default_limit = 5
            "#,
        )?;

        let config: SkyConfig = SkyConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://staging.example.com");
        assert_eq!(config.general.default_limit, 5);
        // Untouched sections keep their defaults
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "skylark.toml",
            r#"
            [api]
            base_url = "https://staging.example.com"
            "#,
        )?;
        jail.set_env("SKYLARK_API__BASE_URL", "https://prod.example.com");

        let config: SkyConfig = SkyConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://prod.example.com");
        Ok(())
    });
}
