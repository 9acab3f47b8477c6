//! TOML layering through figment, isolated with `figment::Jail`.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use std::path::Path;
use spark_config::{PROJECT_CONFIG_PATH, SparkConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[github]
token = "ghp_toml"
api_base = "http://localhost:9999"
timeout_secs = 3

[relay]
listen = "127.0.0.1:3001"
cache_ttl_secs = 15
default_repo = "acme/ideas"
static_dir = "dist"
"#,
        )?;

        let config: SparkConfig = Figment::from(Serialized::defaults(SparkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.github.token(), Some("ghp_toml"));
        assert_eq!(config.github.api_base, "http://localhost:9999");
        assert_eq!(config.github.raw_base, "https://raw.githubusercontent.com");
        assert_eq!(config.github.timeout_secs, 3);
        assert_eq!(config.relay.listen, "127.0.0.1:3001");
        assert_eq!(config.relay.cache_ttl_secs, 15);
        assert_eq!(config.relay.default_repo_parts(), Some(("acme", "ideas")));
        assert_eq!(config.relay.default_branch, "main");
        assert_eq!(config.relay.static_dir.as_deref(), Some(Path::new("dist")));
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".spark-lab")?;
        jail.create_file(
            PROJECT_CONFIG_PATH,
            r#"
[relay]
spark_dir = "ideas"
"#,
        )?;

        let config = SparkConfig::load().expect("config loads");
        assert_eq!(config.relay.spark_dir, "ideas");
        assert_eq!(config.relay.cache_ttl_secs, 60);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_load_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".spark-lab")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[relay]\ncache_ttl_secs = \"soon\"\n")?;

        let err = SparkConfig::load().unwrap_err();
        assert!(err.to_string().starts_with("failed to load spark-lab config:"));
        Ok(())
    });
}
