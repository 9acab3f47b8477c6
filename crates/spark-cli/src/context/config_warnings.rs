use spark_config::SparkConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SparkConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SparkConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.github.is_configured() && has_single_underscore_key(&env_keys, "SPARK_GITHUB") {
        warnings.push(
            "GitHub token appears unset while SPARK_GITHUB* env vars exist. Use double underscores (example: SPARK_GITHUB__TOKEN)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "SPARK_RELAY") {
        warnings.push(
            "SPARK_RELAY* env vars are ignored without double underscores (example: SPARK_RELAY__DEFAULT_REPO)."
                .to_string(),
        );
    }

    warnings
}

/// A key under `prefix` that is not the `prefix__field` form figment reads.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use spark_config::{GithubConfig, SparkConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = SparkConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SPARK_GITHUB_TOKEN".to_string(), "ghp_demo".to_string()),
                ("SPARK_RELAY_LISTEN".to_string(), "0.0.0.0:9000".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_for_nested_keys() {
        let config = SparkConfig {
            github: GithubConfig {
                token: "ghp_demo".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SPARK_GITHUB__TOKEN".to_string(), "ghp_demo".to_string()),
                ("SPARK_RELAY__LISTEN".to_string(), "0.0.0.0:9000".to_string()),
                ("SPARK_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
