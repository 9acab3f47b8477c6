use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `SPARK_*` variable could not be read or has the wrong type.
    #[error("failed to load spark-lab config: {0}")]
    Load(#[from] figment::Error),

    #[error("no GitHub token configured; set github.token or SPARK_GITHUB__TOKEN")]
    MissingToken,

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_names_both_sources() {
        let message = ConfigError::MissingToken.to_string();
        assert!(message.contains("github.token"));
        assert!(message.contains("SPARK_GITHUB__TOKEN"));
    }
}
