mod config_warnings;

use anyhow::Context;
use spark_config::SparkConfig;

pub use config_warnings::warn_unconfigured;

/// Load layered configuration, including a `.env` in the working directory.
pub fn load_config() -> anyhow::Result<SparkConfig> {
    let config = SparkConfig::load_with_dotenv().context("failed to load spark configuration")?;
    config.validate().context("invalid spark configuration")?;
    Ok(config)
}
