use anyhow::Context;
use serde_json::json;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output::output;

/// Handle `spark whoami`.
pub async fn handle(config: &SparkConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    config.require_github_token()?;
    let login = shared::client(config)
        .current_user()
        .await
        .context("failed to resolve the GitHub user")?;
    output(&json!({ "login": login }), flags.format)
}
