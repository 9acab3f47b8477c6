use anyhow::Context;
use spark_config::SparkConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `spark serve`.
pub async fn handle(args: &ServeArgs, config: &SparkConfig) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(listen) = &args.listen {
        config.relay.listen.clone_from(listen);
    }
    if let Some(dir) = &args.static_dir {
        if !dir.join("index.html").is_file() {
            anyhow::bail!("{} has no index.html", dir.display());
        }
        config.relay.static_dir = Some(dir.clone());
    }

    spark_relay::serve(&config).await.context("relay server failed")
}
