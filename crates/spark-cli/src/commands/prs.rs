use anyhow::Context;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PrsArgs;
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;

/// Handle `spark prs`.
pub async fn handle(args: &PrsArgs, config: &SparkConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let repo = shared::resolve_repo(config, args.repo.as_deref())?;

    let progress = Progress::spinner(&format!("Checking open pull requests in {repo}"));
    let prs = shared::client(config)
        .open_pull_requests(&repo, &args.path)
        .await
        .with_context(|| format!("failed to list pull requests for {}", args.path));
    progress.finish_clear();

    output(&prs?, flags.format)
}
