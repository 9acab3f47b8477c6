use anyhow::Context;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;

/// Handle `spark fetch`.
pub async fn handle(
    args: &FetchArgs,
    config: &SparkConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let repo = shared::resolve_repo(config, args.repo.as_deref())?;
    let branch = shared::resolve_branch(config, args.branch.as_deref());

    let progress = Progress::spinner(&format!("Fetching {}", args.path));
    let markdown = shared::client(config)
        .fetch_raw(&repo, branch, &args.path)
        .await
        .with_context(|| format!("failed to fetch {} from {repo}@{branch}", args.path));
    progress.finish_clear();
    let markdown = markdown?;

    if args.audit {
        let mut doc = spark_markdown::parse(&markdown);
        doc.source_path = Some(args.path.clone());
        return output(&spark_audit::mission_report(&doc), flags.format);
    }
    shared::emit_markdown(&markdown, args.output.as_deref())
}
