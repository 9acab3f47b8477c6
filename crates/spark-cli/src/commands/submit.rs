use std::path::Path;

use anyhow::Context;
use spark_config::SparkConfig;
use spark_github::Submission;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;

/// Handle `spark submit`. Invalid sparks are never sent.
pub async fn handle(
    args: &SubmitArgs,
    config: &SparkConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    config.require_github_token()?;
    let submission = prepare(args, config)?;

    let progress = Progress::spinner(&format!("Opening pull request for {}", submission.path));
    let response = shared::client(config)
        .submit(&submission)
        .await
        .with_context(|| format!("failed to submit {}", submission.path));
    progress.finish_clear();

    output(&response?, flags.format)
}

/// Validate the spark and build the submission from its generated markdown,
/// so the pull request carries the same bytes `spark generate` prints.
fn prepare(args: &SubmitArgs, config: &SparkConfig) -> anyhow::Result<Submission> {
    let doc = shared::load_document(&args.file)?;

    let report = spark_audit::validate(&doc);
    if !report.valid {
        for error in &report.errors {
            eprintln!("  - {error}");
        }
        anyhow::bail!(
            "{} failed validation with {} error(s); not submitted",
            args.file.display(),
            report.errors.len()
        );
    }

    Ok(Submission {
        repo: shared::resolve_repo(config, args.repo.as_deref())?,
        path: destination(args, config)?,
        content: spark_markdown::generate(&doc),
        title: args.title.clone(),
        body: args.body.clone(),
    })
}

/// `--path`, else `<spark_dir>/<file name>`.
fn destination(args: &SubmitArgs, config: &SparkConfig) -> anyhow::Result<String> {
    if let Some(path) = &args.path {
        return Ok(path.trim_matches('/').to_string());
    }
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|_| args.file != Path::new("-"))
        .context("--path is required when submitting from stdin")?;
    Ok(format!(
        "{}/{file_name}",
        config.relay.spark_dir.trim_matches('/')
    ))
}
