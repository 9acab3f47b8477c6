use anyhow::Context;
use serde::Serialize;
use spark_config::SparkConfig;
use spark_core::responses::SparkFile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RepoArgs;
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;

/// One row of `spark list`.
#[derive(Debug, Serialize)]
struct ListRow {
    path: String,
    name: String,
    shape: String,
    status: String,
    stability: u8,
}

impl ListRow {
    fn from_file(file: &SparkFile) -> Self {
        let doc = spark_markdown::parse(&file.content);
        let audit = spark_audit::summarize(&doc);
        Self {
            path: file.path.clone(),
            name: doc.name,
            shape: doc.body.shape().to_string(),
            status: audit.status.to_string(),
            stability: audit.stable_count,
        }
    }
}

/// Handle `spark list`.
pub async fn handle(
    args: &RepoArgs,
    config: &SparkConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let repo = shared::resolve_repo(config, args.repo.as_deref())?;
    let branch = shared::resolve_branch(config, args.branch.as_deref());
    let dir = args.path.as_deref().unwrap_or(&config.relay.spark_dir);

    let progress = Progress::spinner(&format!("Listing sparks in {repo}"));
    let sparks = match shared::client(config).list_sparks(&repo, branch, dir).await {
        Ok(sparks) => sparks,
        Err(error) => {
            progress.finish_err("listing failed");
            return Err(error).with_context(|| format!("failed to list sparks in {repo}"));
        }
    };
    progress.finish_clear();

    let limit = flags
        .limit
        .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));
    let rows = sparks
        .iter()
        .take(limit)
        .map(ListRow::from_file)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spark_core::enums::AuditStatus;

    #[test]
    fn row_summarizes_the_spark() {
        let file = SparkFile {
            name: "mesh.spark.md".into(),
            path: "sparks/mesh.spark.md".into(),
            content: include_str!("../../../spark-markdown/tests/fixtures/legacy_mesh.spark.md")
                .into(),
        };
        let row = ListRow::from_file(&file);
        assert_eq!(row.name, "Neighborhood Solar Mesh");
        assert_eq!(row.shape, "legacy");
        assert_eq!(
            row.status,
            AuditStatus::from_stable_count(usize::from(row.stability)).to_string()
        );
    }
}
