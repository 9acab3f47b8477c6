use crate::cli::root_commands::PromoteArgs;
use crate::commands::shared;

/// Handle `spark promote`.
pub fn handle(args: &PromoteArgs) -> anyhow::Result<()> {
    let doc = shared::load_document(&args.file)?;
    if doc.is_enhanced() {
        tracing::info!(file = %args.file.display(), "already uses numbered sections");
    }
    let promoted = spark_markdown::generate(&doc.into_enhanced());
    let target = args.write.then_some(args.file.as_path());
    shared::emit_markdown(&promoted, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn promotes_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.spark.md");
        std::fs::write(
            &path,
            include_str!("../../../spark-markdown/tests/fixtures/legacy_mesh.spark.md"),
        )
        .unwrap();

        handle(&PromoteArgs {
            file: path.clone(),
            write: true,
        })
        .unwrap();

        let doc = spark_markdown::parse(&std::fs::read_to_string(&path).unwrap());
        assert!(doc.is_enhanced());
        assert_eq!(doc.name, "Neighborhood Solar Mesh");
    }
}
