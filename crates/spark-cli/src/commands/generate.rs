use std::path::Path;

use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared;

/// Handle `spark generate` / `spark fmt`.
pub fn handle(args: &GenerateArgs) -> anyhow::Result<()> {
    let original = shared::read_text(&args.file)?;
    let mut doc = spark_markdown::parse(&original);
    if args.mark_deletion {
        doc.marked_for_deletion = true;
    } else if args.unmark_deletion {
        doc.marked_for_deletion = false;
    }

    let regenerated = spark_markdown::generate(&doc);

    if args.check {
        if regenerated != original.replace("\r\n", "\n") {
            anyhow::bail!("{} is not in canonical form", args.file.display());
        }
        tracing::info!(file = %args.file.display(), "already canonical");
        return Ok(());
    }

    if args.write {
        if args.file == Path::new("-") {
            anyhow::bail!("--write needs a file, not stdin");
        }
        return shared::emit_markdown(&regenerated, Some(&args.file));
    }
    shared::emit_markdown(&regenerated, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CANONICAL: &str = include_str!("../../../spark-markdown/tests/fixtures/legacy_mesh.spark.md");

    fn args(file: &Path) -> GenerateArgs {
        GenerateArgs {
            file: file.to_path_buf(),
            write: false,
            check: false,
            mark_deletion: false,
            unmark_deletion: false,
        }
    }

    #[test]
    fn write_marks_deletion_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.spark.md");
        std::fs::write(&path, CANONICAL).unwrap();

        handle(&GenerateArgs {
            write: true,
            mark_deletion: true,
            ..args(&path)
        })
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("marked_for_deletion: true"));
        assert!(written.contains(spark_markdown::DELETION_NOTICE));
    }

    #[test]
    fn check_accepts_canonical_and_rejects_drift() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.spark.md");
        std::fs::write(&path, CANONICAL).unwrap();
        assert!(
            handle(&GenerateArgs {
                check: true,
                ..args(&path)
            })
            .is_ok()
        );

        std::fs::write(&path, format!("{CANONICAL}\n\n")).unwrap();
        let err = handle(&GenerateArgs {
            check: true,
            ..args(&path)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), format!("{} is not in canonical form", path.display()));
    }
}
