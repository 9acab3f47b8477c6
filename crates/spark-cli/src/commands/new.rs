use crate::cli::root_commands::NewArgs;
use crate::commands::shared;

/// Handle `spark new`.
pub fn handle(args: &NewArgs) -> anyhow::Result<()> {
    let doc = if args.legacy {
        spark_markdown::new_legacy(&args.name)
    } else {
        spark_markdown::new_enhanced(&args.name)
    };
    if let Some(path) = &args.output {
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
    }
    shared::emit_markdown(&spark_markdown::generate(&doc), args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_enhanced_template_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.spark.md");
        let args = NewArgs {
            name: "Grid Ledger".into(),
            legacy: false,
            output: Some(path.clone()),
        };

        handle(&args).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("spark_type:"));
        assert!(written.contains("# Grid Ledger"));

        assert!(handle(&args).is_err());
    }

    #[test]
    fn legacy_template_has_three_phases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.spark.md");
        handle(&NewArgs {
            name: "Grid Ledger".into(),
            legacy: true,
            output: Some(path.clone()),
        })
        .unwrap();
        let doc = spark_markdown::parse(&std::fs::read_to_string(&path).unwrap());
        assert!(!doc.is_enhanced());
        assert_eq!(doc.name, "Grid Ledger");
    }
}
