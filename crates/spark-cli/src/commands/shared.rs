use std::io::Read;
use std::path::Path;

use anyhow::Context;
use spark_config::SparkConfig;
use spark_core::SparkDocument;
use spark_github::{GithubClient, RepoRef};

/// Read a spark from `path`, or stdin when `path` is `-`.
pub fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read spark from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse the spark at `path`, remembering where it came from.
pub fn load_document(path: &Path) -> anyhow::Result<SparkDocument> {
    let text = read_text(path)?;
    let mut doc = spark_markdown::parse(&text);
    if path != Path::new("-") {
        doc.source_path = Some(path.display().to_string());
    }
    Ok(doc)
}

/// Write `text` to `path`, or print it verbatim when `path` is `None`.
pub fn emit_markdown(text: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

/// The requested repository, or the configured default.
pub fn resolve_repo(config: &SparkConfig, requested: Option<&str>) -> anyhow::Result<RepoRef> {
    let input = requested.unwrap_or(&config.relay.default_repo);
    RepoRef::parse(input).with_context(|| format!("cannot use repository '{input}'"))
}

pub fn resolve_branch<'a>(config: &'a SparkConfig, requested: Option<&'a str>) -> &'a str {
    requested.unwrap_or(&config.relay.default_branch)
}

pub fn client(config: &SparkConfig) -> GithubClient {
    GithubClient::new(&config.github)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_document_records_source_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.spark.md");
        std::fs::write(&path, "# Mesh\n").unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.name, "Mesh");
        assert_eq!(doc.source_path, Some(path.display().to_string()));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text(Path::new("/nonexistent/x.spark.md")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/x.spark.md"));
    }

    #[test]
    fn repo_defaults_from_config() {
        let config = SparkConfig::default();
        assert_eq!(
            resolve_repo(&config, None).unwrap().to_string(),
            "rvishravars/thecommons"
        );
        assert_eq!(resolve_branch(&config, Some("dev")), "dev");
        assert!(resolve_repo(&config, Some("nope")).is_err());
    }
}
