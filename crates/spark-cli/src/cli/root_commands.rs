use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Parse a spark and print its structure.
    Parse(FileArgs),
    /// Regenerate a spark's markdown.
    #[command(visible_alias = "fmt")]
    Generate(GenerateArgs),
    /// Audit a spark: status, flaws, merit plan.
    Audit(FileArgs),
    /// Check a spark against the export rules.
    Validate(FileArgs),
    /// Create a spark from a template.
    New(NewArgs),
    /// Convert a three-phase spark to the numbered-section shape.
    Promote(PromoteArgs),
    /// List sparks in a repository.
    List(RepoArgs),
    /// Download one spark's markdown.
    Fetch(FetchArgs),
    /// Open pull requests that change a spark.
    Prs(PrsArgs),
    /// Validate a spark and open a pull request with it.
    Submit(SubmitArgs),
    /// Show the GitHub handle behind the configured token.
    Whoami,
    /// Run the relay server.
    Serve(ServeArgs),
}

impl Commands {
    /// Whether the command works on local text only.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::Generate(_)
                | Self::Audit(_)
                | Self::Validate(_)
                | Self::New(_)
                | Self::Promote(_)
        )
    }
}

/// A spark file argument. `-` reads stdin.
#[derive(Clone, Debug, Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

/// Arguments for `spark generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    pub file: PathBuf,
    /// Rewrite the file in place.
    #[arg(long, conflicts_with = "check")]
    pub write: bool,
    /// Exit non-zero if regeneration would change the file.
    #[arg(long)]
    pub check: bool,
    /// Flag the spark for deletion.
    #[arg(long, conflicts_with = "unmark_deletion")]
    pub mark_deletion: bool,
    /// Clear a deletion flag.
    #[arg(long)]
    pub unmark_deletion: bool,
}

/// Arguments for `spark new`.
#[derive(Clone, Debug, Args)]
pub struct NewArgs {
    /// Display name of the new spark.
    pub name: String,
    /// Use the three-phase (Spark/Design/Logic) template.
    #[arg(long)]
    pub legacy: bool,
    /// Write to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `spark promote`.
#[derive(Clone, Debug, Args)]
pub struct PromoteArgs {
    pub file: PathBuf,
    /// Rewrite the file in place.
    #[arg(long)]
    pub write: bool,
}

/// Repository selection shared by remote commands.
#[derive(Clone, Debug, Default, Args)]
pub struct RepoArgs {
    /// `owner/repo` or a GitHub URL (defaults to relay.default_repo).
    #[arg(long)]
    pub repo: Option<String>,
    /// Branch (defaults to relay.default_branch).
    #[arg(long)]
    pub branch: Option<String>,
    /// Directory listed when code search finds nothing (defaults to relay.spark_dir).
    #[arg(long)]
    pub path: Option<String>,
}

/// Arguments for `spark fetch`.
#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Path of the spark inside the repository.
    pub path: String,
    #[arg(long)]
    pub repo: Option<String>,
    #[arg(long)]
    pub branch: Option<String>,
    /// Write to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the audit instead of the markdown.
    #[arg(long)]
    pub audit: bool,
}

/// Arguments for `spark prs`.
#[derive(Clone, Debug, Args)]
pub struct PrsArgs {
    /// Path of the spark inside the repository.
    pub path: String,
    #[arg(long)]
    pub repo: Option<String>,
}

/// Arguments for `spark submit`.
#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Local spark file to submit.
    pub file: PathBuf,
    /// Destination path inside the repository (defaults to `<spark_dir>/<file name>`).
    #[arg(long)]
    pub path: Option<String>,
    #[arg(long)]
    pub repo: Option<String>,
    /// Pull request title.
    #[arg(long)]
    pub title: Option<String>,
    /// Pull request description.
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for `spark serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Socket address to bind (overrides relay.listen).
    #[arg(long)]
    pub listen: Option<String>,
    /// Editor bundle to serve (overrides relay.static_dir).
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}
