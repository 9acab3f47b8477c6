use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `spark` binary.
#[derive(Debug, Parser)]
#[command(
    name = "spark",
    version,
    about = "Spark Assembly Lab - parse, audit, and submit spark documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for structured results: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to print for listings
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "spark", "--format", "table", "--limit", "10", "--verbose", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["spark", "audit", "a.spark.md", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Audit(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["spark", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn fmt_is_an_alias_of_generate() {
        let cli = Cli::try_parse_from(["spark", "fmt", "a.spark.md", "--check"])
            .expect("cli should parse");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(args.check);
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["spark", "whoami"]).expect("cli should parse");
        assert_eq!(cli.global_flags().color, ColorMode::Auto);
    }
}
