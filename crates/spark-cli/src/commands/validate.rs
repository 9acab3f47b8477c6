use crate::cli::GlobalFlags;
use crate::cli::root_commands::FileArgs;
use crate::commands::shared;
use crate::output::output;

/// Handle `spark validate`. Prints the report and fails when invalid.
pub fn handle(args: &FileArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let doc = shared::load_document(&args.file)?;
    let report = spark_audit::validate(&doc);
    output(&report, flags.format)?;
    if !report.valid {
        anyhow::bail!(
            "{} failed validation with {} error(s)",
            args.file.display(),
            report.errors.len()
        );
    }
    Ok(())
}
