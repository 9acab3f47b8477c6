use crate::cli::GlobalFlags;
use crate::cli::root_commands::FileArgs;
use crate::commands::shared;
use crate::output::output;

/// Handle `spark audit`.
pub fn handle(args: &FileArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let doc = shared::load_document(&args.file)?;
    output(&spark_audit::mission_report(&doc), flags.format)
}
