use spark_config::SparkConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Run a command that needs no configuration or network.
pub fn dispatch_local(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => commands::parse::handle(&args, flags),
        Commands::Generate(args) => commands::generate::handle(&args),
        Commands::Audit(args) => commands::audit::handle(&args, flags),
        Commands::Validate(args) => commands::validate::handle(&args, flags),
        Commands::New(args) => commands::new::handle(&args),
        Commands::Promote(args) => commands::promote::handle(&args),
        other => anyhow::bail!("{other:?} needs configuration; use dispatch_remote"),
    }
}

/// Run a command that talks to GitHub or serves the relay.
pub async fn dispatch_remote(
    command: Commands,
    config: &SparkConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, config, flags).await,
        Commands::Fetch(args) => commands::fetch::handle(&args, config, flags).await,
        Commands::Prs(args) => commands::prs::handle(&args, config, flags).await,
        Commands::Submit(args) => commands::submit::handle(&args, config, flags).await,
        Commands::Whoami => commands::whoami::handle(config, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        local => dispatch_local(local, flags),
    }
}
