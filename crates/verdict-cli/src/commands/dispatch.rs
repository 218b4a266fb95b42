use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, Outcome};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    match command {
        Commands::Check(args) => commands::check::handle(args, ctx, flags),
        Commands::Fix(args) => commands::fix::handle(args, ctx, flags),
        Commands::CheckStaged(args) => commands::check_staged::handle(args, ctx, flags),
        Commands::Index => commands::index::handle(ctx, flags),
    }
}
