use verdict_engine::discover::relative_path;

use crate::cli::GlobalFlags;
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::IndexResponse;

/// Handle `verdict index`: print the regenerated index without writing it.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let content = verdict_engine::render_index(&ctx.project_root, &ctx.config)?;
    let file = relative_path(
        &ctx.project_root,
        &ctx.config.index_path(&ctx.project_root),
    );
    output(&IndexResponse { file, content }, flags.format, flags.quiet)?;
    Ok(Outcome::Clean)
}
