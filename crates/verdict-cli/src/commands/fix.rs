use crate::cli::{FixArgs, GlobalFlags};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::FixResponse;

/// Handle `verdict fix`. The outcome follows the post-repair report only.
pub fn handle(args: &FixArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let options = verdict_engine::FixOptions {
        check_terms: args.check_terms,
        fix_terms: args.fix_terms,
    };
    let run = verdict_engine::run_fix(&ctx.project_root, &ctx.config, &options)?;
    let response = FixResponse::from(run);
    output(&response, flags.format, flags.quiet)?;
    Ok(Outcome::from_clean(response.valid))
}
