use crate::cli::{CheckArgs, GlobalFlags};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::CheckResponse;

/// Handle `verdict check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    let options = verdict_engine::CheckOptions {
        check_terms: args.check_terms,
        ..Default::default()
    };
    let report = verdict_engine::run_check(&ctx.project_root, &ctx.config, &options)?;
    let response = CheckResponse::from(report);
    output(&response, flags.format, flags.quiet)?;
    Ok(Outcome::from_clean(response.valid))
}
