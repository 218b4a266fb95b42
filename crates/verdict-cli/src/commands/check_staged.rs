use std::path::PathBuf;

use crate::cli::{CheckStagedArgs, GlobalFlags};
use crate::commands::Outcome;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::CheckResponse;

/// Handle `verdict check-staged <files>...`.
pub fn handle(
    args: &CheckStagedArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Outcome> {
    let staged: Vec<PathBuf> = args.files.iter().map(PathBuf::from).collect();
    tracing::debug!(files = staged.len(), "checking staged files");

    let options = verdict_engine::CheckOptions {
        check_terms: args.check_terms,
        scope: verdict_engine::Scope::Staged(staged),
    };
    let report = verdict_engine::run_check(&ctx.project_root, &ctx.config, &options)?;
    let response = CheckResponse::from(report);
    output(&response, flags.format, flags.quiet)?;
    Ok(Outcome::from_clean(response.valid))
}
