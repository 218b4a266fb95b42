use clap::{Args, Subcommand};

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Also scan the configured glossary files for cross-references
    #[arg(long)]
    pub check_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FixArgs {
    /// Also scan the configured glossary files for cross-references
    #[arg(long)]
    pub check_terms: bool,

    /// Rewrite `ADR 7` / `ADR_7` references to `ADR-7` in records and glossaries
    #[arg(long)]
    pub fix_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CheckStagedArgs {
    /// Staged files, relative to the project root
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Also scan the configured glossary files for cross-references
    #[arg(long)]
    pub check_terms: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate every record and the index without writing anything
    Check(CheckArgs),
    /// Repair what can be repaired, then re-validate the whole tree
    Fix(FixArgs),
    /// Validate, reporting only problems in or about the given files
    CheckStaged(CheckStagedArgs),
    /// Print the index `fix` would write
    Index,
}
