mod project_root;

use anyhow::Context;
use std::path::{Path, PathBuf};

use verdict_config::GovernanceConfig;

use crate::cli::GlobalFlags;

pub use project_root::find_project_root;

/// Resolved project root and the configuration loaded for it.
#[derive(Debug)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: GovernanceConfig,
}

impl AppContext {
    /// Resolve the project root and load its layered configuration.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let project_root = resolve_project_root(flags.project.as_deref())?;
        let config = GovernanceConfig::load(&project_root, flags.config.as_deref().map(Path::new))
            .context("failed to load verdict configuration")?;
        tracing::debug!(root = %project_root.display(), "project resolved");
        Ok(Self {
            project_root,
            config,
        })
    }
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    Ok(find_project_root(&start).unwrap_or(start))
}
