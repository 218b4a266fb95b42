//! # verdict-config
//!
//! Layered governance configuration for verdict using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERDICT_*` prefix, `__` as separator)
//! 2. Project-level `.verdict/config.toml`, or the file given by `--config`
//! 3. Built-in defaults
//!
//! The loaded [`GovernanceConfig`] is constructed once per invocation and
//! passed by reference to every parser, validator, and fixer. Nothing in the
//! workspace reads configuration from global state.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use verdict_config::GovernanceConfig;
//!
//! let config = GovernanceConfig::load(Path::new("."), None).expect("config");
//! assert!(config.is_valid_status("accepted"));
//! ```

mod error;
mod gate;
mod index;
mod policy;
mod statuses;

pub use error::ConfigError;
pub use gate::PromotionGateConfig;
pub use index::{IndexLayout, IndexPartition};
pub use policy::{SupersessionPrerequisite, SupersessionRule, TitlePolicy, TitleSource};
pub use statuses::StatusClasses;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Project-relative location of the config file.
pub const PROJECT_CONFIG_PATH: &str = ".verdict/config.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "VERDICT_";

fn default_record_prefix() -> String {
    "ADR".to_string()
}

fn default_records_dir() -> String {
    "docs/decisions".to_string()
}

fn default_index_file() -> String {
    "docs/decisions/README.md".to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn default_statuses() -> Vec<String> {
    strings(&["proposed", "accepted", "rejected", "superseded", "deprecated"])
}

fn default_required_sections() -> Vec<String> {
    strings(&["Context", "Decision", "Consequences"])
}

fn default_allowed_sections() -> Vec<String> {
    strings(&[
        "Context",
        "Decision",
        "Consequences",
        "Alternatives",
        "Participants",
        "References",
        "Notes",
    ])
}

fn default_conditional_sections() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([("rejected".to_string(), strings(&["Rejection Rationale"]))])
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GovernanceConfig {
    /// Record-type tag used in file names, index number lines, and
    /// cross-reference tokens (`ADR` in `ADR-0007`).
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,

    /// Project-relative directory holding the record files.
    #[serde(default = "default_records_dir")]
    pub records_dir: String,

    /// Project-relative path of the index file.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Extra documents scanned for cross-references with `--check-terms`.
    #[serde(default)]
    pub glossary_files: Vec<String>,

    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Known alternative spellings, mapped to a valid status.
    #[serde(default)]
    pub status_aliases: BTreeMap<String, String>,

    #[serde(default)]
    pub status_classes: StatusClasses,

    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<String>,

    #[serde(default = "default_allowed_sections")]
    pub allowed_sections: Vec<String>,

    /// Status → sections that are required on, and only allowed on, that status.
    #[serde(default = "default_conditional_sections")]
    pub conditional_sections: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub promotion_gate: PromotionGateConfig,

    #[serde(default)]
    pub title_policy: TitlePolicy,

    #[serde(default)]
    pub supersession: SupersessionRule,

    #[serde(default)]
    pub index: IndexLayout,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            record_prefix: default_record_prefix(),
            records_dir: default_records_dir(),
            index_file: default_index_file(),
            glossary_files: Vec::new(),
            statuses: default_statuses(),
            status_aliases: BTreeMap::new(),
            status_classes: StatusClasses::default(),
            required_sections: default_required_sections(),
            allowed_sections: default_allowed_sections(),
            conditional_sections: default_conditional_sections(),
            promotion_gate: PromotionGateConfig::default(),
            title_policy: TitlePolicy::default(),
            supersession: SupersessionRule::default(),
            index: IndexLayout::default(),
        }
    }
}

impl GovernanceConfig {
    /// Load and validate configuration for a project.
    ///
    /// `explicit` overrides the project-local file; unlike the project file,
    /// it must exist.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root, explicit)?.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top or extract directly.
    pub fn figment(project_root: &Path, explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    project_root.join(path)
                };
                if !path.is_file() {
                    return Err(ConfigError::NotFound { path });
                }
                tracing::debug!(path = %path.display(), "loading explicit config");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local_path = Self::project_config_path(project_root);
                if local_path.exists() {
                    tracing::debug!(path = %local_path.display(), "loading project config");
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_PATH)
    }

    /// Check internal consistency after extraction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.record_prefix.is_empty()
            || !self.record_prefix.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::invalid(
                "record_prefix",
                "must be a non-empty alphabetic tag",
            ));
        }
        if self.statuses.is_empty() {
            return Err(ConfigError::invalid("statuses", "must not be empty"));
        }
        for (class, status) in self.status_classes.named() {
            if !self.is_valid_status(status) {
                return Err(ConfigError::invalid(
                    class,
                    format!("'{status}' is not listed in statuses"),
                ));
            }
        }
        for (alias, target) in &self.status_aliases {
            if !self.is_valid_status(target) {
                return Err(ConfigError::invalid(
                    "status_aliases",
                    format!("'{alias}' maps to unknown status '{target}'"),
                ));
            }
        }
        for status in self.conditional_sections.keys() {
            if !self.is_valid_status(status) {
                return Err(ConfigError::invalid(
                    "conditional_sections",
                    format!("'{status}' is not listed in statuses"),
                ));
            }
        }
        if self.promotion_gate.min_alternatives == 0 {
            return Err(ConfigError::invalid(
                "promotion_gate.min_alternatives",
                "must be at least 1",
            ));
        }
        if self.index.partitions.is_empty() {
            return Err(ConfigError::invalid(
                "index.partitions",
                "at least one partition is required",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }

    /// Map a raw header status to its canonical spelling.
    ///
    /// Tries the exact value, then the configured aliases, then a trimmed,
    /// lowercased form of both. Returns `None` when nothing valid matches.
    #[must_use]
    pub fn normalize_status(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if self.is_valid_status(trimmed) {
            return Some(trimmed.to_string());
        }
        if let Some(target) = self.status_aliases.get(trimmed) {
            return Some(target.clone());
        }
        let folded = trimmed.to_lowercase();
        if self.is_valid_status(&folded) {
            return Some(folded);
        }
        self.status_aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == folded)
            .map(|(_, target)| target.clone())
    }

    /// Sections gated to the given status.
    #[must_use]
    pub fn conditional_for(&self, status: &str) -> &[String] {
        self.conditional_sections
            .get(status)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Statuses a conditional section is gated to; empty when not conditional.
    #[must_use]
    pub fn gating_statuses(&self, section: &str) -> Vec<&str> {
        self.conditional_sections
            .iter()
            .filter(|(_, sections)| sections.iter().any(|s| s == section))
            .map(|(status, _)| status.as_str())
            .collect()
    }

    #[must_use]
    pub fn is_allowed_section(&self, name: &str) -> bool {
        self.allowed_sections.iter().any(|s| s == name)
    }

    #[must_use]
    pub fn records_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.records_dir)
    }

    #[must_use]
    pub fn index_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.index_file)
    }

    #[must_use]
    pub fn glossary_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        self.glossary_files
            .iter()
            .map(|file| project_root.join(file))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GovernanceConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.record_prefix, "ADR");
        assert!(config.is_valid_status("superseded"));
        assert_eq!(config.promotion_gate.min_alternatives, 2);
        assert_eq!(config.title_policy.source, TitleSource::Header);
        assert_eq!(
            config.supersession.prerequisite,
            SupersessionPrerequisite::Any
        );
    }

    #[test]
    fn normalize_status_folds_case_and_aliases() {
        let mut config = GovernanceConfig::default();
        config
            .status_aliases
            .insert("Approved".to_string(), "accepted".to_string());

        assert_eq!(config.normalize_status("accepted").as_deref(), Some("accepted"));
        assert_eq!(config.normalize_status(" Accepted ").as_deref(), Some("accepted"));
        assert_eq!(config.normalize_status("Approved").as_deref(), Some("accepted"));
        assert_eq!(config.normalize_status("APPROVED").as_deref(), Some("accepted"));
        assert_eq!(config.normalize_status("maybe"), None);
    }

    #[test]
    fn conditional_lookup_both_directions() {
        let config = GovernanceConfig::default();
        assert_eq!(
            config.conditional_for("rejected").to_vec(),
            vec!["Rejection Rationale".to_string()]
        );
        assert!(config.conditional_for("accepted").is_empty());
        assert_eq!(config.gating_statuses("Rejection Rationale"), vec!["rejected"]);
        assert!(config.gating_statuses("Context").is_empty());
    }

    #[test]
    fn validate_rejects_class_outside_statuses() {
        let mut config = GovernanceConfig::default();
        config.status_classes.accepted.push("approved".to_string());
        let err = config.validate().expect_err("class must be a valid status");
        assert!(err.to_string().contains("status_classes.accepted"));
    }

    #[test]
    fn validate_rejects_zero_alternatives() {
        let mut config = GovernanceConfig::default();
        config.promotion_gate.min_alternatives = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn figment_builds_without_files() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let figment = GovernanceConfig::figment(temp.path(), None).expect("figment");
        let config: GovernanceConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config, GovernanceConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let err = GovernanceConfig::figment(temp.path(), Some(Path::new("nope.toml")))
            .expect_err("missing explicit config");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
