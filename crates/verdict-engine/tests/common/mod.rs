#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use verdict_config::GovernanceConfig;
use verdict_engine::render_index;

pub const RECORDS_DIR: &str = "docs/decisions";
pub const INDEX: &str = "docs/decisions/README.md";

/// Body that satisfies every default rule, promotion gate included.
pub const FULL_BODY: &str = "\
## Context
Why we need this.

## Decision
What we chose.

## Consequences
What follows.

## Alternatives
- Option A
- Option B

## Participants
Alice, Bob
";

pub fn record(number: u32, title: &str, status: &str, body: &str) -> String {
    format!(
        "---\nid: ADR-{number:04}\ntitle: {title}\nstatus: {status}\n---\n\n# ADR-{number:04}: {title}\n\n{body}"
    )
}

pub struct Project {
    pub dir: TempDir,
    pub config: GovernanceConfig,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(RECORDS_DIR)).unwrap();
        Self {
            dir,
            config: GovernanceConfig::default(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn record_file(&self, file_name: &str, content: &str) -> &Self {
        self.write(&format!("{RECORDS_DIR}/{file_name}"), content)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).unwrap()
    }

    pub fn read_record(&self, file_name: &str) -> String {
        self.read(&format!("{RECORDS_DIR}/{file_name}"))
    }

    /// Write the index exactly as `fix` would.
    pub fn sync_index(&self) -> &Self {
        let index = render_index(self.root(), &self.config).unwrap();
        self.write(INDEX, &index)
    }
}
