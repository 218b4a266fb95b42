//! Status classes: which concrete statuses count as accepted, proposed, or
//! superseded for gate and supersession rules.

use serde::{Deserialize, Serialize};

fn one(status: &str) -> Vec<String> {
    vec![status.to_string()]
}

fn default_accepted() -> Vec<String> {
    one("accepted")
}

fn default_proposed() -> Vec<String> {
    one("proposed")
}

fn default_superseded() -> Vec<String> {
    one("superseded")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusClasses {
    #[serde(default = "default_accepted")]
    pub accepted: Vec<String>,
    #[serde(default = "default_proposed")]
    pub proposed: Vec<String>,
    #[serde(default = "default_superseded")]
    pub superseded: Vec<String>,
}

impl Default for StatusClasses {
    fn default() -> Self {
        Self {
            accepted: default_accepted(),
            proposed: default_proposed(),
            superseded: default_superseded(),
        }
    }
}

impl StatusClasses {
    #[must_use]
    pub fn is_accepted(&self, status: &str) -> bool {
        self.accepted.iter().any(|s| s == status)
    }

    #[must_use]
    pub fn is_proposed(&self, status: &str) -> bool {
        self.proposed.iter().any(|s| s == status)
    }

    #[must_use]
    pub fn is_superseded(&self, status: &str) -> bool {
        self.superseded.iter().any(|s| s == status)
    }

    /// Every status named by any class, with the class name.
    pub(crate) fn named(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.accepted
            .iter()
            .map(|s| ("status_classes.accepted", s.as_str()))
            .chain(
                self.proposed
                    .iter()
                    .map(|s| ("status_classes.proposed", s.as_str())),
            )
            .chain(
                self.superseded
                    .iter()
                    .map(|s| ("status_classes.superseded", s.as_str())),
            )
    }
}
