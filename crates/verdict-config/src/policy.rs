//! Policies for questions the record format leaves open.

use serde::{Deserialize, Serialize};

/// Which title wins when the header `title` and the visible `# ` heading differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// The header field is authoritative; the heading is rewritten.
    #[default]
    Header,
    /// The visible heading is authoritative; the header field is rewritten.
    Heading,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TitlePolicy {
    #[serde(default)]
    pub source: TitleSource,
}

/// What a record must have satisfied before it may be superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupersessionPrerequisite {
    /// Any status may move to superseded.
    #[default]
    Any,
    /// Superseded records must still satisfy the promotion gate, i.e. they
    /// must have been validly accepted.
    Accepted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SupersessionRule {
    #[serde(default)]
    pub prerequisite: SupersessionPrerequisite,
}
