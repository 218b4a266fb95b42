//! Promotion-gate thresholds.

use serde::{Deserialize, Serialize};

fn default_alternatives_section() -> String {
    "Alternatives".to_string()
}

/// Minimum distinct list items in the alternatives section.
const fn default_min_alternatives() -> usize {
    2
}

fn default_non_empty_sections() -> Vec<String> {
    vec!["Participants".to_string()]
}

/// Rules a record must satisfy to validly hold an accepted status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromotionGateConfig {
    /// Section whose list items enumerate the considered alternatives.
    #[serde(default = "default_alternatives_section")]
    pub alternatives_section: String,

    #[serde(default = "default_min_alternatives")]
    pub min_alternatives: usize,

    /// Sections that must be present with non-blank bodies.
    #[serde(default = "default_non_empty_sections")]
    pub non_empty_sections: Vec<String>,
}

impl Default for PromotionGateConfig {
    fn default() -> Self {
        Self {
            alternatives_section: default_alternatives_section(),
            min_alternatives: default_min_alternatives(),
            non_empty_sections: default_non_empty_sections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let gate = PromotionGateConfig::default();
        assert_eq!(gate.alternatives_section, "Alternatives");
        assert_eq!(gate.min_alternatives, 2);
        assert_eq!(gate.non_empty_sections, vec!["Participants".to_string()]);
    }
}
