//! Layout of the generated index file.

use serde::{Deserialize, Serialize};

fn default_preamble() -> String {
    "# Decision Records\n\n\
     <!-- Generated by `verdict fix`. Edit the records, not this file. -->"
        .to_string()
}

fn default_partitions() -> Vec<IndexPartition> {
    vec![
        IndexPartition {
            heading: "Active".to_string(),
            statuses: vec!["proposed".to_string(), "accepted".to_string()],
        },
        IndexPartition {
            heading: "Historical".to_string(),
            statuses: vec![
                "rejected".to_string(),
                "superseded".to_string(),
                "deprecated".to_string(),
            ],
        },
    ]
}

/// A `## <heading>` group of index entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexPartition {
    pub heading: String,
    #[serde(default)]
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexLayout {
    /// Text written above the first partition.
    #[serde(default = "default_preamble")]
    pub preamble: String,

    /// Partitions in output order. Records matching none land in the last one.
    #[serde(default = "default_partitions")]
    pub partitions: Vec<IndexPartition>,
}

impl Default for IndexLayout {
    fn default() -> Self {
        Self {
            preamble: default_preamble(),
            partitions: default_partitions(),
        }
    }
}

impl IndexLayout {
    /// Position of the partition a status belongs to.
    #[must_use]
    pub fn partition_for(&self, status: Option<&str>) -> usize {
        status
            .and_then(|status| {
                self.partitions
                    .iter()
                    .position(|p| p.statuses.iter().any(|s| s == status))
            })
            .unwrap_or_else(|| self.partitions.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_default_partitions() {
        let layout = IndexLayout::default();
        assert_eq!(layout.partition_for(Some("accepted")), 0);
        assert_eq!(layout.partition_for(Some("superseded")), 1);
        assert_eq!(layout.partition_for(Some("bogus")), 1);
        assert_eq!(layout.partition_for(None), 1);
    }
}
