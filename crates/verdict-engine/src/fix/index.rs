//! Index regenerator.
//!
//! The index is derived entirely from the record set: same records, same
//! bytes. Hand edits to the index are overwritten by `verdict fix`.

use std::fmt::Write as _;
use std::path::{Component, Path};

use verdict_config::GovernanceConfig;
use verdict_core::Record;
use verdict_core::ids::{format_token, number_from_str};
use verdict_parser::{escape_title, link_destination};

/// `target` as a `/`-separated link relative to the directory `from_dir`.
#[must_use]
pub fn relative_link(from_dir: &Path, target: &Path) -> String {
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let to: Vec<Component<'_>> = target.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    std::iter::repeat_n("..".to_string(), from.len() - common)
        .chain(
            to[common..]
                .iter()
                .map(|component| component.as_os_str().to_string_lossy().to_string()),
        )
        .collect::<Vec<_>>()
        .join("/")
}

fn annotation(record: &Record, prefix: &str) -> String {
    match record.header.superseded_by() {
        Some(raw) => match number_from_str(&raw, prefix) {
            Some(number) => format!(" — superseded by {}", format_token(prefix, number)),
            None => format!(" — superseded by {raw}"),
        },
        None => String::new(),
    }
}

/// Render the full index for `records`.
///
/// `index_dir` is the directory the index lives in; entry links are
/// relative to it.
#[must_use]
pub fn regenerate_index(records: &[Record], config: &GovernanceConfig, index_dir: &Path) -> String {
    let prefix = config.record_prefix.as_str();
    let layout = &config.index;

    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.rel_path.cmp(&b.rel_path)));

    let mut partitions: Vec<Vec<&Record>> = vec![Vec::new(); layout.partitions.len()];
    for record in sorted {
        let slot = layout.partition_for(record.status().as_deref());
        if let Some(partition) = partitions.get_mut(slot) {
            partition.push(record);
        }
    }

    let mut out = String::new();
    let preamble = layout.preamble.trim();
    if !preamble.is_empty() {
        out.push_str(preamble);
        out.push('\n');
    }

    for (partition, members) in layout.partitions.iter().zip(&partitions) {
        if members.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "## {}", partition.heading);
        for record in members {
            let _ = write!(
                out,
                "\n{}\n: [{}]({}){}\n",
                format_token(prefix, record.number),
                escape_title(&record.title),
                link_destination(&relative_link(index_dir, &record.path)),
                annotation(record, prefix),
            );
        }
    }

    if out.is_empty() {
        out.push('\n');
    }
    out
}
