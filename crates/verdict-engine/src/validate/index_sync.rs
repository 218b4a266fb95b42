use std::collections::BTreeMap;

use verdict_core::{ErrorKind, IndexEntry, ValidationError};

use super::ValidationContext;

pub(super) fn check_index_sync(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let entries: &[IndexEntry] = ctx
        .index
        .map(|index| index.entries.as_slice())
        .unwrap_or_default();
    let index_file = ctx.index_rel_path;
    let error = |kind, number: u32, message: String| {
        ValidationError::error(kind, Some(number), message).in_file(index_file)
    };

    let mut listed: BTreeMap<u32, Vec<&IndexEntry>> = BTreeMap::new();
    for entry in entries {
        listed.entry(entry.number).or_default().push(entry);
    }

    let mut errors = Vec::new();

    for record in ctx.records {
        if listed.contains_key(&record.number) {
            continue;
        }
        let message = if ctx.index.is_some() {
            format!("{} is not listed in the index", ctx.token(record.number))
        } else {
            format!(
                "{} is not listed in the index ('{index_file}' does not exist)",
                ctx.token(record.number)
            )
        };
        errors.push(error(ErrorKind::IndexMissingEntry, record.number, message));
    }

    for (number, group) in &listed {
        if !ctx.known.contains(number) {
            for entry in group {
                errors.push(error(
                    ErrorKind::IndexStaleEntry,
                    *number,
                    format!(
                        "line {}: index lists {} but no such record exists",
                        entry.line,
                        ctx.token(*number)
                    ),
                ));
            }
            continue;
        }

        for repeated in group.iter().skip(1) {
            errors.push(error(
                ErrorKind::IndexStaleEntry,
                *number,
                format!(
                    "line {}: {} is listed more than once",
                    repeated.line,
                    ctx.token(*number)
                ),
            ));
        }

        let first = group[0];
        if let Some(record) = ctx.records.iter().find(|r| r.number == *number) {
            if first.title != record.title {
                errors.push(error(
                    ErrorKind::IndexTitleMismatch,
                    *number,
                    format!(
                        "line {}: index title '{}' does not match record title '{}'",
                        first.line, first.title, record.title
                    ),
                ));
            }
        }
    }

    errors
}
