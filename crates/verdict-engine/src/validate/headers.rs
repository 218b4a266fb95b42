use std::collections::BTreeMap;

use verdict_core::{ErrorKind, ValidationError};

use super::ValidationContext;

pub(super) fn check_malformed_headers(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    ctx.unparsed
        .iter()
        .map(|record| {
            ValidationError::error(
                ErrorKind::MalformedHeader,
                record.number,
                record.error.to_string(),
            )
            .in_file(&record.rel_path)
        })
        .collect()
}

pub(super) fn check_record_numbers(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut owners: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for record in ctx.records {
        owners
            .entry(record.number)
            .or_default()
            .push(&record.rel_path);
    }
    for record in ctx.unparsed {
        if let Some(number) = record.number {
            owners.entry(number).or_default().push(&record.rel_path);
        }
    }

    let mut errors = Vec::new();
    for (number, files) in owners.iter().filter(|(_, files)| files.len() > 1) {
        for file in files {
            let others: Vec<&str> = files.iter().copied().filter(|f| f != file).collect();
            errors.push(
                ValidationError::error(
                    ErrorKind::DuplicateRecordNumber,
                    Some(*number),
                    format!("{} is also used by {}", ctx.token(*number), others.join(", ")),
                )
                .in_file(*file),
            );
        }
    }
    errors
}

pub(super) fn check_status(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for record in ctx.records {
        let message = match record.status() {
            None => "header has no `status`".to_string(),
            Some(status) if ctx.config.is_valid_status(&status) => continue,
            Some(status) => match ctx.config.normalize_status(&status) {
                Some(canonical) => format!(
                    "status '{status}' is not a valid status; `verdict fix` rewrites it to '{canonical}'"
                ),
                None => format!(
                    "status '{status}' is not one of: {}",
                    ctx.config.statuses.join(", ")
                ),
            },
        };
        errors.push(
            ValidationError::error(ErrorKind::InvalidStatus, Some(record.number), message)
                .in_file(&record.rel_path),
        );
    }
    errors
}
