use verdict_core::{ErrorKind, Record, ValidationError};

use super::ValidationContext;

fn violation(record: &Record, kind: ErrorKind, message: String) -> ValidationError {
    ValidationError::error(kind, Some(record.number), message).in_file(&record.rel_path)
}

pub(super) fn check_required(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    ctx.records
        .iter()
        .flat_map(|record| {
            ctx.config
                .required_sections
                .iter()
                .filter(|name| !record.has_section(name))
                .map(move |name| {
                    violation(
                        record,
                        ErrorKind::MissingRequiredSection,
                        format!("missing required section '{name}'"),
                    )
                })
        })
        .collect()
}

/// Conditional sections are left to [`check_conditional`].
pub(super) fn check_whitelist(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for record in ctx.records {
        for name in record.section_counts().into_keys() {
            if ctx.config.is_allowed_section(name) || !ctx.config.gating_statuses(name).is_empty() {
                continue;
            }
            errors.push(violation(
                record,
                ErrorKind::UnexpectedSection,
                format!("section '{name}' is not allowed"),
            ));
        }
    }
    errors
}

pub(super) fn check_conditional(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for record in ctx.records {
        let status = record.status();

        for name in record.section_counts().into_keys() {
            let gating = ctx.config.gating_statuses(name);
            if gating.is_empty() || status.as_deref().is_some_and(|s| gating.contains(&s)) {
                continue;
            }
            errors.push(violation(
                record,
                ErrorKind::ConditionalSectionViolation,
                format!(
                    "section '{name}' is only allowed when status is {} (status is {})",
                    gating.join(" or "),
                    status.as_deref().unwrap_or("missing"),
                ),
            ));
        }

        let Some(status) = status else {
            continue;
        };
        for name in ctx.config.conditional_for(&status) {
            if !record.has_section(name) {
                errors.push(violation(
                    record,
                    ErrorKind::MissingRequiredSection,
                    format!("section '{name}' is required when status is {status}"),
                ));
            }
        }
    }
    errors
}

pub(super) fn check_duplicates(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for record in ctx.records {
        for (name, count) in record.section_counts() {
            if count > 1 {
                errors.push(violation(
                    record,
                    ErrorKind::DuplicateSection,
                    format!("section '{name}' appears {count} times"),
                ));
            }
        }
    }
    errors
}
