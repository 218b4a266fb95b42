//! Promotion gate and supersession rules.

use regex::Regex;
use std::sync::LazyLock;

use verdict_config::{GovernanceConfig, SupersessionPrerequisite};
use verdict_core::ids::number_from_str;
use verdict_core::{ErrorKind, Record, ValidationError};
use verdict_parser::mask_literal_blocks;

use super::ValidationContext;

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}(?:[-*+]|\d{1,9}[.)])\s+(?P<item>\S.*)$")
        .expect("list item pattern is valid")
});

/// Distinct list items of a section body, in first-seen order.
///
/// Items are compared case-insensitively after trimming; fenced lines never
/// count.
#[must_use]
pub fn alternatives(body: &str) -> Vec<String> {
    let masked = mask_literal_blocks(body);
    let mut seen = Vec::<String>::new();
    for line in masked.lines() {
        let Some(captures) = LIST_ITEM.captures(line) else {
            continue;
        };
        let item = captures["item"].trim().to_lowercase();
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// All bodies of a section name joined, `None` when the section is absent.
///
/// Duplicated sections are judged as they would read once merged.
fn combined_body(record: &Record, name: &str) -> Option<String> {
    let bodies: Vec<&str> = record
        .sections_named(name)
        .map(|section| section.body.as_str())
        .collect();
    (!bodies.is_empty()).then(|| bodies.join("\n"))
}

/// Reasons a record does not satisfy the promotion gate; empty when it does.
#[must_use]
pub fn gate_failures(record: &Record, config: &GovernanceConfig) -> Vec<String> {
    let gate = &config.promotion_gate;
    let mut failures = Vec::new();

    match combined_body(record, &gate.alternatives_section) {
        None => failures.push(format!(
            "missing '{}' section (at least {} alternatives required)",
            gate.alternatives_section, gate.min_alternatives
        )),
        Some(body) => {
            let count = alternatives(&body).len();
            if count < gate.min_alternatives {
                failures.push(format!(
                    "'{}' lists {count} distinct alternative(s), at least {} required",
                    gate.alternatives_section, gate.min_alternatives
                ));
            }
        }
    }

    for name in &gate.non_empty_sections {
        match combined_body(record, name) {
            None => failures.push(format!("missing '{name}' section")),
            Some(body) if body.trim().is_empty() => {
                failures.push(format!("'{name}' section is empty"));
            }
            Some(_) => {}
        }
    }

    failures
}

pub(super) fn check_promotion_gate(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let classes = &ctx.config.status_classes;
    let gate = &ctx.config.promotion_gate;
    let mut errors = Vec::new();

    for record in ctx.records {
        let Some(status) = record.status() else {
            continue;
        };
        if classes.is_accepted(&status) {
            for reason in gate_failures(record, ctx.config) {
                errors.push(
                    ValidationError::error(
                        ErrorKind::PromotionGateViolation,
                        Some(record.number),
                        format!("{status} record fails the promotion gate: {reason}"),
                    )
                    .in_file(&record.rel_path),
                );
            }
        } else if classes.is_proposed(&status) {
            let listed = combined_body(record, &gate.alternatives_section)
                .map_or(0, |body| alternatives(&body).len());
            if listed == 0 {
                errors.push(
                    ValidationError::warning(
                        ErrorKind::PromotionGateViolation,
                        Some(record.number),
                        format!(
                            "no alternatives listed in '{}' yet; acceptance requires at least {}",
                            gate.alternatives_section, gate.min_alternatives
                        ),
                    )
                    .in_file(&record.rel_path),
                );
            }
        }
    }

    errors
}

pub(super) fn check_supersession(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let prefix = ctx.config.record_prefix.as_str();
    let mut errors = Vec::new();

    for record in ctx.records {
        let push = |errors: &mut Vec<ValidationError>, kind, message: String| {
            errors.push(
                ValidationError::error(kind, Some(record.number), message)
                    .in_file(&record.rel_path),
            );
        };
        let superseded = record
            .status()
            .is_some_and(|status| ctx.config.status_classes.is_superseded(&status));
        let successor = record.header.superseded_by();

        if superseded && successor.is_none() {
            push(
                &mut errors,
                ErrorKind::SupersessionViolation,
                "superseded record does not name its successor in `superseded_by`".to_string(),
            );
        }

        if let Some(raw) = successor {
            match number_from_str(&raw, prefix) {
                Some(number) if number == record.number => push(
                    &mut errors,
                    ErrorKind::SupersessionViolation,
                    "record cannot supersede itself".to_string(),
                ),
                Some(number) if !ctx.known.contains(&number) => push(
                    &mut errors,
                    ErrorKind::BrokenCrossReference,
                    format!(
                        "`superseded_by` points at {}, which does not exist",
                        ctx.token(number)
                    ),
                ),
                Some(_) => {}
                None => match ctx.scanner.scan(&raw, 0).first() {
                    Some(token) if !token.well_formed => push(
                        &mut errors,
                        ErrorKind::MalformedCrossReferenceSyntax,
                        format!(
                            "`superseded_by` value '{raw}' should be written {}",
                            ctx.token(token.number)
                        ),
                    ),
                    _ => push(
                        &mut errors,
                        ErrorKind::BrokenCrossReference,
                        format!("`superseded_by` value '{raw}' is not a {prefix}-<NUMBER> reference"),
                    ),
                },
            }
        }

        if superseded && ctx.config.supersession.prerequisite == SupersessionPrerequisite::Accepted {
            let failures = gate_failures(record, ctx.config);
            if !failures.is_empty() {
                push(
                    &mut errors,
                    ErrorKind::SupersessionViolation,
                    format!(
                        "superseded record never passed the promotion gate: {}",
                        failures.join("; ")
                    ),
                );
            }
        }
    }

    errors
}
