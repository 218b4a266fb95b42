use verdict_core::{ErrorKind, ValidationError};
use verdict_parser::CrossReference;

use super::ValidationContext;

fn reference_errors(
    ctx: &ValidationContext<'_>,
    references: Vec<CrossReference>,
    record: Option<u32>,
    file: &str,
    line_offset: usize,
) -> Vec<ValidationError> {
    references
        .into_iter()
        .filter_map(|reference| {
            let line = reference.line + line_offset;
            let (kind, message) = if !reference.well_formed {
                (
                    ErrorKind::MalformedCrossReferenceSyntax,
                    format!(
                        "line {line}: '{}' should be written {}",
                        reference.text,
                        ctx.token(reference.number)
                    ),
                )
            } else if !ctx.known.contains(&reference.number) {
                (
                    ErrorKind::BrokenCrossReference,
                    format!("line {line}: {} does not resolve to a record", reference.text),
                )
            } else {
                return None;
            };
            Some(ValidationError::error(kind, record, message).in_file(file))
        })
        .collect()
}

pub(super) fn check_cross_references(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for record in ctx.records {
        let references = ctx.scanner.scan(&record.content, record.body_offset);
        errors.extend(reference_errors(
            ctx,
            references,
            Some(record.number),
            &record.rel_path,
            0,
        ));
    }

    if let Some(index) = ctx.index {
        for entry in &index.entries {
            let Some(annotation) = entry.annotation.as_deref() else {
                continue;
            };
            // Annotations sit on the definition line below the number line.
            let references = ctx.scanner.scan(annotation, 0);
            errors.extend(reference_errors(
                ctx,
                references,
                Some(entry.number),
                ctx.index_rel_path,
                entry.line,
            ));
        }
    }

    for document in ctx.documents {
        let references = ctx.scanner.scan(&document.content, 0);
        errors.extend(reference_errors(
            ctx,
            references,
            None,
            &document.rel_path,
            0,
        ));
    }

    errors
}
