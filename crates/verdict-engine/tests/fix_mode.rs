mod common;

use pretty_assertions::assert_eq;
use verdict_core::ErrorKind;
use verdict_engine::{CheckOptions, FixOptions, FixRun, run_check, run_fix};
use verdict_parser::parse_index;

use common::{FULL_BODY, INDEX, Project, record};

fn fix(project: &Project) -> FixRun {
    run_fix(project.root(), &project.config, &FixOptions::default()).unwrap()
}

#[test]
fn fix_writes_missing_index_and_then_checks_clean() {
    let project = Project::new();
    project
        .record_file("ADR-0001-a.md", &record(1, "A", "accepted", FULL_BODY))
        .record_file("ADR-0002-b.md", &record(2, "B", "proposed", FULL_BODY));

    let run = fix(&project);
    assert!(run.initial.has_kind(ErrorKind::IndexMissingEntry));
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    assert_eq!(run.repaired.len(), 1);
    assert_eq!(run.repaired[0].file, INDEX);

    let entries = parse_index(&project.read(INDEX), "ADR");
    let numbers: Vec<_> = entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![1, 2]);

    let check = run_check(project.root(), &project.config, &CheckOptions::default()).unwrap();
    assert_eq!(check.errors, run.report.errors);
}

#[test]
fn second_fix_changes_nothing() {
    let body = FULL_BODY.replace(
        "## Participants\nAlice, Bob\n",
        "## Participants\n\n## Notes\nn\n\n## Participants\nAlice, Bob\n",
    );
    let project = Project::new();
    project
        .record_file("ADR-0001-a.md", &record(1, "A", "Accepted", &body))
        .record_file("ADR-0002-b.md", &record(2, "B", "proposed", FULL_BODY))
        .write(INDEX, "stale\n");

    let first = fix(&project);
    assert!(!first.repaired.is_empty());
    let record_after = project.read_record("ADR-0001-a.md");
    let index_after = project.read(INDEX);

    let second = fix(&project);
    assert!(second.repaired.is_empty(), "{:#?}", second.repaired);
    assert!(second.failures.is_empty());
    assert_eq!(project.read_record("ADR-0001-a.md"), record_after);
    assert_eq!(project.read(INDEX), index_after);
    assert_eq!(second.report.errors, first.report.errors);
}

#[test]
fn duplicate_participants_merge_in_document_order() {
    let body = FULL_BODY.replace(
        "## Participants\nAlice, Bob\n",
        "## Participants\n\n## Notes\nSee thread.\n\n## Participants\nAlice, Bob\n",
    );
    let project = Project::new();
    project.record_file("ADR-0001-a.md", &record(1, "A", "accepted", &body));

    let run = fix(&project);
    assert!(run.initial.has_kind(ErrorKind::DuplicateSection));
    assert!(run.is_clean(), "{:#?}", run.report.errors);

    let content = project.read_record("ADR-0001-a.md");
    assert_eq!(content.matches("## Participants").count(), 1);
    let tail = content.split("## Participants\n").nth(1).unwrap();
    assert_eq!(tail, "\nAlice, Bob\n\n## Notes\nSee thread.\n");
}

#[test]
fn superseded_records_are_annotated_in_the_index() {
    let project = Project::new();
    project
        .record_file(
            "ADR-0001-a.md",
            &format!(
                "---\nid: 1\ntitle: A\nstatus: superseded\nsuperseded_by: 2\n---\n# A\n\n{FULL_BODY}"
            ),
        )
        .record_file("ADR-0002-b.md", &record(2, "B", "accepted", FULL_BODY));

    let run = fix(&project);
    assert!(run.is_clean(), "{:#?}", run.report.errors);

    let index = project.read(INDEX);
    assert!(index.contains("ADR-0001\n: [A](ADR-0001-a.md) — superseded by ADR-0002\n"));
    let entries = parse_index(&index, "ADR");
    assert_eq!(entries[1].title, "A");
    assert_eq!(entries[1].annotation.as_deref(), Some("— superseded by ADR-0002"));
}

#[test]
fn fix_cannot_satisfy_the_promotion_gate() {
    let body = FULL_BODY.replace("Alice, Bob\n", "\n");
    let project = Project::new();
    project.record_file("ADR-0001-a.md", &record(1, "A", "accepted", &body));

    let run = fix(&project);
    assert!(!run.is_clean());
    let remaining: Vec<_> = run.report.errors.iter().map(|e| e.kind).collect();
    assert_eq!(remaining, vec![ErrorKind::PromotionGateViolation]);
}

#[test]
fn fixed_duplicates_still_face_the_gate() {
    let body = FULL_BODY.replace(
        "## Participants\nAlice, Bob\n",
        "## Participants\n\n## Participants\n\n",
    );
    let project = Project::new();
    project.record_file("ADR-0001-a.md", &record(1, "A", "accepted", &body));

    let run = fix(&project);
    let kinds: Vec<_> = run.report.errors.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ErrorKind::PromotionGateViolation]);
    assert!(!run.report.has_kind(ErrorKind::DuplicateSection));
}

#[test]
fn gate_failures_survive_unrelated_merges() {
    let no_participants = FULL_BODY.replace("## Participants\nAlice, Bob\n", "## Participants\n");
    let duplicated_notes = format!("{FULL_BODY}\n## Notes\nfirst\n\n## Notes\nsecond\n");
    let project = Project::new();
    project
        .record_file("ADR-0001-a.md", &record(1, "A", "accepted", &no_participants))
        .record_file("ADR-0002-b.md", &record(2, "B", "accepted", &duplicated_notes))
        .sync_index();

    let before = run_check(project.root(), &project.config, &CheckOptions::default()).unwrap();
    assert!(before.has_kind(ErrorKind::PromotionGateViolation));
    assert!(before.has_kind(ErrorKind::DuplicateSection));

    let run = fix(&project);
    assert_eq!(run.repaired.len(), 1);
    assert_eq!(run.repaired[0].file, "docs/decisions/ADR-0002-b.md");
    for error in before.errors.iter().filter(|e| e.kind != ErrorKind::DuplicateSection) {
        assert!(
            run.report.errors.contains(error),
            "fix lost {error}: {:#?}",
            run.report.errors
        );
    }
    assert!(!run.report.has_kind(ErrorKind::DuplicateSection));
}

#[test]
fn multi_line_titles_are_written_on_one_line() {
    let project = Project::new();
    project.record_file(
        "ADR-0001-a.md",
        &format!(
            "---\nid: 1\ntitle: |\n  Line one\n  line two\nstatus: accepted\n---\n\n# ADR-0001: Old\n\n{FULL_BODY}"
        ),
    );

    let run = fix(&project);
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    assert!(project.read_record("ADR-0001-a.md").contains("\n# ADR-0001: Line one line two\n"));
    assert!(project.read(INDEX).contains("\n: [Line one line two](ADR-0001-a.md)\n"));

    let again = fix(&project);
    assert!(again.repaired.is_empty(), "{:#?}", again.repaired);
    assert!(again.is_clean());
}

#[test]
fn file_names_with_spaces_stay_listed() {
    let project = Project::new();
    project.record_file("ADR-0001 use postgres.md", &record(1, "A", "accepted", FULL_BODY));

    let run = fix(&project);
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    assert!(project.read(INDEX).contains("\n: [A](<ADR-0001 use postgres.md>)\n"));

    let again = fix(&project);
    assert!(again.repaired.is_empty(), "{:#?}", again.repaired);
    assert!(again.is_clean(), "{:#?}", again.report.errors);
}

#[test]
fn status_and_title_are_corrected() {
    let project = Project::new();
    project.record_file(
        "ADR-0001-a.md",
        &format!("---\nid: 1\ntitle: Right\nstatus: ACCEPTED\n---\n\n# ADR-0001: Wrong\n\n{FULL_BODY}"),
    );

    let run = fix(&project);
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    let content = project.read_record("ADR-0001-a.md");
    assert!(content.contains("status: accepted\n"));
    assert!(content.contains("\n# ADR-0001: Right\n"));
    assert_eq!(run.repaired[0].changes.len(), 2);
}

#[test]
fn ambiguous_titles_leave_the_file_untouched() {
    let content = format!("---\nid: 1\ntitle: A\nstatus: Accepted\n---\n# B\n\n# C\n\n{FULL_BODY}");
    let project = Project::new();
    project.record_file("ADR-0001-a.md", &content);

    let run = fix(&project);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].file, "docs/decisions/ADR-0001-a.md");
    assert!(run.failures[0].reason.starts_with("ambiguous"));
    assert_eq!(project.read_record("ADR-0001-a.md"), content);
    assert!(run.report.has_kind(ErrorKind::InvalidStatus));
}

#[test]
fn fix_terms_rewrites_separators_in_records_and_glossaries() {
    let body = format!("{FULL_BODY}\n## References\nSee ADR 2.\n");
    let mut project = Project::new();
    project.config.glossary_files = vec!["docs/glossary.md".to_string()];
    project
        .record_file("ADR-0001-a.md", &record(1, "A", "accepted", &body))
        .record_file("ADR-0002-b.md", &record(2, "B", "accepted", FULL_BODY))
        .write("docs/glossary.md", "Ledger: ADR_1.\n");

    let plain = fix(&project);
    assert!(plain.report.has_kind(ErrorKind::MalformedCrossReferenceSyntax));

    let options = FixOptions {
        check_terms: true,
        fix_terms: true,
    };
    let run = run_fix(project.root(), &project.config, &options).unwrap();
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    assert!(project.read_record("ADR-0001-a.md").contains("See ADR-2."));
    assert_eq!(project.read("docs/glossary.md"), "Ledger: ADR-1.\n");
}

#[test]
fn heading_policy_rewrites_the_header() {
    let mut project = Project::new();
    project.config.title_policy.source = verdict_config::TitleSource::Heading;
    project.record_file(
        "ADR-0001-a.md",
        &format!("---\nid: 1\ntitle: Draft name\nstatus: accepted\n---\n# Final name\n\n{FULL_BODY}"),
    );

    let run = fix(&project);
    assert!(run.is_clean(), "{:#?}", run.report.errors);
    assert!(project.read_record("ADR-0001-a.md").contains("title: Final name\n"));
    assert!(project.read(INDEX).contains("[Final name]"));
}
