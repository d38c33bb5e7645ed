//! Linter runs over whole files.

use rxlint::{
    DiagnosticCategory, LintConfig, LintInput, Linter, NodeTypeTable, Reporter, RuleEntry,
    Severity, SourceFile,
};
use rxlint_parser::{NodeArena, NodeIndex};
use rxlint_solver::{DefId, TypeId, TypeInterner};
use serde_json::json;

/// Node types for one file.
struct FileTypes {
    /// `numbers` in `const numbers = ...;`
    binding: NodeIndex,
    /// `numbers` in `numbers.next();`
    receiver: NodeIndex,
}

/// ```typescript
/// const numbers = source;
/// numbers.next();
/// ```
fn subject_file(name: &str) -> (SourceFile, FileTypes) {
    let mut arena = NodeArena::new();
    let binding = arena.add_identifier("numbers");
    let source = arena.add_identifier("source");
    let decl = arena.add_variable_declaration(binding, source);
    let stmt = arena.add_variable_statement(vec![decl]);
    let receiver = arena.add_identifier("numbers");
    let next = arena.add_identifier("next");
    let access = arena.add_property_access(receiver, next);
    let call = arena.add_call_expression(access, vec![]);
    let call_stmt = arena.add_expression_statement(call);
    let root = arena.add_source_file(vec![stmt, call_stmt]);
    (SourceFile::new(name, arena, root), FileTypes { binding, receiver })
}

fn subject_types() -> (TypeInterner, DefId) {
    let mut interner = TypeInterner::new();
    let subject = interner.declare_class("Subject", 1);
    (interner, subject)
}

fn table_for<'db>(interner: &'db TypeInterner, types: &FileTypes, ty: TypeId) -> NodeTypeTable<'db> {
    NodeTypeTable::new(interner)
        .with(types.binding, ty)
        .with(types.receiver, ty)
}

#[test]
fn test_both_rules_report_in_source_order() {
    let (mut interner, subject) = subject_types();
    let numbers = interner.reference(subject, &[TypeId::NUMBER]);
    let (file, types) = subject_file("a.ts");
    let table = table_for(&interner, &types, numbers);

    let linter = Linter::from_config(&LintConfig::all_rules(Severity::Error)).expect("defaults");
    let diagnostics = linter.lint_file(&file, &table);

    let rules: Vec<&str> = diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(rules, vec!["suffix-subjects", "no-unsafe-subject-next"]);
    assert!(diagnostics.windows(2).all(|pair| pair[0].start <= pair[1].start));
    assert!(diagnostics.iter().all(|d| d.file == "a.ts"));
}

#[test]
fn test_severity_sets_category_and_off_disables() {
    let (mut interner, subject) = subject_types();
    let numbers = interner.reference(subject, &[TypeId::NUMBER]);
    let (file, types) = subject_file("a.ts");
    let table = table_for(&interner, &types, numbers);

    let mut config = LintConfig::default();
    config
        .set("suffix-subjects", RuleEntry::new(Severity::Warn))
        .expect("known rule");
    config
        .set("no-unsafe-subject-next", RuleEntry::new(Severity::Off))
        .expect("known rule");
    let linter = Linter::from_config(&config).expect("valid");
    assert_eq!(linter.rule_names().collect::<Vec<_>>(), vec!["suffix-subjects"]);

    let diagnostics = linter.lint_file(&file, &table);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].category, DiagnosticCategory::Warning);
}

#[test]
fn test_rule_options_flow_through_configuration() {
    let (mut interner, subject) = subject_types();
    let numbers = interner.reference(subject, &[TypeId::NUMBER]);
    let (file, types) = subject_file("a.ts");
    let table = table_for(&interner, &types, numbers);

    let mut config = LintConfig::default();
    config
        .set(
            "suffix-subjects",
            RuleEntry::new(Severity::Error).with_options(json!({ "variables": false })),
        )
        .expect("known rule");
    let linter = Linter::from_config(&config).expect("valid");
    assert!(linter.lint_file(&file, &table).is_empty());
}

#[test]
fn test_void_subject_file_is_clean() {
    let (mut interner, subject) = subject_types();
    let ticks = interner.reference(subject, &[TypeId::VOID]);
    let (file, types) = subject_file("a.ts");
    let table = table_for(&interner, &types, ticks);

    let mut config = LintConfig::default();
    config
        .set("no-unsafe-subject-next", RuleEntry::new(Severity::Error))
        .expect("known rule");
    let linter = Linter::from_config(&config).expect("valid");
    assert!(linter.lint_file(&file, &table).is_empty());
}

#[test]
fn test_parallel_run_matches_sequential_run() {
    let (mut interner, subject) = subject_types();
    let element_types = [
        TypeId::NUMBER,
        TypeId::VOID,
        TypeId::STRING,
        TypeId::UNKNOWN,
        TypeId::BOOLEAN,
    ];
    let subjects: Vec<TypeId> = element_types
        .iter()
        .map(|&element| interner.reference(subject, &[element]))
        .collect();

    let files: Vec<(SourceFile, FileTypes)> = (0..subjects.len() * 4)
        .map(|i| subject_file(&format!("file{i}.ts")))
        .collect();
    let tables: Vec<NodeTypeTable<'_>> = files
        .iter()
        .enumerate()
        .map(|(i, (_, types))| table_for(&interner, types, subjects[i % subjects.len()]))
        .collect();
    let inputs: Vec<LintInput<'_>> = files
        .iter()
        .zip(&tables)
        .map(|((file, _), table)| LintInput { file, env: table })
        .collect();

    let linter = Linter::from_config(&LintConfig::all_rules(Severity::Error)).expect("defaults");
    let parallel = linter.lint_files(&inputs);
    let sequential: Vec<_> = inputs
        .iter()
        .map(|input| linter.lint_file(input.file, input.env))
        .collect();

    assert_eq!(parallel, sequential);
    for (i, diagnostics) in parallel.iter().enumerate() {
        assert!(
            diagnostics.iter().all(|d| d.file == format!("file{i}.ts")),
            "results stay in input order"
        );
    }
}

#[test]
fn test_reporter_renders_location_and_snippet() {
    let (mut interner, subject) = subject_types();
    let numbers = interner.reference(subject, &[TypeId::NUMBER]);
    let (file, types) = subject_file("a.ts");
    let table = table_for(&interner, &types, numbers);

    let mut config = LintConfig::default();
    config
        .set("suffix-subjects", RuleEntry::new(Severity::Error))
        .expect("known rule");
    let linter = Linter::from_config(&config).expect("valid");
    let diagnostics = linter.lint_file(&file, &table);
    assert_eq!(diagnostics.len(), 1);

    let rendered = Reporter::new(false).render(&file, &diagnostics);
    let mut lines = rendered.lines();
    let header = lines.next().expect("header line");
    assert!(
        header.starts_with("a.ts:1:"),
        "location prefix in {header:?}"
    );
    assert!(header.contains(" - error suffix-subjects: "));
    assert!(header.ends_with("Subject identifiers must end with \"Subject\"."));

    let source_line = lines.next().expect("source line");
    let underline = lines.next().expect("underline");
    assert!(source_line.contains("numbers"));
    assert_eq!(underline.trim(), "~~~~~~~");
}
