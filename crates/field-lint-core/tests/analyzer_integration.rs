//! Integration test: analyzer end-to-end over descriptor manifests.
//!
//! Uses fixture files under `tests/fixtures/descriptors/` to verify that the
//! full manifest → `SourceUnit` → checker → `Violation` pipeline reports
//! violations at every nesting level and respects config scoping.

use field_lint_core::{
    Analyzer, AnalyzerError, Config, FieldDescriptor, FieldTypeChecker, FieldTypeRule, RuleConfig,
    Severity, SourceUnit,
};
use std::path::PathBuf;

/// Rejects primitive `int`, ignores static fields.
struct NoInt;

impl FieldTypeRule for NoInt {
    fn name(&self) -> &'static str {
        "no-int"
    }
    fn code(&self) -> &'static str {
        "TEST001"
    }
    fn is_target_field(&self, field: &FieldDescriptor) -> bool {
        !field.is_static
    }
    fn satisfies_type(&self, field: &FieldDescriptor) -> bool {
        field.declared_type.name != "int"
    }
}

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/descriptors")
}

fn identifiers(config: Config) -> Vec<String> {
    let analyzer = Analyzer::builder()
        .root(fixture_root())
        .exclude("**/generated/**")
        .config(config)
        .rule(NoInt)
        .build()
        .expect("analyzer should build");
    let result = analyzer.analyze().expect("analysis should succeed");
    result
        .violations
        .iter()
        .map(|v| v.location.identifier())
        .collect()
}

// ── Happy path ──

#[test]
fn detects_violations_at_every_level() {
    assert_eq!(
        identifiers(Config::default()),
        vec![
            "com.example.forms.OuterForm$InnerPart.quantity",
            "com.example.forms.UserForm.id",
            "com.example.forms.UserForm.age",
        ]
    );
}

#[test]
fn counts_files_and_classes() {
    let analyzer = Analyzer::builder()
        .root(fixture_root())
        .exclude("**/generated/**")
        .rule(NoInt)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();

    assert_eq!(result.files_checked, 3);
    // OuterForm + InnerPart + Cache, UserForm, UserHelper
    assert_eq!(result.classes_checked, 5);
    assert!(result.has_violations_at(Severity::Error));
}

#[test]
fn excluded_directory_is_not_analyzed() {
    let ids = identifiers(Config::default());
    assert!(!ids.iter().any(|id| id.contains("GeneratedForm")));
}

#[test]
fn without_exclude_generated_is_analyzed() {
    let analyzer = Analyzer::builder()
        .root(fixture_root())
        .rule(NoInt)
        .build()
        .unwrap();
    let result = analyzer.analyze().unwrap();
    assert!(result
        .violations
        .iter()
        .any(|v| v.location.class_name == "com.example.GeneratedForm"));
}

// ── Config scoping ──

#[test]
fn ignore_fields_from_config() {
    let config = Config::parse(
        r#"
[rules.no-int]
ignore_fields = ["id", "quantity"]
"#,
    )
    .unwrap();
    assert_eq!(identifiers(config), vec!["com.example.forms.UserForm.age"]);
}

#[test]
fn target_suffixes_from_config_replace_defaults() {
    let config = Config::parse(
        r#"
[rules.no-int]
target_suffixes = ["Helper"]
"#,
    )
    .unwrap();
    assert_eq!(identifiers(config), vec!["com.example.forms.UserHelper.counter"]);
}

#[test]
fn empty_target_suffixes_pass_everything() {
    let config = Config::parse("[rules.no-int]\ntarget_suffixes = []\n").unwrap();
    assert!(identifiers(config).is_empty());
}

// ── Single-class entry point ──

#[test]
fn validate_message_joins_top_level_only() {
    let path = fixture_root().join("forms/UserForm.json");
    let unit = SourceUnit::from_file(&path).expect("fixture should load");
    let config = RuleConfig::default();
    let checker = FieldTypeChecker::new(&NoInt, &config);

    let mut nested = Vec::new();
    let message = checker
        .validate(&unit.source, &unit.classes[0], &mut nested)
        .expect("UserForm should fail");

    insta::assert_snapshot!(message, @r"
    com.example.forms.UserForm.id
    com.example.forms.UserForm.age
    ");
    assert!(nested.is_empty());
}

#[test]
fn outer_passes_while_nested_fails() {
    let path = fixture_root().join("forms/OuterForm.json");
    let unit = SourceUnit::from_file(&path).expect("fixture should load");
    let config = RuleConfig::default();
    let checker = FieldTypeChecker::new(&NoInt, &config);

    let mut nested = Vec::new();
    assert_eq!(checker.validate(&unit.source, &unit.classes[0], &mut nested), None);
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].class_name, "com.example.forms.OuterForm$InnerPart");
    assert_eq!(
        nested[0].message(),
        "com.example.forms.OuterForm$InnerPart.quantity"
    );
}

// ── Malformed manifests ──

#[test]
fn malformed_manifest_is_skipped_by_default() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/broken");
    let analyzer = Analyzer::builder().root(&root).rule(NoInt).build().unwrap();
    let result = analyzer.analyze().expect("parse errors are warnings by default");
    assert_eq!(result.files_checked, 0);
    assert!(result.violations.is_empty());
}

#[test]
fn malformed_manifest_fails_when_requested() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/broken");
    let analyzer = Analyzer::builder()
        .root(&root)
        .rule(NoInt)
        .fail_on_parse_error(true)
        .build()
        .unwrap();
    assert!(matches!(
        analyzer.analyze(),
        Err(AnalyzerError::Descriptor(_))
    ));
}
