//! Loading and validating lint configuration.

use rxlint::{ConfigError, LintConfig, Linter, RuleEntry, Severity};
use serde_json::json;
use std::io::Write;

#[test]
fn test_severity_and_array_entries() {
    let config = LintConfig::from_json(
        r#"{
            "rules": {
                "suffix-subjects": ["warn", { "suffix": "Bus" }],
                "no-unsafe-subject-next": "error"
            }
        }"#,
    )
    .expect("valid configuration");

    let names: Vec<&str> = config.rules.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["suffix-subjects", "no-unsafe-subject-next"],
        "rule order follows the file"
    );
    assert_eq!(
        config.get("suffix-subjects"),
        Some(&RuleEntry::new(Severity::Warn).with_options(json!({ "suffix": "Bus" })))
    );
    assert_eq!(
        config.get("no-unsafe-subject-next"),
        Some(&RuleEntry::new(Severity::Error))
    );

    let single = LintConfig::from_value(json!({ "rules": { "suffix-subjects": ["off"] } }))
        .expect("valid configuration");
    assert_eq!(single.get("suffix-subjects"), Some(&RuleEntry::new(Severity::Off)));
    assert_eq!(single.enabled_rules().count(), 0);
}

#[test]
fn test_empty_configuration() {
    let config = LintConfig::from_json("{}").expect("empty object is valid");
    assert!(config.rules.is_empty());
    let linter = Linter::from_config(&config).expect("no rules to compile");
    assert!(linter.is_empty());
}

#[test]
fn test_configuration_errors() {
    assert!(matches!(
        LintConfig::from_json("{ rules: }"),
        Err(ConfigError::InvalidJson(_))
    ));
    assert!(matches!(
        LintConfig::from_json(r#"{ "plugins": [] }"#),
        Err(ConfigError::InvalidJson(_))
    ));
    assert!(matches!(
        LintConfig::from_json(r#"{ "rules": { "no-subject-value": "error" } }"#),
        Err(ConfigError::UnknownRule(ref name)) if name == "no-subject-value"
    ));
    assert!(matches!(
        LintConfig::from_json(r#"{ "rules": { "suffix-subjects": "fatal" } }"#),
        Err(ConfigError::InvalidSeverity(_))
    ));
    assert!(matches!(
        LintConfig::from_json(r#"{ "rules": { "suffix-subjects": 2 } }"#),
        Err(ConfigError::InvalidRuleOptions { .. })
    ));
    assert!(matches!(
        LintConfig::from_json(r#"{ "rules": { "suffix-subjects": ["warn", {}, {}] } }"#),
        Err(ConfigError::InvalidRuleOptions { .. })
    ));
}

#[test]
fn test_options_are_validated_when_compiling() {
    let config = LintConfig::from_value(json!({
        "rules": { "suffix-subjects": ["error", { "suffix": "Subject", "prefix": "x" }] }
    }))
    .expect("shape is valid");
    assert!(matches!(
        Linter::from_config(&config),
        Err(ConfigError::InvalidRuleOptions { ref rule, .. }) if rule == "suffix-subjects"
    ));

    let config = LintConfig::from_value(json!({
        "rules": { "suffix-subjects": ["error", { "types": { "[": false } }] }
    }))
    .expect("shape is valid");
    assert!(matches!(
        Linter::from_config(&config),
        Err(ConfigError::InvalidTypePattern { ref pattern, .. }) if pattern == "["
    ));

    // Disabled rules are not compiled.
    let config = LintConfig::from_value(json!({
        "rules": { "suffix-subjects": ["off", { "types": { "[": false } }] }
    }))
    .expect("shape is valid");
    assert!(Linter::from_config(&config).is_ok());
}

#[test]
fn test_all_rules_and_round_trip_value() {
    let config = LintConfig::all_rules(Severity::Warn);
    assert_eq!(config.rules.len(), 2);
    assert_eq!(
        config.to_value(),
        json!({ "rules": { "no-unsafe-subject-next": "warn", "suffix-subjects": "warn" } })
    );

    let mut config = config;
    config
        .set(
            "suffix-subjects",
            RuleEntry::new(Severity::Error).with_options(json!({ "variables": false })),
        )
        .expect("known rule");
    assert!(matches!(
        config.set("suffix", RuleEntry::new(Severity::Error)),
        Err(ConfigError::UnknownRule(_))
    ));

    let reloaded = LintConfig::from_value(config.to_value()).expect("serialized form reloads");
    assert_eq!(reloaded, config);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{ "rules": {{ "suffix-subjects": ["error", {{ "suffix": "Stream" }}] }} }}"#
    )
    .expect("write config");

    let config = LintConfig::load(file.path()).expect("loads");
    let linter = Linter::from_config(&config).expect("compiles");
    assert_eq!(linter.rule_names().collect::<Vec<_>>(), vec!["suffix-subjects"]);
}

#[test]
fn test_load_errors_name_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("rxlint.json");
    let err = LintConfig::load(&missing).expect_err("missing file");
    assert!(err.to_string().contains("rxlint.json"), "{err}");

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{").expect("write");
    let err = LintConfig::load(&broken).expect_err("broken JSON");
    assert!(err.to_string().contains("broken.json"), "{err}");
    assert!(
        err.downcast_ref::<ConfigError>().is_some(),
        "the typed error stays reachable"
    );
}
