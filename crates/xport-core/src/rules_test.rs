use super::{RuleConfigError, RuleKind, RuleRegistry, RuleSet};
use crate::FieldPath;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn path(input: &str) -> FieldPath {
    input.parse().expect("field path must parse")
}

#[test]
fn contains_checks_all_three_lists() {
    let rules = RuleSet::new()
        .with_scalar(path("OAuth.ClientSecret"))
        .with_array(path("Scopes"))
        .with_dynamic_property(path("Properties"));

    assert!(rules.contains(&FieldPath::root().child("OAuth").child("ClientSecret")));
    assert!(rules.contains(&FieldPath::root().child("scopes")));
    assert!(rules.contains(&FieldPath::root().child("Properties")));
    assert!(!rules.contains(&FieldPath::root().child("Name")));
    assert!(rules.is_dynamic_property(&FieldPath::root().child("properties")));
    assert!(!rules.is_dynamic_property(&FieldPath::root().child("Scopes")));
}

#[test]
fn contains_ignores_repeat_markers() {
    let rules = RuleSet::new().with_scalar(path("InboundAuthConfig[].OAuthAppConfig.ClientID"));
    let walked = FieldPath::root()
        .child("InboundAuthConfig")
        .child("OAuthAppConfig")
        .child("ClientID");
    assert!(rules.contains(&walked));
}

#[test]
fn iter_yields_kinds_in_declaration_order() {
    let rules = RuleSet::new()
        .with_dynamic_property(path("Properties"))
        .with_scalar(path("ClientID"))
        .with_array(path("Scopes"));
    let kinds = rules.iter().map(|(kind, _)| kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![RuleKind::Scalar, RuleKind::Array, RuleKind::DynamicProperty]);
}

#[test]
fn registry_parses_rule_key_names_from_yaml() {
    let registry = RuleRegistry::from_yaml_str(
        r#"
Application:
  Variables:
    - InboundAuthConfig[].OAuthAppConfig.ClientID
  ArrayVariables:
    - InboundAuthConfig[].OAuthAppConfig.RedirectURIs
IdentityProvider:
  DynamicPropertyFields:
    - Properties
"#,
    )
    .expect("rules must load");

    let application = registry.get("Application").expect("application rules");
    assert_eq!(application.scalar_paths.len(), 1);
    assert_eq!(application.array_paths[0].to_string(), "InboundAuthConfig[].OAuthAppConfig.RedirectURIs");
    let idp = registry.get("identity_provider").expect("case and underscore insensitive lookup");
    assert_eq!(idp.dynamic_property_paths.len(), 1);
    assert!(registry.get("UserSchema").is_none());
}

#[test]
fn registry_rejects_invalid_paths_as_parse_errors() {
    let err = RuleRegistry::from_json_str(r#"{"Application":{"Variables":["OAuth..ClientID"]}}"#)
        .expect_err("must reject");
    assert!(matches!(err, RuleConfigError::Parse(_)));
}

#[test]
fn registry_reports_conflicting_paths() {
    let err = RuleRegistry::from_yaml_str(
        r#"
Application:
  Variables: [Scopes]
  ArrayVariables: [scopes]
"#,
    )
    .expect_err("must reject");
    match err {
        RuleConfigError::Validation(issues) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].reference.as_deref(), Some("rules.path.conflict"));
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn registry_reports_duplicate_paths() {
    let rules = RuleSet::new()
        .with_scalar(path("ClientID"))
        .with_scalar(path("clientid"));
    let issues = rules.validate("Application");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reference.as_deref(), Some("rules.path.duplicate"));
}

#[test]
fn merged_registry_replaces_matching_types() {
    let base = RuleRegistry::new()
        .with("Application", RuleSet::new().with_scalar(path("ClientID")))
        .with("IdentityProvider", RuleSet::new().with_dynamic_property(path("Properties")));
    let overrides = RuleRegistry::new().with("application", RuleSet::new());

    let merged = base.merged_with(&overrides);
    assert_eq!(merged.len(), 2);
    assert!(merged.get("Application").expect("present").is_empty());
    assert!(!merged.get("IdentityProvider").expect("present").is_empty());
}

#[test]
fn load_detects_format_from_extension() {
    let path = write_temp_file(
        "rules-json",
        "json",
        r#"{"NotificationSender":{"DynamicPropertyFields":["Properties"]}}"#,
    );
    let registry = RuleRegistry::load(path.as_path()).expect("rules must load");
    assert!(registry.get("NotificationSender").is_some());
    let _ = fs::remove_file(path);
}

#[test]
fn load_reports_missing_file() {
    let err = RuleRegistry::load(std::path::Path::new("/nonexistent/xport-rules.yaml"))
        .expect_err("must fail");
    assert!(matches!(err, RuleConfigError::ReadFile { .. }));
}

#[test]
fn registry_serializes_back_to_rule_key_names() {
    let registry = RuleRegistry::new().with("Application", RuleSet::new().with_array(path("Scopes")));
    let yaml = serde_yaml::to_string(&registry).expect("must encode");
    assert!(yaml.contains("ArrayVariables"));
    assert!(!yaml.contains("DynamicPropertyFields"));
}

fn write_temp_file(prefix: &str, extension: &str, content: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("xport-core-{prefix}-{nanos}.{extension}"));
    fs::write(&path, content).expect("write temp file");
    path
}
