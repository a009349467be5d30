use super::{FieldPath, FieldPathParseError, FieldPathSegment};
use std::str::FromStr;

#[test]
fn dotted_path_roundtrip() {
    let parsed = FieldPath::from_str("InboundAuthConfig[].OAuthAppConfig.ClientID").expect("must parse");
    assert_eq!(
        parsed.segments(),
        &[
            FieldPathSegment::repeated("InboundAuthConfig"),
            FieldPathSegment::key("OAuthAppConfig"),
            FieldPathSegment::key("ClientID"),
        ]
    );
    assert_eq!(parsed.to_string(), "InboundAuthConfig[].OAuthAppConfig.ClientID");
}

#[test]
fn single_segment_is_accepted() {
    let parsed = FieldPath::from_str("Scopes").expect("must parse");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.last().map(FieldPathSegment::name), Some("Scopes"));
    assert!(!parsed.last().expect("segment").is_repeated());
}

#[test]
fn empty_input_rejected() {
    assert_eq!(FieldPath::from_str("").expect_err("must reject"), FieldPathParseError::Empty);
}

#[test]
fn empty_segment_rejected() {
    let err = FieldPath::from_str("OAuth..ClientID").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::EmptySegment(1));
}

#[test]
fn bare_marker_rejected() {
    let err = FieldPath::from_str("Items.[]").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::InvalidSegment("[]".to_string()));
}

#[test]
fn unexpected_character_rejected() {
    let err = FieldPath::from_str("Items[0].Name").expect_err("must reject");
    assert_eq!(err, FieldPathParseError::UnexpectedChar('['));
}

#[test]
fn matching_ignores_case_and_markers() {
    let rule = FieldPath::from_str("InboundAuthConfig[].OAuthAppConfig.ClientID").expect("must parse");
    let walked = FieldPath::root()
        .child("inboundauthconfig")
        .child("OAuthAppConfig")
        .child("clientId");
    assert!(rule.matches_ignoring_markers(&walked));
    assert!(!rule.matches_ignoring_markers(&walked.child("Extra")));
}

#[test]
fn lenient_parse_keeps_markers() {
    let path = FieldPath::lenient("Properties[].Name");
    assert_eq!(path.to_string(), "Properties[].Name");
}

#[test]
fn serde_uses_dotted_string_form() {
    let path: FieldPath = serde_json::from_str("\"Token.Scopes[]\"").expect("must decode");
    assert_eq!(path.segments()[1], FieldPathSegment::repeated("Scopes"));
    assert_eq!(serde_json::to_string(&path).expect("must encode"), "\"Token.Scopes[]\"");
}
