use super::builtin_rules;
use crate::resource::ResourceType;
use crate::{Application, IdentityProvider};
use xport_core::FieldPath;
use xport_engine::{translate_rules, Reflect};

#[test]
fn builtin_registry_is_valid() {
    assert!(builtin_rules().validate().is_empty());
    assert_eq!(builtin_rules().len(), 5);
}

#[test]
fn application_rules_translate_to_serialized_names() {
    let rules = builtin_rules()
        .get(ResourceType::Application.as_str())
        .expect("application rules");
    let translated = translate_rules(Application::shape(), rules);
    let scalars = translated
        .scalar_paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(
        scalars,
        vec![
            "inbound_auth_config[].config.client_id",
            "inbound_auth_config[].config.client_secret",
        ]
    );
    assert_eq!(
        translated.array_paths,
        vec![FieldPath::lenient("inbound_auth_config[].config.redirect_uris")]
    );
}

#[test]
fn property_rules_cover_identity_providers() {
    let rules = builtin_rules().get("identity_provider").expect("idp rules");
    let translated = translate_rules(IdentityProvider::shape(), rules);
    assert_eq!(
        translated.dynamic_property_paths,
        vec![FieldPath::lenient("properties")]
    );
}

#[test]
fn unit_and_schema_have_empty_rules() {
    for resource_type in [ResourceType::OrganizationUnit, ResourceType::UserSchema] {
        let rules = builtin_rules()
            .get(resource_type.as_str())
            .expect("registered rules");
        assert!(rules.is_empty());
    }
}
