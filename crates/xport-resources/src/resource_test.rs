use super::{ExportableResource, ResourceError, ResourceType};
use crate::builtin_rules;
use serde_json::json;
use xport_engine::ParameterizeOptions;

fn export(resource: &ExportableResource) -> String {
    let rules = builtin_rules().get(resource.resource_type().as_str());
    resource
        .export(resource.name(), rules, &ParameterizeOptions::default())
        .expect("export must succeed")
        .content
}

#[test]
fn resource_type_parses_common_spellings() {
    assert_eq!("Application".parse::<ResourceType>(), Ok(ResourceType::Application));
    assert_eq!("identity_provider".parse::<ResourceType>(), Ok(ResourceType::IdentityProvider));
    assert_eq!("notification-sender".parse::<ResourceType>(), Ok(ResourceType::NotificationSender));
    assert_eq!("idp".parse::<ResourceType>(), Ok(ResourceType::IdentityProvider));
    assert_eq!("OU".parse::<ResourceType>(), Ok(ResourceType::OrganizationUnit));
    assert_eq!("userschema".parse::<ResourceType>(), Ok(ResourceType::UserSchema));
    assert_eq!(
        "group".parse::<ResourceType>(),
        Err(ResourceError::UnknownType("group".to_string()))
    );
}

#[test]
fn application_export_uses_builtin_rules() {
    let resource = ExportableResource::decode(
        ResourceType::Application,
        json!({
            "id": "app-1",
            "name": "My Test App",
            "inbound_auth_config": [{
                "type": "oauth2",
                "config": {
                    "client_id": "abc",
                    "client_secret": "def",
                    "redirect_uris": ["https://app.example/cb"],
                    "grant_types": ["authorization_code"],
                    "pkce_required": true,
                    "scopes": ["openid"]
                }
            }]
        }),
    )
    .expect("decode");
    assert_eq!(resource.name(), "My Test App");
    assert_eq!(
        export(&resource),
        concat!(
            "id: app-1\n",
            "name: My Test App\n",
            "inbound_auth_config:\n",
            "  - type: oauth2\n",
            "    config:\n",
            "      client_id: {{.MY_TEST_APP_CLIENT_ID}}\n",
            "      client_secret: {{.MY_TEST_APP_CLIENT_SECRET}}\n",
            "      redirect_uris:\n",
            "        {{- range .MY_TEST_APP_REDIRECT_URIS}}\n",
            "        - {{.}}\n",
            "        {{- end}}\n",
            "      grant_types:\n",
            "        - authorization_code\n",
            "      pkce_required: true\n",
            "      scopes:\n",
            "        - openid\n",
        )
    );
}

#[test]
fn application_without_secret_still_exports_placeholder() {
    let resource = ExportableResource::decode(
        ResourceType::Application,
        json!({
            "name": "Public App",
            "inbound_auth_config": [{"type": "oauth2", "config": {"client_id": "pub", "public_client": true}}]
        }),
    )
    .expect("decode");
    let content = export(&resource);
    assert!(content.contains("client_secret: {{.PUBLIC_APP_CLIENT_SECRET}}"));
    assert!(content.contains("{{- range .PUBLIC_APP_REDIRECT_URIS}}"));
    assert!(!content.contains("pub\n"));
}

#[test]
fn identity_provider_properties_are_parameterized() {
    let resource = ExportableResource::decode(
        ResourceType::IdentityProvider,
        json!({
            "name": "Export Test IDP",
            "type": "OIDC",
            "properties": [
                {"name": "client_id", "value": "abc"},
                {"name": "client_secret", "value": "xyz", "is_secret": true}
            ]
        }),
    )
    .expect("decode");
    assert_eq!(
        export(&resource),
        concat!(
            "name: Export Test IDP\n",
            "type: OIDC\n",
            "properties:\n",
            "  - name: client_id\n",
            "    value: {{.EXPORT_TEST_IDP_CLIENT_ID}}\n",
            "  - name: client_secret\n",
            "    value: {{.EXPORT_TEST_IDP_CLIENT_SECRET}}\n",
            "    is_secret: true\n",
        )
    );
}

#[test]
fn notification_sender_hides_property_values() {
    let resource = ExportableResource::decode(
        ResourceType::NotificationSender,
        json!({
            "name": "SMS Sender",
            "type": "MESSAGE",
            "provider": "twilio",
            "properties": [{"name": "auth_token", "value": "tok", "is_secret": true}]
        }),
    )
    .expect("decode");
    let content = export(&resource);
    assert!(content.contains("value: {{.SMS_SENDER_AUTH_TOKEN}}"));
    assert!(!content.contains("tok\n"));
}

#[test]
fn resources_with_empty_rules_use_template_renderer() {
    let unit = ExportableResource::decode(
        ResourceType::OrganizationUnit,
        json!({"handle": "eng", "name": "Engineering", "parent": null}),
    )
    .expect("decode");
    assert_eq!(export(&unit), "handle: eng\nname: Engineering\n");

    let schema = ExportableResource::decode(
        ResourceType::UserSchema,
        json!({"name": "customer", "schema": {"email": {"type": "string"}}}),
    )
    .expect("decode");
    assert_eq!(
        export(&schema),
        "name: customer\nschema: \"{\\\"email\\\":{\\\"type\\\":\\\"string\\\"}}\"\n"
    );
}

#[test]
fn decode_reports_type_mismatch() {
    let err = ExportableResource::decode(ResourceType::Application, json!({"name": 5}))
        .expect_err("must reject");
    assert!(matches!(
        err,
        ResourceError::Decode {
            resource_type: ResourceType::Application,
            ..
        }
    ));
}
