use serde::{Deserialize, Serialize};
use xport_engine::reflect_record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub description: String,
    pub auth_flow_graph_id: String,
    pub registration_flow_graph_id: String,
    pub is_registration_flow_enabled: bool,
    pub url: String,
    pub logo_url: String,
    pub certificate: Option<ApplicationCertificate>,
    pub inbound_auth_config: Vec<InboundAuthConfig>,
}

reflect_record!(Application {
    id: String => "ID" as "id" [omit_empty],
    name: String => "Name" as "name",
    description: String => "Description" as "description" [omit_empty],
    auth_flow_graph_id: String => "AuthFlowGraphID" as "auth_flow_graph_id" [omit_empty],
    registration_flow_graph_id: String => "RegistrationFlowGraphID" as "registration_flow_graph_id" [omit_empty],
    is_registration_flow_enabled: bool => "IsRegistrationFlowEnabled" as "is_registration_flow_enabled" [omit_empty],
    url: String => "URL" as "url" [omit_empty],
    logo_url: String => "LogoURL" as "logo_url" [omit_empty],
    certificate: Option<ApplicationCertificate> => "Certificate" as "certificate" [omit_empty],
    inbound_auth_config: Vec<InboundAuthConfig> => "InboundAuthConfig" as "inbound_auth_config" [omit_empty],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationCertificate {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

reflect_record!(ApplicationCertificate {
    kind: String => "Type" as "type",
    value: String => "Value" as "value",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundAuthConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "config")]
    pub oauth_app_config: Option<OAuthAppConfig>,
}

reflect_record!(InboundAuthConfig {
    kind: String => "Type" as "type",
    oauth_app_config: Option<OAuthAppConfig> => "OAuthAppConfig" as "config" [omit_empty],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthAppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uris: Vec<String>,
    pub grant_types: Vec<String>,
    pub response_types: Vec<String>,
    pub token_endpoint_auth_method: String,
    pub pkce_required: bool,
    pub public_client: bool,
    pub token: Option<OAuthTokenConfig>,
    pub scopes: Vec<String>,
}

reflect_record!(OAuthAppConfig {
    client_id: String => "ClientID" as "client_id" [omit_empty],
    client_secret: String => "ClientSecret" as "client_secret" [omit_empty],
    redirect_uris: Vec<String> => "RedirectURIs" as "redirect_uris" [omit_empty],
    grant_types: Vec<String> => "GrantTypes" as "grant_types" [omit_empty],
    response_types: Vec<String> => "ResponseTypes" as "response_types" [omit_empty],
    token_endpoint_auth_method: String => "TokenEndpointAuthMethod" as "token_endpoint_auth_method" [omit_empty],
    pkce_required: bool => "PKCERequired" as "pkce_required" [omit_empty],
    public_client: bool => "PublicClient" as "public_client" [omit_empty],
    token: Option<OAuthTokenConfig> => "Token" as "token" [omit_empty],
    scopes: Vec<String> => "Scopes" as "scopes" [omit_empty],
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthTokenConfig {
    pub issuer: String,
    pub access_token: Option<TokenConfig>,
    pub id_token: Option<TokenConfig>,
}

reflect_record!(OAuthTokenConfig {
    issuer: String => "Issuer" as "issuer" [omit_empty],
    access_token: Option<TokenConfig> => "AccessToken" as "access_token" [omit_empty],
    id_token: Option<TokenConfig> => "IDToken" as "id_token" [omit_empty],
});

/// Lifetime in seconds plus the user attributes copied into the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub validity_period: i64,
    pub user_attributes: Vec<String>,
}

reflect_record!(TokenConfig {
    validity_period: i64 => "ValidityPeriod" as "validity_period" [omit_empty],
    user_attributes: Vec<String> => "UserAttributes" as "user_attributes" [omit_empty],
});
