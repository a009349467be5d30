//! Records shared by the unit tests of this crate.

use crate::property::Property;
use crate::reflect_record;

#[derive(Debug, Clone, Default)]
pub struct OAuthFixture {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uris: Vec<String>,
    pub scopes: Vec<String>,
}

reflect_record!(OAuthFixture {
    client_id: String => "ClientID" as "clientId" [omit_empty],
    client_secret: String => "ClientSecret" as "clientSecret" [omit_empty],
    redirect_uris: Vec<String> => "RedirectURIs" as "redirectUris" [omit_empty],
    scopes: Vec<String> => "Scopes" as "scopes" [omit_empty],
});

#[derive(Debug, Clone, Default)]
pub struct InboundFixture {
    pub kind: String,
    pub oauth: Option<OAuthFixture>,
}

reflect_record!(InboundFixture {
    kind: String => "Type" as "type",
    oauth: Option<OAuthFixture> => "OAuthAppConfig" as "config" [omit_empty],
});

#[derive(Debug, Clone, Default)]
pub struct AppFixture {
    pub id: String,
    pub name: String,
    pub description: String,
    pub inbound: Vec<InboundFixture>,
}

reflect_record!(AppFixture {
    id: String => "ID" as "id" [omit_empty],
    name: String => "Name" as "name",
    description: String => "Description" as "description" [omit_empty],
    inbound: Vec<InboundFixture> => "InboundAuthConfig" as "inboundAuthConfig" [omit_empty],
});

#[derive(Debug, Clone, Default)]
pub struct PropertyFixture {
    pub name: String,
    pub value: String,
    pub secret: bool,
}

impl PropertyFixture {
    pub fn new(name: &str, value: &str, secret: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            secret,
        }
    }
}

impl Property for PropertyFixture {
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn is_secret(&self) -> bool {
        self.secret
    }
}

reflect_record!(PropertyFixture: property {
    name: String => "Name" as "name",
    value: String => "Value" as "value",
    secret: bool => "IsSecret" as "is_secret" [omit_empty],
});

#[derive(Debug, Clone, Default)]
pub struct ProviderFixture {
    pub name: String,
    pub properties: Vec<PropertyFixture>,
}

reflect_record!(ProviderFixture {
    name: String => "Name" as "name",
    properties: Vec<PropertyFixture> => "Properties" as "properties" [omit_empty],
});

pub fn app_fixture() -> AppFixture {
    AppFixture {
        id: "app-1".to_string(),
        name: "My App".to_string(),
        description: String::new(),
        inbound: vec![InboundFixture {
            kind: "oauth2".to_string(),
            oauth: Some(OAuthFixture {
                client_id: "client-123".to_string(),
                client_secret: "s3cret".to_string(),
                redirect_uris: vec![
                    "https://a.example/cb".to_string(),
                    "https://b.example/cb".to_string(),
                ],
                scopes: vec!["openid".to_string()],
            }),
        }],
    }
}

pub fn provider_fixture() -> ProviderFixture {
    ProviderFixture {
        name: "Google".to_string(),
        properties: vec![
            PropertyFixture::new("client_id", "abc", false),
            PropertyFixture::new("client_secret", "xyz", true),
        ],
    }
}
