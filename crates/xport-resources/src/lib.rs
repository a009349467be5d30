//! Exportable configuration resources and the rules shipped for them.

pub mod application;
pub mod identity_provider;
pub mod notification_sender;
pub mod organization_unit;
pub mod property;
pub mod resource;
pub mod rules;
pub mod user_schema;

pub use application::{
    Application, ApplicationCertificate, InboundAuthConfig, OAuthAppConfig, OAuthTokenConfig,
    TokenConfig,
};
pub use identity_provider::IdentityProvider;
pub use notification_sender::NotificationSender;
pub use organization_unit::OrganizationUnit;
pub use property::ConfigProperty;
pub use resource::{ExportableResource, ResourceError, ResourceType};
pub use rules::builtin_rules;
pub use user_schema::UserSchema;
