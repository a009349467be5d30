use crate::application::Application;
use crate::identity_provider::IdentityProvider;
use crate::notification_sender::NotificationSender;
use crate::organization_unit::OrganizationUnit;
use crate::user_schema::UserSchema;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use xport_core::RuleSet;
use xport_engine::{to_parameterized_document_with_options, ExportError, ExportOutcome, ParameterizeOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Application,
    IdentityProvider,
    NotificationSender,
    OrganizationUnit,
    UserSchema,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Application,
        ResourceType::IdentityProvider,
        ResourceType::NotificationSender,
        ResourceType::OrganizationUnit,
        ResourceType::UserSchema,
    ];

    /// Name used as the rule registry key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Application => "Application",
            ResourceType::IdentityProvider => "IdentityProvider",
            ResourceType::NotificationSender => "NotificationSender",
            ResourceType::OrganizationUnit => "OrganizationUnit",
            ResourceType::UserSchema => "UserSchema",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("unknown resource type `{0}`")]
    UnknownType(String),
    #[error("{resource_type} decode failed: {reason}")]
    Decode {
        resource_type: ResourceType,
        reason: String,
    },
}

impl FromStr for ResourceType {
    type Err = ResourceError;

    /// Accepts registry names and their snake/kebab forms plus the `idp` and `ou` aliases.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect::<String>();
        match wanted.as_str() {
            "idp" => return Ok(ResourceType::IdentityProvider),
            "ou" => return Ok(ResourceType::OrganizationUnit),
            _ => {}
        }
        ResourceType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| ResourceError::UnknownType(input.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportableResource {
    Application(Application),
    IdentityProvider(IdentityProvider),
    NotificationSender(NotificationSender),
    OrganizationUnit(OrganizationUnit),
    UserSchema(UserSchema),
}

impl ExportableResource {
    pub fn decode(resource_type: ResourceType, value: Value) -> Result<Self, ResourceError> {
        let decode_error = |error: serde_json::Error| ResourceError::Decode {
            resource_type,
            reason: error.to_string(),
        };
        Ok(match resource_type {
            ResourceType::Application => {
                ExportableResource::Application(serde_json::from_value(value).map_err(decode_error)?)
            }
            ResourceType::IdentityProvider => ExportableResource::IdentityProvider(
                serde_json::from_value(value).map_err(decode_error)?,
            ),
            ResourceType::NotificationSender => ExportableResource::NotificationSender(
                serde_json::from_value(value).map_err(decode_error)?,
            ),
            ResourceType::OrganizationUnit => ExportableResource::OrganizationUnit(
                serde_json::from_value(value).map_err(decode_error)?,
            ),
            ResourceType::UserSchema => {
                ExportableResource::UserSchema(serde_json::from_value(value).map_err(decode_error)?)
            }
        })
    }

    pub fn resource_type(&self) -> ResourceType {
        match self {
            ExportableResource::Application(_) => ResourceType::Application,
            ExportableResource::IdentityProvider(_) => ResourceType::IdentityProvider,
            ExportableResource::NotificationSender(_) => ResourceType::NotificationSender,
            ExportableResource::OrganizationUnit(_) => ResourceType::OrganizationUnit,
            ExportableResource::UserSchema(_) => ResourceType::UserSchema,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ExportableResource::Application(resource) => resource.name.as_str(),
            ExportableResource::IdentityProvider(resource) => resource.name.as_str(),
            ExportableResource::NotificationSender(resource) => resource.name.as_str(),
            ExportableResource::OrganizationUnit(resource) => resource.name.as_str(),
            ExportableResource::UserSchema(resource) => resource.name.as_str(),
        }
    }

    pub fn export(
        &self,
        resource_name: &str,
        rules: Option<&RuleSet>,
        options: &ParameterizeOptions,
    ) -> Result<ExportOutcome, ExportError> {
        let resource_type = self.resource_type().as_str();
        match self {
            ExportableResource::Application(resource) => to_parameterized_document_with_options(
                resource,
                resource_type,
                resource_name,
                rules,
                options,
            ),
            ExportableResource::IdentityProvider(resource) => {
                to_parameterized_document_with_options(
                    resource,
                    resource_type,
                    resource_name,
                    rules,
                    options,
                )
            }
            ExportableResource::NotificationSender(resource) => {
                to_parameterized_document_with_options(
                    resource,
                    resource_type,
                    resource_name,
                    rules,
                    options,
                )
            }
            ExportableResource::OrganizationUnit(resource) => {
                to_parameterized_document_with_options(
                    resource,
                    resource_type,
                    resource_name,
                    rules,
                    options,
                )
            }
            ExportableResource::UserSchema(resource) => to_parameterized_document_with_options(
                resource,
                resource_type,
                resource_name,
                rules,
                options,
            ),
        }
    }
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod tests;
