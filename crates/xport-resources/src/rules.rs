use once_cell::sync::Lazy;
use xport_core::{FieldPath, RuleRegistry, RuleSet};

static BUILTIN_RULES: Lazy<RuleRegistry> = Lazy::new(|| {
    let dynamic_properties = RuleSet::new().with_dynamic_property(FieldPath::lenient("Properties"));
    RuleRegistry::new()
        .with(
            "Application",
            RuleSet::new()
                .with_scalar(FieldPath::lenient(
                    "InboundAuthConfig[].OAuthAppConfig.ClientID",
                ))
                .with_scalar(FieldPath::lenient(
                    "InboundAuthConfig[].OAuthAppConfig.ClientSecret",
                ))
                .with_array(FieldPath::lenient(
                    "InboundAuthConfig[].OAuthAppConfig.RedirectURIs",
                )),
        )
        .with("IdentityProvider", dynamic_properties.clone())
        .with("NotificationSender", dynamic_properties)
        .with("OrganizationUnit", RuleSet::new())
        .with("UserSchema", RuleSet::new())
});

/// Rules shipped with the binary. Organization units and user schemas carry empty rule sets
/// so they still go through the template renderer.
pub fn builtin_rules() -> &'static RuleRegistry {
    &BUILTIN_RULES
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
