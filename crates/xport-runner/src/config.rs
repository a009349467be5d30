use std::path::Path;
use tracing::debug;
use xport_core::{FieldPath, IssueSeverity, RuleConfigError, RuleRegistry, StructuredIssue};
use xport_resources::{builtin_rules, ResourceType};

/// Built-in rules with the entries of `path` (when given) replacing same-named types.
pub fn load_effective_rules(path: Option<&Path>) -> Result<RuleRegistry, RuleConfigError> {
    let Some(path) = path else {
        return Ok(builtin_rules().clone());
    };
    let overrides = RuleRegistry::load(path)?;
    let issues = validate_resource_types(&overrides);
    if !issues.is_empty() {
        return Err(RuleConfigError::Validation(issues));
    }
    debug!(
        path = %path.display(),
        overridden = overrides.len(),
        "loaded rules config"
    );
    Ok(builtin_rules().merged_with(&overrides))
}

pub fn validate_resource_types(registry: &RuleRegistry) -> Vec<StructuredIssue> {
    registry
        .resource_types()
        .filter(|name| name.parse::<ResourceType>().is_err())
        .map(|name| StructuredIssue {
            kind: "rule_config_error".to_string(),
            severity: IssueSeverity::Error,
            resource_type: Some(name.to_string()),
            field_path: FieldPath::root(),
            message: format!("unknown resource type `{name}`"),
            reference: Some("rules.resource_type.unknown".to_string()),
            related: None,
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
