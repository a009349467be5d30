use crate::builder::build_node;
use crate::error::ExportError;
use crate::generic::encode_plain;
use crate::parameterize::{parameterize, ParameterizeOptions};
use crate::reflect::Reflect;
use crate::render::render;
use crate::translate::translate_rules;
use tracing::debug;
use xport_core::{FieldPath, RuleSet, StructuredIssue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub content: String,
    /// Rule paths that matched nothing, tagged with the resource type.
    pub issues: Vec<StructuredIssue>,
}

/// Exports `resource` as a YAML template.
///
/// With `rules` the fields they name become `{{.NAME}}` placeholders or range blocks
/// scoped by `resource_name`; without rules the record is encoded as plain YAML.
pub fn to_parameterized_document<R: Reflect>(
    resource: &R,
    resource_type: &str,
    resource_name: &str,
    rules: Option<&RuleSet>,
) -> Result<String, ExportError> {
    to_parameterized_document_with_options(
        resource,
        resource_type,
        resource_name,
        rules,
        &ParameterizeOptions::default(),
    )
    .map(|outcome| outcome.content)
}

pub fn to_parameterized_document_with_options<R: Reflect>(
    resource: &R,
    resource_type: &str,
    resource_name: &str,
    rules: Option<&RuleSet>,
    options: &ParameterizeOptions,
) -> Result<ExportOutcome, ExportError> {
    debug!(resource_type, resource_name, with_rules = rules.is_some(), "exporting resource");
    let mut tree = build_node(resource, rules, &FieldPath::root(), resource_name)?;

    let Some(rules) = rules else {
        return Ok(ExportOutcome {
            content: encode_plain(&tree)?,
            issues: Vec::new(),
        });
    };

    let translated = translate_rules(R::shape(), rules);
    let report = parameterize(&mut tree, &translated, resource_name, options).map_err(|error| {
        match error {
            ExportError::UnresolvedRules(issues) => {
                ExportError::UnresolvedRules(tag_resource_type(issues, resource_type))
            }
            other => other,
        }
    })?;
    debug!(resource_type, rewritten = report.rewritten, "parameterized resource");

    Ok(ExportOutcome {
        content: render(&tree)?,
        issues: tag_resource_type(report.issues, resource_type),
    })
}

fn tag_resource_type(mut issues: Vec<StructuredIssue>, resource_type: &str) -> Vec<StructuredIssue> {
    for issue in &mut issues {
        issue.resource_type = Some(resource_type.to_string());
    }
    issues
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
