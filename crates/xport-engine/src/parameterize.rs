use crate::error::ExportError;
use crate::naming::path_variable_name;
use crate::node::Node;
use tracing::debug;
use xport_core::{FieldPath, FieldPathSegment, IssueSeverity, RuleKind, RuleSet, StructuredIssue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterizeOptions {
    /// Fail when a scalar or array rule path matches nothing instead of ignoring it.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterizeReport {
    pub rewritten: usize,
    pub issues: Vec<StructuredIssue>,
}

enum Rewrite {
    Scalar(String),
    Array(String),
}

impl Rewrite {
    fn apply(&self, node: &mut Node) -> Option<usize> {
        match self {
            Rewrite::Scalar(variable) => {
                *node = Node::placeholder(variable);
                Some(1)
            }
            Rewrite::Array(variable) => match node {
                Node::Sequence(_) | Node::Null => {
                    *node = Node::Sequence(Node::range_template(variable));
                    Some(1)
                }
                _ => None,
            },
        }
    }
}

/// Replaces the nodes named by serialized-name rule paths with placeholders.
///
/// Scalar rules overwrite the target with `{{.VAR}}`. Array rules swap the target
/// sequence body for the range template; none of the existing elements are kept.
/// Dynamic property rules are applied while building and are skipped here.
pub fn parameterize(
    tree: &mut Node,
    rules: &RuleSet,
    resource_name: &str,
    options: &ParameterizeOptions,
) -> Result<ParameterizeReport, ExportError> {
    let mut report = ParameterizeReport::default();
    for kind in [RuleKind::Scalar, RuleKind::Array] {
        for path in rules.paths(kind) {
            let variable = path_variable_name(resource_name, path);
            let action = match kind {
                RuleKind::Array => Rewrite::Array(variable),
                _ => Rewrite::Scalar(variable),
            };
            match rewrite(tree, path.segments(), &action) {
                Some(count) => report.rewritten += count,
                None => {
                    debug!(path = %path, kind = kind.as_str(), "rule path did not resolve");
                    report.issues.push(unresolved_issue(kind, path));
                }
            }
        }
    }

    if options.strict && !report.issues.is_empty() {
        return Err(ExportError::UnresolvedRules(report.issues));
    }
    Ok(report)
}

// None when the path leaves the tree; Some(0) when it ends in an empty sequence fan-out.
fn rewrite(node: &mut Node, segments: &[FieldPathSegment], action: &Rewrite) -> Option<usize> {
    let (segment, rest) = segments.split_first()?;
    let child = node.get_mut(segment.name())?;

    if segment.is_repeated() {
        if rest.is_empty() {
            return None;
        }
        if let Node::Sequence(items) = child {
            if items.is_empty() {
                return Some(0);
            }
            return items
                .iter_mut()
                .filter_map(|item| rewrite(item, rest, action))
                .reduce(|left, right| left + right);
        }
        return rewrite(child, rest, action);
    }

    if rest.is_empty() {
        action.apply(child)
    } else {
        rewrite(child, rest, action)
    }
}

fn unresolved_issue(kind: RuleKind, path: &FieldPath) -> StructuredIssue {
    StructuredIssue {
        kind: "unresolved_rule_path".to_string(),
        severity: IssueSeverity::Warning,
        resource_type: None,
        field_path: path.clone(),
        message: format!("{} path `{path}` did not match any node", kind.as_str()),
        reference: Some("parameterize.unresolved_path".to_string()),
        related: None,
    }
}

#[cfg(test)]
#[path = "parameterize_test.rs"]
mod tests;
