use crate::field_path::FieldPath;
use crate::issues::{IssueSeverity, StructuredIssue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    Scalar,
    Array,
    DynamicProperty,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Scalar => "Variables",
            RuleKind::Array => "ArrayVariables",
            RuleKind::DynamicProperty => "DynamicPropertyFields",
        }
    }
}

/// Field paths of one resource type that are replaced by placeholders on export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "Variables", default, skip_serializing_if = "Vec::is_empty")]
    pub scalar_paths: Vec<FieldPath>,
    #[serde(rename = "ArrayVariables", default, skip_serializing_if = "Vec::is_empty")]
    pub array_paths: Vec<FieldPath>,
    #[serde(rename = "DynamicPropertyFields", default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_property_paths: Vec<FieldPath>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalar(mut self, path: FieldPath) -> Self {
        self.scalar_paths.push(path);
        self
    }

    pub fn with_array(mut self, path: FieldPath) -> Self {
        self.array_paths.push(path);
        self
    }

    pub fn with_dynamic_property(mut self, path: FieldPath) -> Self {
        self.dynamic_property_paths.push(path);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scalar_paths.is_empty()
            && self.array_paths.is_empty()
            && self.dynamic_property_paths.is_empty()
    }

    pub fn paths(&self, kind: RuleKind) -> &[FieldPath] {
        match kind {
            RuleKind::Scalar => &self.scalar_paths,
            RuleKind::Array => &self.array_paths,
            RuleKind::DynamicProperty => &self.dynamic_property_paths,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleKind, &FieldPath)> {
        [RuleKind::Scalar, RuleKind::Array, RuleKind::DynamicProperty]
            .into_iter()
            .flat_map(move |kind| self.paths(kind).iter().map(move |path| (kind, path)))
    }

    /// True when `path` names a field referenced by any of the three rule lists.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.iter().any(|(_, rule)| rule.matches_ignoring_markers(path))
    }

    pub fn is_dynamic_property(&self, path: &FieldPath) -> bool {
        self.dynamic_property_paths
            .iter()
            .any(|rule| rule.matches_ignoring_markers(path))
    }

    /// Rewrites every path through `map`, keeping list membership and order.
    pub fn map_paths(&self, mut map: impl FnMut(&FieldPath) -> FieldPath) -> RuleSet {
        RuleSet {
            scalar_paths: self.scalar_paths.iter().map(&mut map).collect(),
            array_paths: self.array_paths.iter().map(&mut map).collect(),
            dynamic_property_paths: self.dynamic_property_paths.iter().map(&mut map).collect(),
        }
    }

    pub fn validate(&self, resource_type: &str) -> Vec<StructuredIssue> {
        let mut issues = Vec::new();
        let mut seen = BTreeMap::<String, RuleKind>::new();
        for (kind, path) in self.iter() {
            if path.is_empty() {
                issues.push(rule_issue(
                    resource_type,
                    "rules.path.empty",
                    path.clone(),
                    format!("{} contains an empty path", kind.as_str()),
                ));
                continue;
            }
            let key = path.to_string().to_ascii_lowercase();
            match seen.get(&key) {
                Some(previous) if *previous == kind => issues.push(rule_issue(
                    resource_type,
                    "rules.path.duplicate",
                    path.clone(),
                    format!("`{path}` is listed twice in {}", kind.as_str()),
                )),
                Some(previous) => issues.push(rule_issue(
                    resource_type,
                    "rules.path.conflict",
                    path.clone(),
                    format!(
                        "`{path}` is listed in both {} and {}",
                        previous.as_str(),
                        kind.as_str()
                    ),
                )),
                None => {
                    seen.insert(key, kind);
                }
            }
        }
        issues
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("read rules config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("rules config parse failed: {0}")]
    Parse(String),
    #[error("rules config validation failed: {0:?}")]
    Validation(Vec<StructuredIssue>),
}

/// Resource type name to [`RuleSet`]. Built once at start-up and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleRegistry {
    entries: BTreeMap<String, RuleSet>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource_type: impl Into<String>, rules: RuleSet) -> Self {
        self.insert(resource_type, rules);
        self
    }

    pub fn insert(&mut self, resource_type: impl Into<String>, rules: RuleSet) {
        self.entries.insert(resource_type.into(), rules);
    }

    /// Exact lookup first, then ignoring case and `_` so `identity_provider` finds
    /// `IdentityProvider`.
    pub fn get(&self, resource_type: &str) -> Option<&RuleSet> {
        if let Some(rules) = self.entries.get(resource_type) {
            return Some(rules);
        }
        let wanted = normalize_type_name(resource_type);
        self.entries
            .iter()
            .find(|(name, _)| normalize_type_name(name) == wanted)
            .map(|(_, rules)| rules)
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of `other` replace same-named entries of `self`.
    pub fn merged_with(&self, other: &RuleRegistry) -> RuleRegistry {
        let mut merged = self.clone();
        for (resource_type, rules) in &other.entries {
            let existing = merged
                .entries
                .keys()
                .find(|name| normalize_type_name(name) == normalize_type_name(resource_type))
                .cloned();
            if let Some(existing) = existing {
                merged.entries.remove(&existing);
            }
            merged.entries.insert(resource_type.clone(), rules.clone());
        }
        merged
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, RuleConfigError> {
        let registry: RuleRegistry = serde_yaml::from_str(input)
            .map_err(|error| RuleConfigError::Parse(format!("yaml decode error: {error}")))?;
        registry.validated()
    }

    pub fn from_json_str(input: &str) -> Result<Self, RuleConfigError> {
        let registry: RuleRegistry = serde_json::from_str(input)
            .map_err(|error| RuleConfigError::Parse(format!("json decode error: {error}")))?;
        registry.validated()
    }

    pub fn load(path: &Path) -> Result<Self, RuleConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| RuleConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(raw.as_str()),
            Some("yaml") | Some("yml") => Self::from_yaml_str(raw.as_str()),
            _ => {
                let registry: RuleRegistry = serde_yaml::from_str(raw.as_str())
                    .or_else(|_| serde_json::from_str(raw.as_str()))
                    .map_err(|error| RuleConfigError::Parse(error.to_string()))?;
                registry.validated()
            }
        }
    }

    pub fn validate(&self) -> Vec<StructuredIssue> {
        let mut issues = Vec::new();
        let mut names = BTreeSet::new();
        for (resource_type, rules) in &self.entries {
            if resource_type.trim().is_empty() {
                issues.push(rule_issue(
                    resource_type,
                    "rules.resource_type.empty",
                    FieldPath::root(),
                    "resource type name must not be empty".to_string(),
                ));
            }
            if !names.insert(normalize_type_name(resource_type)) {
                issues.push(rule_issue(
                    resource_type,
                    "rules.resource_type.duplicate",
                    FieldPath::root(),
                    format!("resource type `{resource_type}` is declared more than once"),
                ));
            }
            issues.extend(rules.validate(resource_type));
        }
        StructuredIssue::sort_stable(&mut issues);
        issues
    }

    fn validated(self) -> Result<Self, RuleConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(RuleConfigError::Validation(issues))
        }
    }
}

fn normalize_type_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn rule_issue(
    resource_type: &str,
    reference: &str,
    field_path: FieldPath,
    message: String,
) -> StructuredIssue {
    StructuredIssue {
        kind: "rule_config_error".to_string(),
        severity: IssueSeverity::Error,
        resource_type: Some(resource_type.to_string()),
        field_path,
        message,
        reference: Some(reference.to_string()),
        related: None,
    }
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
