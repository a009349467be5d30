use crate::error::ExportError;
use crate::naming::placeholder_name;
use crate::node::{Node, Scalar};
use crate::property::Property;
use crate::reflect::{DynamicValue, FieldRef, Reflect, Reflected};
use tracing::warn;
use xport_core::{FieldPath, RuleSet};

/// Walks an introspected record into a [`Node`] tree.
///
/// Field paths are tracked with declared names so they can be matched against rule
/// paths; mapping keys use serialized names. Omit-empty fields are dropped when empty
/// unless a rule references them.
pub struct NodeBuilder<'a> {
    rules: Option<&'a RuleSet>,
    resource_name: &'a str,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(rules: Option<&'a RuleSet>, resource_name: &'a str) -> Self {
        Self {
            rules,
            resource_name,
        }
    }

    pub fn build(&self, value: &dyn Reflect, path_prefix: &FieldPath) -> Result<Node, ExportError> {
        match value.reflect() {
            Reflected::Null => Ok(Node::Null),
            Reflected::Record(fields) => Ok(self.record_node(fields, path_prefix)),
            other => Err(ExportError::InputType {
                found: other.kind_name(),
            }),
        }
    }

    fn record_node(&self, fields: Vec<FieldRef<'_>>, prefix: &FieldPath) -> Node {
        let mut entries = Vec::with_capacity(fields.len());
        for field in fields {
            let path = prefix.child(field.def.declared);
            if field.def.omit_empty && field.value.is_empty_value() && !self.referenced(&path) {
                continue;
            }
            entries.push((
                field.def.serialized.to_string(),
                self.value_node(field.value, &path),
            ));
        }
        Node::Mapping(entries)
    }

    fn value_node(&self, value: &dyn Reflect, path: &FieldPath) -> Node {
        match value.reflect() {
            Reflected::Null => Node::Null,
            Reflected::Scalar(tag, text) => Node::Scalar(Scalar::new(tag, text.into_owned())),
            Reflected::Record(fields) => self.record_node(fields, path),
            Reflected::Sequence(items) => self.sequence_node(items, path),
            // Map entries share the map's own path; keys are data, not declared fields.
            Reflected::Map(entries) => Node::Mapping(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, self.value_node(entry, path)))
                    .collect(),
            ),
            Reflected::Dynamic(value) => dynamic_node(value),
        }
    }

    fn sequence_node(&self, items: Vec<&dyn Reflect>, path: &FieldPath) -> Node {
        let dynamic = self
            .rules
            .is_some_and(|rules| rules.is_dynamic_property(path));
        Node::Sequence(
            items
                .into_iter()
                .map(|item| match item.as_property().filter(|_| dynamic) {
                    Some(property) => self.property_node(property),
                    None => self.value_node(item, path),
                })
                .collect(),
        )
    }

    fn property_node(&self, property: &dyn Property) -> Node {
        let name = property.display_name();
        let variable = placeholder_name(self.resource_name, name);
        let mut entries = vec![
            ("name".to_string(), Node::string(name)),
            ("value".to_string(), Node::placeholder(variable.as_str())),
        ];
        if property.is_secret() {
            entries.push(("is_secret".to_string(), Node::bool(true)));
        }
        Node::Mapping(entries)
    }

    fn referenced(&self, path: &FieldPath) -> bool {
        self.rules.is_some_and(|rules| rules.contains(path))
    }
}

fn dynamic_node(value: &dyn DynamicValue) -> Node {
    match value.to_json() {
        Ok(json) => Node::string(json),
        Err(error) => {
            warn!(%error, "dynamic value is not JSON encodable, exporting its debug form");
            Node::string(value.describe())
        }
    }
}

pub fn build_node(
    value: &dyn Reflect,
    rules: Option<&RuleSet>,
    path_prefix: &FieldPath,
    resource_name: &str,
) -> Result<Node, ExportError> {
    NodeBuilder::new(rules, resource_name).build(value, path_prefix)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
