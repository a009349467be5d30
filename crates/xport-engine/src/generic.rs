use crate::error::ExportError;
use crate::node::{Node, Scalar, ScalarTag};
use serde_yaml::{Mapping, Number, Value};

/// Plain YAML encoding used when no rules apply. Mapping order is kept as built.
pub fn encode_plain(node: &Node) -> Result<String, ExportError> {
    Ok(serde_yaml::to_string(&to_yaml_value(node))?)
}

pub fn to_yaml_value(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Scalar(scalar) => scalar_value(scalar),
        Node::Sequence(items) => Value::Sequence(items.iter().map(to_yaml_value).collect()),
        Node::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                mapping.insert(Value::String(key.clone()), to_yaml_value(value));
            }
            Value::Mapping(mapping)
        }
    }
}

fn scalar_value(scalar: &Scalar) -> Value {
    let text = scalar.value.as_str();
    match scalar.tag {
        ScalarTag::Str => Value::String(scalar.value.clone()),
        ScalarTag::Bool => Value::Bool(text == "true"),
        ScalarTag::Int => text
            .parse::<i64>()
            .map(Number::from)
            .or_else(|_| text.parse::<u64>().map(Number::from))
            .map(Value::Number)
            .unwrap_or_else(|_| Value::String(scalar.value.clone())),
        ScalarTag::Float => {
            let parsed = match text {
                ".nan" => Ok(f64::NAN),
                ".inf" => Ok(f64::INFINITY),
                "-.inf" => Ok(f64::NEG_INFINITY),
                other => other.parse::<f64>(),
            };
            parsed
                .map(|value| Value::Number(Number::from(value)))
                .unwrap_or_else(|_| Value::String(scalar.value.clone()))
        }
    }
}

#[cfg(test)]
#[path = "generic_test.rs"]
mod tests;
