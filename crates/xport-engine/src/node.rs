pub const PLACEHOLDER_SENTINEL: &str = "{{";
pub const RANGE_OPEN_PREFIX: &str = "{{- range";
pub const RANGE_CLOSE: &str = "{{- end}}";
pub const RANGE_ITEM: &str = "{{.}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTag {
    Str,
    Bool,
    Int,
    Float,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub tag: ScalarTag,
    pub value: String,
}

impl Scalar {
    pub fn new(tag: ScalarTag, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.starts_with(PLACEHOLDER_SENTINEL)
    }
}

/// Generic document tree produced from an introspected record. Mapping entries keep the
/// order in which they were pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Null,
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::new(ScalarTag::Str, value))
    }

    pub fn bool(value: bool) -> Self {
        Node::Scalar(Scalar::new(ScalarTag::Bool, value.to_string()))
    }

    pub fn placeholder(variable: &str) -> Self {
        Node::string(format!("{{{{.{variable}}}}}"))
    }

    /// The three-node body that stands in for a parameterized array.
    pub fn range_template(variable: &str) -> Vec<Node> {
        vec![
            Node::string(format!("{RANGE_OPEN_PREFIX} .{variable}}}}}")),
            Node::string(RANGE_ITEM),
            Node::string(RANGE_CLOSE),
        ]
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self {
            Node::Mapping(entries) => entries
                .iter_mut()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            Node::Mapping(entries) => entries.iter().map(|(key, _)| key.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_template_sequence(&self) -> bool {
        match self {
            Node::Sequence(items) => matches!(
                items.first(),
                Some(Node::Scalar(first)) if first.value.starts_with(RANGE_OPEN_PREFIX)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
