use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const REPEAT_MARKER: &str = "[]";

/// One dotted segment of a [`FieldPath`]. `repeat` marks a `Name[]` segment that fans out
/// over every element of the sequence it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPathSegment {
    name: String,
    repeat: bool,
}

impl FieldPathSegment {
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repeat: false,
        }
    }

    pub fn repeated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repeat: true,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_repeated(&self) -> bool {
        self.repeat
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repeat: self.repeat,
        }
    }

    fn matches_ignoring_marker(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(other.name.as_str())
    }
}

impl Display for FieldPathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.repeat {
            write!(f, "{}{REPEAT_MARKER}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Dotted path of record field names such as `InboundAuthConfig[].OAuthAppConfig.ClientID`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<FieldPathSegment>) -> Self {
        Self { segments }
    }

    /// Splits on `.` and strips `[]` markers without validating segment characters.
    /// Empty segments are dropped.
    pub fn lenient(input: &str) -> Self {
        let segments = input
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_suffix(REPEAT_MARKER) {
                Some(name) => FieldPathSegment::repeated(name),
                None => FieldPathSegment::key(part),
            })
            .collect();
        Self { segments }
    }

    pub fn push_key(&mut self, name: impl Into<String>) {
        self.segments.push(FieldPathSegment::key(name));
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push_key(name);
        next
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&FieldPathSegment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment names compared case-insensitively; repeat markers are ignored on both sides.
    pub fn matches_ignoring_markers(&self, other: &FieldPath) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(left, right)| left.matches_ignoring_marker(right))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldPathParseError {
    #[error("field path must not be empty")]
    Empty,
    #[error("empty segment at position {0}")]
    EmptySegment(usize),
    #[error("invalid segment `{0}`")]
    InvalidSegment(String),
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

impl std::str::FromStr for FieldPath {
    type Err = FieldPathParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(FieldPathParseError::Empty);
        }

        let mut segments = Vec::new();
        for (position, part) in input.split('.').enumerate() {
            if part.is_empty() {
                return Err(FieldPathParseError::EmptySegment(position));
            }
            let (name, repeat) = match part.strip_suffix(REPEAT_MARKER) {
                Some(name) => (name, true),
                None => (part, false),
            };
            if name.is_empty() {
                return Err(FieldPathParseError::InvalidSegment(part.to_string()));
            }
            if let Some(c) = name
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
            {
                return Err(FieldPathParseError::UnexpectedChar(c));
            }
            segments.push(FieldPathSegment {
                name: name.to_string(),
                repeat,
            });
        }

        Ok(FieldPath::from_segments(segments))
    }
}

impl TryFrom<String> for FieldPath {
    type Error = FieldPathParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.to_string()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
