pub mod digest;
pub mod field_path;
pub mod issues;
pub mod rules;

pub use digest::content_digest_hex;
pub use field_path::{FieldPath, FieldPathParseError, FieldPathSegment};
pub use issues::{IssueSeverity, StructuredIssue};
pub use rules::{RuleConfigError, RuleKind, RuleRegistry, RuleSet};
