//! Parameterized export of configuration records.
//!
//! A record is walked through the [`Reflect`] capability into a [`Node`] tree, the fields
//! named by a [`RuleSet`](xport_core::RuleSet) are swapped for template placeholders and
//! the result is rendered as YAML with the placeholders left intact.

pub mod builder;
pub mod error;
pub mod export;
pub mod generic;
pub mod naming;
pub mod node;
pub mod parameterize;
pub mod property;
pub mod reflect;
pub mod render;
pub mod translate;

pub use builder::{build_node, NodeBuilder};
pub use error::ExportError;
pub use export::{to_parameterized_document, to_parameterized_document_with_options, ExportOutcome};
pub use generic::encode_plain;
pub use naming::{path_variable_name, placeholder_name, to_upper_snake_case};
pub use node::{Node, Scalar, ScalarTag};
pub use parameterize::{parameterize, ParameterizeOptions, ParameterizeReport};
pub use property::Property;
pub use reflect::{Dynamic, DynamicValue, FieldDef, FieldRef, Reflect, Reflected, Shape};
pub use render::{render, render_to, Renderer};
pub use translate::{translate_path, translate_rules};

#[cfg(test)]
mod test_support;
