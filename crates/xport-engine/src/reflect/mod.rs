//! Introspection capability walked by the node builder and the path translator.
//!
//! A record exposes its fields in declaration order as [`FieldDef`] metadata (declared
//! name, serialized name, omit-empty flag, field type shape) together with a borrowed
//! value for each field. Records implement [`Reflect`] through [`reflect_record!`];
//! primitives, collections, `Option` and dynamic values are covered here.
//!
//! [`reflect_record!`]: crate::reflect_record

mod dynamic;
mod record;
mod std_impls;

pub use dynamic::{Dynamic, DynamicValue};

use crate::node::ScalarTag;
use crate::property::Property;
use std::borrow::Cow;

/// Type-level view used when no value is available (rule path translation).
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Scalar(ScalarTag),
    Dynamic,
    Record {
        name: &'static str,
        fields: &'static [FieldDef],
    },
    Sequence(fn() -> Shape),
    Map(fn() -> Shape),
}

impl Shape {
    pub fn fields(&self) -> Option<&'static [FieldDef]> {
        match *self {
            Shape::Record { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Looks a field up by declared name, exact match first, then ignoring case.
    pub fn field(&self, declared: &str) -> Option<&'static FieldDef> {
        let fields = self.fields()?;
        fields
            .iter()
            .find(|field| field.declared == declared)
            .or_else(|| {
                fields
                    .iter()
                    .find(|field| field.declared.eq_ignore_ascii_case(declared))
            })
    }

    pub fn element(&self) -> Option<Shape> {
        match *self {
            Shape::Sequence(element) => Some(element()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub declared: &'static str,
    pub serialized: &'static str,
    pub omit_empty: bool,
    pub shape: fn() -> Shape,
}

pub struct FieldRef<'a> {
    pub def: &'static FieldDef,
    pub value: &'a dyn Reflect,
}

pub enum Reflected<'a> {
    Null,
    Scalar(ScalarTag, Cow<'a, str>),
    Record(Vec<FieldRef<'a>>),
    Sequence(Vec<&'a dyn Reflect>),
    Map(Vec<(String, &'a dyn Reflect)>),
    Dynamic(&'a dyn DynamicValue),
}

impl Reflected<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Reflected::Null => "null",
            Reflected::Scalar(ScalarTag::Str, _) => "string",
            Reflected::Scalar(ScalarTag::Bool, _) => "bool",
            Reflected::Scalar(ScalarTag::Int, _) => "int",
            Reflected::Scalar(ScalarTag::Float, _) => "float",
            Reflected::Record(_) => "record",
            Reflected::Sequence(_) => "sequence",
            Reflected::Map(_) => "map",
            Reflected::Dynamic(_) => "dynamic",
        }
    }

    /// Omit-empty test: empty text or collection, zero number, false, nil.
    pub fn is_empty(&self) -> bool {
        match self {
            Reflected::Null => true,
            Reflected::Scalar(ScalarTag::Str, text) => text.is_empty(),
            Reflected::Scalar(ScalarTag::Bool, text) => &**text == "false",
            Reflected::Scalar(ScalarTag::Int, text) => &**text == "0",
            Reflected::Scalar(ScalarTag::Float, text) => {
                text.parse::<f64>().map(|value| value == 0.0).unwrap_or(false)
            }
            Reflected::Record(_) | Reflected::Dynamic(_) => false,
            Reflected::Sequence(items) => items.is_empty(),
            Reflected::Map(entries) => entries.is_empty(),
        }
    }
}

pub trait Reflect {
    fn shape() -> Shape
    where
        Self: Sized;

    fn reflect(&self) -> Reflected<'_>;

    fn is_empty_value(&self) -> bool {
        self.reflect().is_empty()
    }

    /// Elements that can stand in for a dynamic property list return `Some`.
    fn as_property(&self) -> Option<&dyn Property> {
        None
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
