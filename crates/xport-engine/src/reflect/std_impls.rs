use super::{DynamicValue, Reflect, Reflected, Shape};
use crate::node::ScalarTag;
use crate::property::Property;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

impl Reflect for String {
    fn shape() -> Shape {
        Shape::Scalar(ScalarTag::Str)
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(ScalarTag::Str, Cow::Borrowed(self.as_str()))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for &str {
    fn shape() -> Shape {
        Shape::Scalar(ScalarTag::Str)
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(ScalarTag::Str, Cow::Borrowed(*self))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for bool {
    fn shape() -> Shape {
        Shape::Scalar(ScalarTag::Bool)
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Scalar(ScalarTag::Bool, Cow::Borrowed(if *self { "true" } else { "false" }))
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

macro_rules! reflect_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(ScalarTag::Int)
                }

                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Scalar(ScalarTag::Int, Cow::Owned(self.to_string()))
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

reflect_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! reflect_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(ScalarTag::Float)
                }

                fn reflect(&self) -> Reflected<'_> {
                    let text = if self.is_nan() {
                        ".nan".to_string()
                    } else if self.is_infinite() && self.is_sign_positive() {
                        ".inf".to_string()
                    } else if self.is_infinite() {
                        "-.inf".to_string()
                    } else {
                        self.to_string()
                    };
                    Reflected::Scalar(ScalarTag::Float, Cow::Owned(text))
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

reflect_float!(f32, f64);

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn reflect(&self) -> Reflected<'_> {
        match self {
            Some(value) => value.reflect(),
            None => Reflected::Null,
        }
    }

    // A present value counts as set even when the value itself is empty.
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }

    fn as_property(&self) -> Option<&dyn Property> {
        self.as_ref().and_then(|value| value.as_property())
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn as_property(&self) -> Option<&dyn Property> {
        (**self).as_property()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Sequence(self.iter().map(|item| item as &dyn Reflect).collect())
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Display, V: Reflect> Reflect for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(V::shape)
    }

    fn reflect(&self) -> Reflected<'_> {
        Reflected::Map(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Reflect))
                .collect(),
        )
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// Entries are ordered by key text so repeated exports of the same map are identical.
impl<K: Display, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Map(V::shape)
    }

    fn reflect(&self) -> Reflected<'_> {
        let mut entries = self
            .iter()
            .map(|(key, value)| (key.to_string(), value as &dyn Reflect))
            .collect::<Vec<_>>();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        Reflected::Map(entries)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for serde_json::Value {
    fn shape() -> Shape {
        Shape::Dynamic
    }

    fn reflect(&self) -> Reflected<'_> {
        match self {
            serde_json::Value::Null => Reflected::Null,
            other => Reflected::Dynamic(other as &dyn DynamicValue),
        }
    }
}

#[cfg(test)]
#[path = "std_impls_test.rs"]
mod tests;
