use super::{Reflect, Reflected, Shape};
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// Object-safe view of a value whose static type is unknown to the walker.
pub trait DynamicValue {
    fn to_json(&self) -> serde_json::Result<String>;

    fn describe(&self) -> String;
}

impl<T: Serialize + Debug> DynamicValue for T {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Holder for an "any"-typed field. `Dynamic::none()` behaves like a nil interface.
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn DynamicValue + Send + Sync>>);

impl Dynamic {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Debug + Send + Sync + 'static,
    {
        Self(Some(Box::new(value)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl Debug for Dynamic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Dynamic({})", value.describe()),
            None => write!(f, "Dynamic(None)"),
        }
    }
}

impl Reflect for Dynamic {
    fn shape() -> Shape {
        Shape::Dynamic
    }

    fn reflect(&self) -> Reflected<'_> {
        match &self.0 {
            Some(value) => Reflected::Dynamic(&**value),
            None => Reflected::Null,
        }
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}
