use serde::{Deserialize, Serialize};
use xport_engine::{reflect_record, Property};

/// Name/value setting of an identity provider or notification sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigProperty {
    pub name: String,
    pub value: String,
    pub is_secret: bool,
}

impl ConfigProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>, is_secret: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_secret,
        }
    }
}

impl Property for ConfigProperty {
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn is_secret(&self) -> bool {
        self.is_secret
    }
}

reflect_record!(ConfigProperty: property {
    name: String => "Name" as "name",
    value: String => "Value" as "value",
    is_secret: bool => "IsSecret" as "is_secret" [omit_empty],
});
