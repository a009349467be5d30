use crate::property::ConfigProperty;
use serde::{Deserialize, Serialize};
use xport_engine::reflect_record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSender {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
    pub properties: Vec<ConfigProperty>,
}

reflect_record!(NotificationSender {
    id: String => "ID" as "id" [omit_empty],
    name: String => "Name" as "name",
    description: String => "Description" as "description" [omit_empty],
    kind: String => "Type" as "type",
    provider: String => "Provider" as "provider",
    properties: Vec<ConfigProperty> => "Properties" as "properties" [omit_empty],
});
