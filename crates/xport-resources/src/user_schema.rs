use serde::{Deserialize, Serialize};
use serde_json::Value;
use xport_engine::reflect_record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSchema {
    pub id: String,
    pub name: String,
    pub organization_unit_id: String,
    pub allow_self_registration: bool,
    /// Attribute definitions, exported as one JSON-encoded scalar.
    pub schema: Value,
}

reflect_record!(UserSchema {
    id: String => "ID" as "id" [omit_empty],
    name: String => "Name" as "name",
    organization_unit_id: String => "OrganizationUnitID" as "organization_unit_id" [omit_empty],
    allow_self_registration: bool => "AllowSelfRegistration" as "allow_self_registration" [omit_empty],
    schema: Value => "Schema" as "schema" [omit_empty],
});
