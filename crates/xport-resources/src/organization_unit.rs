use serde::{Deserialize, Serialize};
use xport_engine::reflect_record;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationUnit {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub description: String,
    /// Parent unit id; `None` for a root unit.
    pub parent: Option<String>,
}

reflect_record!(OrganizationUnit {
    id: String => "ID" as "id" [omit_empty],
    handle: String => "Handle" as "handle",
    name: String => "Name" as "name",
    description: String => "Description" as "description" [omit_empty],
    parent: Option<String> => "Parent" as "parent" [omit_empty],
});
