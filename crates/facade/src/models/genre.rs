use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: Option<CatalogId>,
    pub name: String,
    pub position: Option<i32>,
}
