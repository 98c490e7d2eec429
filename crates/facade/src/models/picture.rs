use catalog_core::types::CatalogId;
use serde::{Deserialize, Serialize};

/// A stored image. The raw bytes are served as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: Option<CatalogId>,
    #[serde(skip_serializing, default)]
    pub content: Vec<u8>,
    pub position: Option<i32>,
}
