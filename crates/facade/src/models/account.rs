use catalog_core::types::CatalogId;

/// A login account. `password_hash` is an Argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: CatalogId,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}
