/// Identifier assigned by the catalog facade layer.
pub type CatalogId = i32;

/// Length of a medium, song or episode in seconds.
pub type Seconds = i32;
