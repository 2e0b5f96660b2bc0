// Service exports
pub mod catalog;

pub use catalog::{decode_catalog_bytes, load_catalog, parse_catalog, CatalogError, CatalogStore};
