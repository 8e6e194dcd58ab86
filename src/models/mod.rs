//! Data models for Shelf.

pub mod catalog;

pub use catalog::{Catalog, CatalogItem};
