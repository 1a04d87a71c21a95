//! Catalog layer: where content items come from and how they are filtered.
//!
//! # Modules
//!
//! - `provider`: [`CatalogProvider`] trait injected into the picker
//! - `builtin`: embedded default catalog
//! - `file`: TOML/JSON file catalog
//! - `format`: serialized document types
//! - `model`: validated [`Catalog`] and its title filter

pub mod builtin;
pub mod file;
pub mod format;
pub mod model;
pub mod provider;

pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;
pub use model::Catalog;
pub use provider::CatalogProvider;
