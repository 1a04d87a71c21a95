//! Catalog provider abstraction.
//!
//! The picker never hardcodes its content. A [`CatalogProvider`] is injected at
//! initialization and asked once for a validated [`Catalog`]; selection,
//! reordering and insertion work the same whichever provider supplied it.

use crate::catalog::Catalog;
use crate::domain::error::Result;

/// Source of the immutable content catalog.
///
/// # Implementations
///
/// - [`BuiltinCatalog`](crate::catalog::BuiltinCatalog): embedded food-safety articles
/// - [`FileCatalog`](crate::catalog::FileCatalog): TOML or JSON file on disk
///
/// # Examples
///
/// ```
/// use content_picker::catalog::{BuiltinCatalog, CatalogProvider};
///
/// let catalog = BuiltinCatalog.load()?;
/// assert_eq!(catalog.len(), 5);
/// # Ok::<(), content_picker::PickerError>(())
/// ```
pub trait CatalogProvider {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or fails validation.
    fn load(&self) -> Result<Catalog>;

    /// Short description of the source, for log output.
    fn describe(&self) -> String;
}
