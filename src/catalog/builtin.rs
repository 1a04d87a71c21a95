//! Built-in catalog embedded in the plugin binary.

use crate::catalog::format::{parse_document, CatalogFormat};
use crate::catalog::{Catalog, CatalogProvider};
use crate::domain::error::Result;
use crate::domain::ContentItem;

const FOOD_SAFETY: &str = include_str!("../../catalogs/food-safety.toml");

/// Provider for the five food-safety articles shipped with the plugin.
///
/// Used when no `catalog_file` is configured, and as the fallback when a
/// configured file cannot be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn load(&self) -> Result<Catalog> {
        let document = parse_document(FOOD_SAFETY, CatalogFormat::Toml)?;
        Catalog::new(document.items.into_iter().map(ContentItem::from).collect())
    }

    fn describe(&self) -> String {
        "builtin:food-safety".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_five_articles_in_order() {
        let catalog = BuiltinCatalog.load().unwrap();
        let titles: Vec<&str> = catalog.items().iter().map(ContentItem::title).collect();
        assert_eq!(
            titles,
            vec![
                "Importance of Food Safety",
                "Understanding Food Quality",
                "The Role of Temperature in Food Safety",
                "Cross-Contamination Prevention",
                "The Importance of Food Labels",
            ]
        );
    }

    #[test]
    fn builtin_items_are_keyed_by_title() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert!(catalog.items().iter().all(|item| item.key().as_str() == item.title()));
    }

    #[test]
    fn temperature_query_narrows_to_one_article() {
        let catalog = BuiltinCatalog.load().unwrap();
        let hits = catalog.filter("Temperature");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            catalog.get(hits[0]).map(ContentItem::title),
            Some("The Role of Temperature in Food Safety")
        );
    }
}
