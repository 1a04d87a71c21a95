//! File-backed catalog provider.

use crate::catalog::format::{parse_document, CatalogFormat};
use crate::catalog::{Catalog, CatalogProvider};
use crate::domain::error::{PickerError, Result};
use crate::domain::ContentItem;
use std::path::PathBuf;

/// Loads the catalog from a TOML or JSON file.
///
/// The format is chosen by file extension (`.json` for JSON, anything else is
/// read as TOML). The file is read once, when the plugin initializes.
///
/// # Examples
///
/// ```no_run
/// use content_picker::catalog::{CatalogProvider, FileCatalog};
///
/// let provider = FileCatalog::new("/host/.config/zellij/snippets.toml");
/// let catalog = provider.load()?;
/// # Ok::<(), content_picker::PickerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("file_catalog_load", path = ?self.path).entered();

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            PickerError::Catalog(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let format =
            CatalogFormat::from_extension(self.path.extension().and_then(|ext| ext.to_str()));
        let document = parse_document(&text, format)?;

        tracing::debug!(
            name = ?document.name,
            item_count = document.items.len(),
            "catalog file parsed"
        );

        Catalog::new(document.items.into_iter().map(ContentItem::from).collect())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[items]]\ntitle = \"Greeting\"\ncontent = \"Hello\"\n\n[[items]]\ntitle = \"Farewell\"\ncontent = \"Bye\""
        )
        .unwrap();

        let catalog = FileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].content(), "Bye");
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"name":"x","items":[{{"id":"g","title":"Greeting","content":"Hello"}}]}}"#
        )
        .unwrap();

        let catalog = FileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.items()[0].key().as_str(), "g");
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileCatalog::new(dir.path().join("absent.toml")).load().unwrap_err();
        assert!(matches!(err, PickerError::Catalog(msg) if msg.contains("absent.toml")));
    }

    #[test]
    fn duplicate_titles_without_ids_fail_validation() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[items]]\ntitle = \"Same\"\ncontent = \"1\"\n\n[[items]]\ntitle = \"Same\"\ncontent = \"2\""
        )
        .unwrap();

        assert!(FileCatalog::new(file.path()).load().is_err());
    }
}
