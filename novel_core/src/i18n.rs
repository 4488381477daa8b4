//! # Localization
//!
//! String lookup for user-visible texts. A catalog is a flat JSON object
//! mapping the English message to its translation:
//!
//! ```json
//! { "Short name": "Kurzname", "Number of sections": "Anzahl der Abschnitte" }
//! ```
//!
//! Messages missing from the catalog are shown untranslated.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::{NovelError, NovelResult};

/// Message catalog. The default translator has an empty catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: HashMap<String, String>,
}

impl Translator {
    pub fn from_catalog(catalog: HashMap<String, String>) -> Self {
        Translator { catalog }
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> NovelResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            NovelError::file_error("read catalog", path.display().to_string(), e.to_string())
        })?;
        let catalog: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|e| NovelError::SerializationError {
                reason: format!("Invalid catalog {}: {}", path.display(), e),
            })?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "translation catalog loaded");
        Ok(Translator { catalog })
    }

    pub fn translate(&self, key: &str) -> String {
        self.catalog
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_unknown_key_is_identity() {
        let tr = Translator::default();
        assert_eq!(tr.translate("Open"), "Open");
    }

    #[test]
    fn test_catalog_lookup() {
        let tr = Translator::from_catalog(HashMap::from([("Add".to_string(), "Hinzufügen".to_string())]));
        assert_eq!(tr.translate("Add"), "Hinzufügen");
        assert_eq!(tr.translate("Remove"), "Remove");
    }

    #[test]
    fn test_load_catalog_file() {
        let path = temp_dir().join("noveltree_test_catalog.json");
        fs::write(&path, r#"{"Short name": "Kurzname"}"#).unwrap();

        let tr = Translator::load(&path).unwrap();
        assert_eq!(tr.translate("Short name"), "Kurzname");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_catalog() {
        let path = temp_dir().join("noveltree_test_bad_catalog.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = Translator::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
