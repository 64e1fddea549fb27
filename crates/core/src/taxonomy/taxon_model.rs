//! Domain models for taxons.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Locale-specific name and slug of a taxon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonTranslation {
    pub locale: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// A node of the product categorization tree (e.g. "Category" > "Shoes")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxon {
    pub id: String,
    pub code: String,
    pub parent_id: Option<String>,
    pub position: i32,
    pub translations: Vec<TaxonTranslation>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Taxon {
    /// Translation for `locale`, or for `fallback_locale` when the former is missing.
    pub fn translation(&self, locale: &str, fallback_locale: &str) -> Option<&TaxonTranslation> {
        self.translations
            .iter()
            .find(|t| t.locale == locale)
            .or_else(|| self.translations.iter().find(|t| t.locale == fallback_locale))
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Translation input when creating a taxon. A missing slug is generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxonTranslation {
    pub locale: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// Data for creating a new taxon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxon {
    pub code: String,
    pub parent_code: Option<String>,
    pub translations: Vec<NewTaxonTranslation>,
}

/// Fully resolved taxon, ready to be persisted by a repository.
#[derive(Debug, Clone)]
pub struct NewTaxonRecord {
    pub id: Option<String>,
    pub code: String,
    pub parent_id: Option<String>,
    pub position: i32,
    pub translations: Vec<TaxonTranslation>,
}

/// In-memory taxon used only to compute a slug. Never persisted.
///
/// The name is known in a single locale; the same locale is usually used as
/// both current and fallback so name resolution cannot miss.
#[derive(Debug, Clone)]
pub struct TransientTaxon {
    pub name: String,
    pub current_locale: String,
    pub fallback_locale: String,
    pub parent: Option<Taxon>,
}

impl TransientTaxon {
    pub fn new(name: impl Into<String>, locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            name: name.into(),
            current_locale: locale.clone(),
            fallback_locale: locale,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<Taxon>) -> Self {
        self.parent = parent;
        self
    }

    /// Name as seen from `locale`, honouring the fallback locale.
    pub fn name_in(&self, locale: &str) -> Option<&str> {
        if locale == self.current_locale || locale == self.fallback_locale {
            Some(self.name.as_str())
        } else {
            None
        }
    }
}
