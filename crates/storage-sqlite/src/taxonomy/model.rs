//! Database models for taxons.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use log::error;
use storefront_core::taxonomy::{NewTaxonRecord, Taxon, TaxonTranslation};

/// Helper to parse RFC3339 string to NaiveDateTime
fn text_to_datetime(s: &str) -> NaiveDateTime {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_utc())
        .unwrap_or_else(|e| {
            error!("Failed to parse datetime '{}': {}", s, e);
            chrono::Utc::now().naive_utc()
        })
}

/// Database model for taxons
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::taxons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaxonDB {
    pub id: String,
    pub code: String,
    pub parent_id: Option<String>,
    pub position: i32,
    pub created_at: String, // Schema uses Text
    pub updated_at: String, // Schema uses Text
}

/// Database model for creating a new taxon
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::taxons)]
pub struct NewTaxonDB {
    pub id: String,
    pub code: String,
    pub parent_id: Option<String>,
    pub position: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for taxon translations
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::taxon_translations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaxonTranslationDB {
    pub id: String,
    pub taxon_id: String,
    pub locale: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Database model for creating a new taxon translation
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::taxon_translations)]
pub struct NewTaxonTranslationDB {
    pub id: String,
    pub taxon_id: String,
    pub locale: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<TaxonTranslationDB> for TaxonTranslation {
    fn from(db: TaxonTranslationDB) -> Self {
        Self {
            locale: db.locale,
            name: db.name,
            slug: db.slug,
            description: db.description,
        }
    }
}

impl TaxonDB {
    pub fn into_domain(self, translations: Vec<TaxonTranslationDB>) -> Taxon {
        Taxon {
            id: self.id,
            code: self.code,
            parent_id: self.parent_id,
            position: self.position,
            translations: translations
                .into_iter()
                .map(TaxonTranslation::from)
                .collect(),
            created_at: text_to_datetime(&self.created_at),
            updated_at: text_to_datetime(&self.updated_at),
        }
    }
}

impl NewTaxonDB {
    /// Splits a domain record into its taxon row and translation rows.
    pub fn from_record(
        record: NewTaxonRecord,
        id: String,
    ) -> (NewTaxonDB, Vec<NewTaxonTranslationDB>) {
        let now = chrono::Utc::now().to_rfc3339();
        let translations = record
            .translations
            .into_iter()
            .map(|t| NewTaxonTranslationDB {
                id: uuid::Uuid::new_v4().to_string(),
                taxon_id: id.clone(),
                locale: t.locale,
                name: t.name,
                slug: t.slug,
                description: t.description,
            })
            .collect();
        let taxon = NewTaxonDB {
            id,
            code: record.code,
            parent_id: record.parent_id,
            position: record.position,
            created_at: now.clone(),
            updated_at: now,
        };
        (taxon, translations)
    }
}
