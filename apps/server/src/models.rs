use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use storefront_core::taxonomy as core_taxonomy;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TaxonSlug {
    pub slug: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TaxonTranslation {
    pub locale: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<core_taxonomy::TaxonTranslation> for TaxonTranslation {
    fn from(t: core_taxonomy::TaxonTranslation) -> Self {
        Self {
            locale: t.locale,
            name: t.name,
            slug: t.slug,
            description: t.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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

impl From<core_taxonomy::Taxon> for Taxon {
    fn from(t: core_taxonomy::Taxon) -> Self {
        Self {
            id: t.id,
            code: t.code,
            parent_id: t.parent_id,
            position: t.position,
            translations: t.translations.into_iter().map(Into::into).collect(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxonTranslation {
    pub locale: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxon {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
    pub translations: Vec<NewTaxonTranslation>,
}

impl From<NewTaxon> for core_taxonomy::NewTaxon {
    fn from(n: NewTaxon) -> Self {
        Self {
            code: n.code,
            parent_code: n.parent_code,
            translations: n
                .translations
                .into_iter()
                .map(|t| core_taxonomy::NewTaxonTranslation {
                    locale: t.locale,
                    name: t.name,
                    slug: t.slug,
                    description: t.description,
                })
                .collect(),
        }
    }
}
