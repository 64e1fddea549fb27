//! Hierarchy-aware slug generation for taxons.

use std::sync::Arc;

use log::debug;

use crate::constants::MAX_TAXON_DEPTH;
use crate::errors::{DatabaseError, ValidationError};
use crate::utils::{join_slug_path, slugify};
use crate::Result;

use super::{Taxon, TaxonRepositoryTrait, TaxonSlugGeneratorTrait, TaxonTranslation, TransientTaxon};

/// Generates `parent-slug/child-segment` slugs.
///
/// A parent's stored slug for the locale is reused as is. When the parent has
/// no slug in that locale, it is rebuilt from the parent's name and its own
/// ancestors, which are loaded through the repository.
///
/// Generation is pure: it never writes and never suffixes on collision.
pub struct TaxonSlugGenerator {
    repository: Arc<dyn TaxonRepositoryTrait>,
    default_locale: Option<String>,
}

impl TaxonSlugGenerator {
    pub fn new(repository: Arc<dyn TaxonRepositoryTrait>) -> Self {
        Self {
            repository,
            default_locale: None,
        }
    }

    /// Locale tried last when an ancestor has no translation in the requested one.
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    fn resolve_translation<'a>(
        &self,
        taxon: &'a Taxon,
        locale: &str,
        fallback_locale: &str,
    ) -> Option<&'a TaxonTranslation> {
        taxon.translation(locale, fallback_locale).or_else(|| {
            self.default_locale
                .as_deref()
                .and_then(|default| taxon.translation(default, default))
        })
    }

    fn ancestor_slug(
        &self,
        taxon: &Taxon,
        locale: &str,
        fallback_locale: &str,
        depth: usize,
    ) -> Result<String> {
        if depth >= MAX_TAXON_DEPTH {
            return Err(ValidationError::InvalidAncestry(taxon.code.clone()).into());
        }

        let translation = self.resolve_translation(taxon, locale, fallback_locale);
        if let Some(slug) = translation.map(|t| t.slug.trim()).filter(|s| !s.is_empty()) {
            return Ok(slug.to_string());
        }

        debug!(
            "Taxon {} has no slug for locale '{}', rebuilding it",
            taxon.code, locale
        );
        let name = translation
            .map(|t| t.name.trim())
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let segment = slugify(name);

        let Some(parent_id) = taxon.parent_id.as_deref() else {
            return Ok(segment);
        };
        let parent = self.repository.get_taxon(parent_id)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("Parent taxon {} of {}", parent_id, taxon.code))
        })?;
        let parent_slug = self.ancestor_slug(&parent, locale, fallback_locale, depth + 1)?;
        Ok(join_slug_path(&parent_slug, &segment))
    }
}

impl TaxonSlugGeneratorTrait for TaxonSlugGenerator {
    fn generate(&self, taxon: &TransientTaxon, locale: &str) -> Result<String> {
        let name = taxon
            .name_in(locale)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let segment = slugify(name);

        match taxon.parent.as_ref() {
            None => Ok(segment),
            Some(parent) => {
                let parent_slug = self.ancestor_slug(parent, locale, &taxon.fallback_locale, 1)?;
                Ok(join_slug_path(&parent_slug, &segment))
            }
        }
    }
}
