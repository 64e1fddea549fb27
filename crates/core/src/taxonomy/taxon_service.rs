//! Taxon service implementation.

use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{DatabaseError, Error, ValidationError};
use crate::Result;

use super::{
    NewTaxon, NewTaxonRecord, Taxon, TaxonFactoryTrait, TaxonRepositoryTrait,
    TaxonServiceTrait, TaxonSlugGeneratorTrait, TaxonTranslation,
};

pub struct TaxonService {
    repository: Arc<dyn TaxonRepositoryTrait>,
    factory: Arc<dyn TaxonFactoryTrait>,
    slug_generator: Arc<dyn TaxonSlugGeneratorTrait>,
}

impl TaxonService {
    pub fn new(
        repository: Arc<dyn TaxonRepositoryTrait>,
        factory: Arc<dyn TaxonFactoryTrait>,
        slug_generator: Arc<dyn TaxonSlugGeneratorTrait>,
    ) -> Self {
        Self {
            repository,
            factory,
            slug_generator,
        }
    }

    fn find_parent(&self, parent_code: Option<&str>) -> Result<Option<Taxon>> {
        // Codes match exactly; only an empty code counts as absent.
        match parent_code.filter(|c| !c.is_empty()) {
            Some(code) => self.repository.find_one_by_code(code),
            None => Ok(None),
        }
    }

    /// Position a new child of `parent` gets: after all its current siblings.
    fn next_position(&self, parent: Option<&Taxon>) -> Result<i32> {
        let siblings = match parent {
            Some(parent) => self.repository.find_children(&parent.id)?.len(),
            None => self
                .repository
                .get_taxons()?
                .iter()
                .filter(|t| t.is_root())
                .count(),
        };
        i32::try_from(siblings).map_err(|e| Error::Unexpected(e.to_string()))
    }

    fn normalize_slug(slug: &str) -> Option<String> {
        let slug = slug.trim().trim_matches('/');
        (!slug.is_empty()).then(|| slug.to_string())
    }
}

#[async_trait]
impl TaxonServiceTrait for TaxonService {
    fn generate_slug(
        &self,
        name: &str,
        locale: &str,
        parent_code: Option<&str>,
    ) -> Result<String> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }

        let parent = self.find_parent(parent_code)?;
        if parent.is_none() && parent_code.is_some() {
            debug!(
                "Parent taxon {:?} not found, generating a root slug",
                parent_code
            );
        }

        let taxon = self.factory.create_new(name, locale).with_parent(parent);
        self.slug_generator.generate(&taxon, locale)
    }

    fn get_taxons(&self) -> Result<Vec<Taxon>> {
        self.repository.get_taxons()
    }

    fn get_taxon_by_code(&self, code: &str) -> Result<Taxon> {
        self.repository
            .find_one_by_code(code)?
            .ok_or_else(|| DatabaseError::NotFound(format!("Taxon {}", code)).into())
    }

    async fn create_taxon(&self, taxon: NewTaxon) -> Result<Taxon> {
        let code = taxon.code.trim().to_string();
        if code.is_empty() {
            return Err(ValidationError::MissingField("code".to_string()).into());
        }
        if taxon.translations.is_empty() {
            return Err(ValidationError::MissingField("translations".to_string()).into());
        }
        if self.repository.find_one_by_code(&code)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Taxon with code '{}' already exists",
                code
            )));
        }

        let parent = match taxon.parent_code.as_deref() {
            Some(parent_code) if !parent_code.is_empty() => Some(
                self.repository
                    .find_one_by_code(parent_code)?
                    .ok_or_else(|| {
                        DatabaseError::NotFound(format!("Parent taxon {}", parent_code))
                    })?,
            ),
            _ => None,
        };

        let mut seen_locales = HashSet::new();
        let mut translations = Vec::with_capacity(taxon.translations.len());
        for translation in taxon.translations {
            if !seen_locales.insert(translation.locale.clone()) {
                return Err(ValidationError::InvalidInput(format!(
                    "Duplicate translation for locale '{}'",
                    translation.locale
                ))
                .into());
            }
            let name = translation.name.trim();
            if name.is_empty() {
                return Err(ValidationError::MissingField("name".to_string()).into());
            }

            let slug = match translation.slug.as_deref().and_then(Self::normalize_slug) {
                Some(slug) => slug,
                None => {
                    let transient = self
                        .factory
                        .create_new(name, &translation.locale)
                        .with_parent(parent.clone());
                    self.slug_generator
                        .generate(&transient, &translation.locale)?
                }
            };

            if self.repository.slug_exists(&translation.locale, &slug)? {
                return Err(Error::ConstraintViolation(format!(
                    "Slug '{}' is already used in locale '{}'",
                    slug, translation.locale
                )));
            }

            translations.push(TaxonTranslation {
                locale: translation.locale,
                name: name.to_string(),
                slug,
                description: translation.description,
            });
        }

        let record = NewTaxonRecord {
            id: None,
            code,
            parent_id: parent.as_ref().map(|p| p.id.clone()),
            position: self.next_position(parent.as_ref())?,
            translations,
        };
        debug!("Creating taxon {}...", record.code);
        self.repository.create_taxon(record).await
    }

    async fn delete_taxon(&self, code: &str) -> Result<usize> {
        let taxon = self.get_taxon_by_code(code)?;
        self.repository.delete_taxon(&taxon.id).await
    }
}
