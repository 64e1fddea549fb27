//! Traits for taxon repository, factory, slug generator and service.

use async_trait::async_trait;

use crate::Result;

use super::{NewTaxon, NewTaxonRecord, Taxon, TransientTaxon};

/// Repository trait for taxon persistence operations.
#[async_trait]
pub trait TaxonRepositoryTrait: Send + Sync {
    fn get_taxons(&self) -> Result<Vec<Taxon>>;
    fn get_taxon(&self, id: &str) -> Result<Option<Taxon>>;
    fn find_one_by_code(&self, code: &str) -> Result<Option<Taxon>>;
    fn find_children(&self, parent_id: &str) -> Result<Vec<Taxon>>;
    fn slug_exists(&self, locale: &str, slug: &str) -> Result<bool>;
    async fn create_taxon(&self, taxon: NewTaxonRecord) -> Result<Taxon>;
    async fn delete_taxon(&self, id: &str) -> Result<usize>;
}

/// Builds transient taxons for slug computation.
pub trait TaxonFactoryTrait: Send + Sync {
    fn create_new(&self, name: &str, locale: &str) -> TransientTaxon;
}

/// Computes hierarchy-aware slugs.
pub trait TaxonSlugGeneratorTrait: Send + Sync {
    fn generate(&self, taxon: &TransientTaxon, locale: &str) -> Result<String>;
}

/// Service trait for taxon business logic.
#[async_trait]
pub trait TaxonServiceTrait: Send + Sync {
    /// Slug a taxon named `name` would get under the taxon with `parent_code`.
    /// An unknown parent code generates a root-level slug.
    fn generate_slug(&self, name: &str, locale: &str, parent_code: Option<&str>)
        -> Result<String>;

    fn get_taxons(&self) -> Result<Vec<Taxon>>;
    fn get_taxon_by_code(&self, code: &str) -> Result<Taxon>;
    async fn create_taxon(&self, taxon: NewTaxon) -> Result<Taxon>;
    async fn delete_taxon(&self, code: &str) -> Result<usize>;
}
