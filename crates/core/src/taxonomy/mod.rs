//! Taxonomy module - domain models, services, and traits.
//!
//! Provides the hierarchical product categorization tree and slug generation.

mod taxon_factory;
mod taxon_model;
mod taxon_service;
mod taxon_slug_generator;
mod taxon_traits;


pub use taxon_factory::TaxonFactory;
pub use taxon_model::{
    NewTaxon, NewTaxonRecord, NewTaxonTranslation, Taxon, TaxonTranslation, TransientTaxon,
};
pub use taxon_service::TaxonService;
pub use taxon_slug_generator::TaxonSlugGenerator;
pub use taxon_traits::{
    TaxonFactoryTrait, TaxonRepositoryTrait, TaxonServiceTrait, TaxonSlugGeneratorTrait,
};
