//! SQLite storage implementation for taxons.

mod model;
mod repository;

pub use model::{NewTaxonDB, NewTaxonTranslationDB, TaxonDB, TaxonTranslationDB};
pub use repository::TaxonRepository;
