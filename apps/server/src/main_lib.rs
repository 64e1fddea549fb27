use std::sync::Arc;

use crate::config::Config;
use storefront_core::taxonomy::{
    TaxonFactory, TaxonFactoryTrait, TaxonRepositoryTrait, TaxonService, TaxonServiceTrait,
    TaxonSlugGenerator, TaxonSlugGeneratorTrait,
};
use storefront_storage_sqlite::{db, taxonomy::TaxonRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub taxon_service: Arc<dyn TaxonServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Composition root: every collaborator is built here and passed explicitly.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let taxon_repository: Arc<dyn TaxonRepositoryTrait> =
        Arc::new(TaxonRepository::new(pool.clone(), writer.clone()));
    let taxon_factory: Arc<dyn TaxonFactoryTrait> = Arc::new(TaxonFactory::new());
    let taxon_slug_generator: Arc<dyn TaxonSlugGeneratorTrait> = Arc::new(
        TaxonSlugGenerator::new(taxon_repository.clone())
            .with_default_locale(config.default_locale.clone()),
    );
    let taxon_service: Arc<dyn TaxonServiceTrait + Send + Sync> = Arc::new(TaxonService::new(
        taxon_repository,
        taxon_factory,
        taxon_slug_generator,
    ));

    Ok(Arc::new(AppState {
        taxon_service,
        db_path,
    }))
}
