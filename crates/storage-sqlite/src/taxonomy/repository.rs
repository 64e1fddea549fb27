//! Repository implementation for taxons.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use storefront_core::taxonomy::{NewTaxonRecord, Taxon, TaxonRepositoryTrait};
use storefront_core::Result;

use super::model::{NewTaxonDB, TaxonDB, TaxonTranslationDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{taxon_translations, taxons};

/// SQLite caps bound parameters per statement; `IN (...)` lists are chunked.
const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

pub struct TaxonRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TaxonRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

/// Attaches translations to taxon rows, keeping the row order.
fn with_translations(
    conn: &mut SqliteConnection,
    rows: Vec<TaxonDB>,
) -> std::result::Result<Vec<Taxon>, StorageError> {
    let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
    let mut by_taxon: HashMap<String, Vec<TaxonTranslationDB>> = HashMap::new();

    for chunk in ids.chunks(SQLITE_MAX_PARAMS_CHUNK) {
        let translations = taxon_translations::table
            .filter(taxon_translations::taxon_id.eq_any(chunk.to_vec()))
            .order(taxon_translations::locale.asc())
            .select(TaxonTranslationDB::as_select())
            .load::<TaxonTranslationDB>(conn)?;
        for translation in translations {
            by_taxon
                .entry(translation.taxon_id.clone())
                .or_default()
                .push(translation);
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let translations = by_taxon.remove(&row.id).unwrap_or_default();
            row.into_domain(translations)
        })
        .collect())
}

fn load_one(
    conn: &mut SqliteConnection,
    row: Option<TaxonDB>,
) -> std::result::Result<Option<Taxon>, StorageError> {
    match row {
        Some(row) => Ok(with_translations(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

#[async_trait]
impl TaxonRepositoryTrait for TaxonRepository {
    fn get_taxons(&self) -> Result<Vec<Taxon>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = taxons::table
            .order((taxons::parent_id.asc(), taxons::position.asc()))
            .select(TaxonDB::as_select())
            .load::<TaxonDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(with_translations(&mut conn, rows)?)
    }

    fn get_taxon(&self, id: &str) -> Result<Option<Taxon>> {
        let mut conn = get_connection(&self.pool)?;
        let row = taxons::table
            .find(id)
            .select(TaxonDB::as_select())
            .first::<TaxonDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(load_one(&mut conn, row)?)
    }

    fn find_one_by_code(&self, code: &str) -> Result<Option<Taxon>> {
        let mut conn = get_connection(&self.pool)?;
        let row = taxons::table
            .filter(taxons::code.eq(code))
            .select(TaxonDB::as_select())
            .first::<TaxonDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(load_one(&mut conn, row)?)
    }

    fn find_children(&self, parent_id: &str) -> Result<Vec<Taxon>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = taxons::table
            .filter(taxons::parent_id.eq(parent_id))
            .order(taxons::position.asc())
            .select(TaxonDB::as_select())
            .load::<TaxonDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(with_translations(&mut conn, rows)?)
    }

    fn slug_exists(&self, locale: &str, slug: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(exists(
            taxon_translations::table
                .filter(taxon_translations::locale.eq(locale))
                .filter(taxon_translations::slug.eq(slug)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(StorageError::from)?;
        Ok(found)
    }

    async fn create_taxon(&self, taxon: NewTaxonRecord) -> Result<Taxon> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Taxon> {
                let id = taxon.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
                let (row, translations) = NewTaxonDB::from_record(taxon, id.clone());

                diesel::insert_into(taxons::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::insert_into(taxon_translations::table)
                    .values(&translations)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let created = taxons::table
                    .find(&id)
                    .select(TaxonDB::as_select())
                    .first::<TaxonDB>(conn)
                    .map_err(StorageError::from)?;
                let mut loaded = with_translations(conn, vec![created])?;
                loaded
                    .pop()
                    .ok_or_else(|| StorageError::from(diesel::result::Error::NotFound).into())
            })
            .await
    }

    async fn delete_taxon(&self, id: &str) -> Result<usize> {
        let id = id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(taxons::table.find(&id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use storefront_core::errors::{DatabaseError, Error};
    use storefront_core::taxonomy::TaxonTranslation;
    use tempfile::{tempdir, TempDir};

    fn setup() -> (TempDir, TaxonRepository) {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("taxons.db");
        let db_path = db::init(db_path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        let writer = db::spawn_writer((*pool).clone());
        (tmp, TaxonRepository::new(pool, writer))
    }

    fn record(code: &str, parent_id: Option<String>, slug: &str) -> NewTaxonRecord {
        NewTaxonRecord {
            id: None,
            code: code.to_string(),
            parent_id,
            position: 0,
            translations: vec![TaxonTranslation {
                locale: "en_US".to_string(),
                name: code.to_string(),
                slug: slug.to_string(),
                description: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_code() {
        let (_tmp, repo) = setup();

        let root = repo
            .create_taxon(record("category", None, "category"))
            .await
            .unwrap();
        let child = repo
            .create_taxon(record("shoes", Some(root.id.clone()), "category/shoes"))
            .await
            .unwrap();

        let found = repo.find_one_by_code("shoes").unwrap().unwrap();
        assert_eq!(found.id, child.id);
        assert_eq!(found.parent_id.as_deref(), Some(root.id.as_str()));
        assert_eq!(found.translations[0].slug, "category/shoes");

        assert!(repo.find_one_by_code("missing").unwrap().is_none());
        assert_eq!(repo.find_children(&root.id).unwrap().len(), 1);
        assert_eq!(repo.get_taxons().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_slug_exists_is_scoped_by_locale() {
        let (_tmp, repo) = setup();
        repo.create_taxon(record("category", None, "category"))
            .await
            .unwrap();

        assert!(repo.slug_exists("en_US", "category").unwrap());
        assert!(!repo.slug_exists("fr_FR", "category").unwrap());
        assert!(!repo.slug_exists("en_US", "shoes").unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_a_unique_violation() {
        let (_tmp, repo) = setup();
        repo.create_taxon(record("category", None, "category"))
            .await
            .unwrap();

        let err = repo
            .create_taxon(record("category-2", None, "category"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        // the failed insert rolled back the taxon row too
        assert!(repo.find_one_by_code("category-2").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_children() {
        let (_tmp, repo) = setup();
        let root = repo
            .create_taxon(record("category", None, "category"))
            .await
            .unwrap();
        repo.create_taxon(record("shoes", Some(root.id.clone()), "category/shoes"))
            .await
            .unwrap();

        assert_eq!(repo.delete_taxon(&root.id).await.unwrap(), 1);
        assert!(repo.get_taxons().unwrap().is_empty());
        assert!(!repo.slug_exists("en_US", "category/shoes").unwrap());
    }
}
