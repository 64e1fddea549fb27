use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{NewTaxon, Taxon, TaxonSlug},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use storefront_core::constants::MISSING_NAME_MESSAGE;
use tracing::debug;
use utoipa::IntoParams;

// ============================================================================
// Request Types
// ============================================================================

/// Raw query string of the slug endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GenerateSlugQuery {
    /// Taxon name; must not be blank
    pub name: Option<String>,
    /// Locale of the name, also used as its fallback locale
    #[serde(default)]
    pub locale: String,
    /// Code of the parent taxon; unknown codes generate a root-level slug
    pub parent_code: Option<String>,
}

/// Slug request validated at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSlugRequest {
    pub name: String,
    pub locale: String,
    pub parent_code: Option<String>,
}

impl TryFrom<GenerateSlugQuery> for GenerateSlugRequest {
    type Error = ApiError;

    fn try_from(query: GenerateSlugQuery) -> Result<Self, Self::Error> {
        let name = query.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest(MISSING_NAME_MESSAGE.to_string()));
        }
        Ok(Self {
            name,
            locale: query.locale,
            parent_code: query.parent_code,
        })
    }
}

// ============================================================================
// Slug Endpoint
// ============================================================================

#[utoipa::path(
    get,
    path = "/api/v1/taxons/generate-slug",
    params(GenerateSlugQuery),
    responses(
        (status = 200, body = TaxonSlug),
        (status = 400, description = "Blank name")
    )
)]
pub async fn generate_slug(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenerateSlugQuery>,
) -> ApiResult<Json<TaxonSlug>> {
    let request = GenerateSlugRequest::try_from(query)?;
    debug!(
        "Generating slug for '{}' (locale '{}', parent {:?})...",
        request.name, request.locale, request.parent_code
    );
    let slug = state.taxon_service.generate_slug(
        &request.name,
        &request.locale,
        request.parent_code.as_deref(),
    )?;
    Ok(Json(TaxonSlug { slug }))
}

// ============================================================================
// Taxon Endpoints
// ============================================================================

#[utoipa::path(get, path = "/api/v1/taxons", responses((status = 200, body = [Taxon])))]
pub async fn list_taxons(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Taxon>>> {
    debug!("Fetching all taxons...");
    let taxons = state.taxon_service.get_taxons()?;
    Ok(Json(taxons.into_iter().map(Taxon::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/taxons",
    request_body = NewTaxon,
    responses((status = 201, body = Taxon), (status = 409, description = "Code or slug taken"))
)]
pub async fn create_taxon(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTaxon>,
) -> ApiResult<(StatusCode, Json<Taxon>)> {
    debug!("Creating taxon {}...", payload.code);
    let created = state.taxon_service.create_taxon(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Taxon::from(created))))
}

#[utoipa::path(
    get,
    path = "/api/v1/taxons/{code}",
    responses((status = 200, body = Taxon), (status = 404))
)]
pub async fn get_taxon(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Taxon>> {
    debug!("Fetching taxon {}...", code);
    let taxon = state.taxon_service.get_taxon_by_code(&code)?;
    Ok(Json(Taxon::from(taxon)))
}

#[utoipa::path(delete, path = "/api/v1/taxons/{code}", responses((status = 204), (status = 404)))]
pub async fn delete_taxon(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    debug!("Deleting taxon {}...", code);
    let _ = state.taxon_service.delete_taxon(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/taxons", get(list_taxons).post(create_taxon))
        .route("/taxons/generate-slug", get(generate_slug))
        .route("/taxons/{code}", get(get_taxon).delete(delete_taxon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_missing_name_is_rejected() {
        for name in [None, Some(""), Some("   ")] {
            let query = GenerateSlugQuery {
                name: name.map(str::to_string),
                locale: "en_US".to_string(),
                parent_code: Some("category".to_string()),
            };
            match GenerateSlugRequest::try_from(query) {
                Err(ApiError::BadRequest(msg)) => assert_eq!(msg, MISSING_NAME_MESSAGE),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn valid_query_keeps_raw_values() {
        let query = GenerateSlugQuery {
            name: Some("Shoes".to_string()),
            locale: String::new(),
            parent_code: None,
        };
        let request = GenerateSlugRequest::try_from(query).unwrap();
        assert_eq!(
            request,
            GenerateSlugRequest {
                name: "Shoes".to_string(),
                locale: String::new(),
                parent_code: None,
            }
        );
    }
}
