use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{Criteria, ErrorResponse, FindProvidersRequest, HealthResponse, ProviderResponse, ReloadResponse};
use crate::services::CatalogStore;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
}

/// Configure all provider-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/providers/search", web::post().to(search_providers))
        .route("/catalog/reload", web::post().to(reload_catalog));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.catalog.snapshot();

    let status = if catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        providers: catalog.len(),
        catalog_loaded_at: catalog.loaded_at(),
    })
}

/// Provider search endpoint
///
/// POST /providers/search
///
/// Request body (every field optional):
/// ```json
/// {
///   "areas_of_concern": ["anxiety"],
///   "preferred_treatment_modality": ["cbt"],
///   "therapist_preferences": ["female"],
///   "locations": ["ca"],
///   "payment_methods": [],
///   "languages": ["english"]
/// }
/// ```
///
/// Responds with up to three providers, best match first.
async fn search_providers(
    state: web::Data<AppState>,
    req: web::Json<FindProvidersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let criteria = Criteria::from(req.into_inner());

    tracing::debug!(
        "Searching providers: areas={:?}, modalities={:?}, preferences={:?}, locations={:?}, languages={:?}",
        criteria.areas_of_concern,
        criteria.preferred_treatment_modality,
        criteria.therapist_preferences,
        criteria.locations,
        criteria.languages
    );

    let catalog = state.catalog.snapshot();
    let matcher = state.matcher.clone();

    let result = match web::block(move || matcher.find_matches(&catalog, &criteria)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Provider matching failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "An error occurred when finding a matching provider".to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!(
        "Returning {} providers ({} eligible of {} in catalog)",
        result.providers.len(),
        result.eligible_candidates,
        result.total_candidates
    );

    let providers: Vec<ProviderResponse> = result
        .providers
        .into_iter()
        .map(ProviderResponse::from)
        .collect();

    HttpResponse::Ok().json(providers)
}

/// Catalog reload endpoint
///
/// POST /catalog/reload
///
/// Re-reads the catalog file. In-flight searches finish on the snapshot they
/// started with; a failed reload leaves the current catalog in place.
async fn reload_catalog(state: web::Data<AppState>) -> impl Responder {
    let store = Arc::clone(&state.catalog);

    let outcome = web::block(move || store.reload()).await;

    match outcome {
        Ok(Ok(catalog)) => {
            tracing::info!("Catalog reloaded with {} providers", catalog.len());
            HttpResponse::Ok().json(ReloadResponse {
                success: true,
                providers: catalog.len(),
                loaded_at: catalog.loaded_at(),
            })
        }
        Ok(Err(e)) => {
            tracing::error!("Failed to reload catalog from {}: {}", state.catalog.path().display(), e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "An error occurred when reloading the provider catalog".to_string(),
                status_code: 500,
            })
        }
        Err(e) => {
            tracing::error!("Catalog reload task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "An error occurred when reloading the provider catalog".to_string(),
                status_code: 500,
            })
        }
    }
}
