//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use folio_render::assets::ASSET_URL_PREFIX;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{
    api::{api_papers, api_projects},
    pages::{home_page, projects_page, research_page},
    system::healthz,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let assets_dir = state.site.config().assets.dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",         get(home_page))
        .route("/projects", get(projects_page))
        .route("/research", get(research_page))

        // API endpoints
        .route("/api/projects", get(api_projects))
        .route("/api/papers",   get(api_papers))
        .route("/healthz",      get(healthz))

        // Photos, videos, figures, PDFs
        .nest_service(ASSET_URL_PREFIX, ServeDir::new(assets_dir))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
