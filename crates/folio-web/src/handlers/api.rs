//! JSON views of the content catalog.

use axum::{extract::State, Json};
use folio_common::{PaperRecord, ProjectRecord};

use crate::state::SharedState;

/// GET /api/projects
pub async fn api_projects(State(state): State<SharedState>) -> Json<Vec<ProjectRecord>> {
    Json(state.site.catalog().projects.clone())
}

/// GET /api/papers
pub async fn api_papers(State(state): State<SharedState>) -> Json<Vec<PaperRecord>> {
    Json(state.site.catalog().papers.clone())
}
