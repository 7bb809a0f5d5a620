//! Page handlers. Each request renders the whole page; a sidebar click
//! arrives as `?nav=<page>` and is answered with a redirect.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use folio_render::{Interaction, Page, PageOutput};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub nav: Option<String>,
}

impl NavQuery {
    fn interaction(&self) -> Result<Option<Interaction>, ApiError> {
        self.nav
            .as_deref()
            .map(|key| {
                key.parse::<Page>()
                    .map(Interaction::NavClicked)
                    .map_err(|e| ApiError::BadRequest(e.to_string()))
            })
            .transpose()
    }
}

pub async fn home_page(State(state): State<SharedState>, Query(query): Query<NavQuery>) -> Result<Response, ApiError> {
    render(&state, Page::Home, &query)
}

pub async fn projects_page(State(state): State<SharedState>, Query(query): Query<NavQuery>) -> Result<Response, ApiError> {
    render(&state, Page::Projects, &query)
}

pub async fn research_page(State(state): State<SharedState>, Query(query): Query<NavQuery>) -> Result<Response, ApiError> {
    render(&state, Page::Research, &query)
}

fn render(state: &SharedState, page: Page, query: &NavQuery) -> Result<Response, ApiError> {
    let interaction = query.interaction()?;
    match state.site.render(page, interaction)? {
        PageOutput::Document(doc) => Ok(Html(doc.html).into_response()),
        PageOutput::Navigate(request) => Ok(Redirect::to(request.target().path()).into_response()),
    }
}
