//! Error responses for handlers.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use folio_common::FolioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Folio(#[from] FolioError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Folio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        let body = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{} — My Portfolio</title></head>
<body>
<h1>{}</h1>
<p>{}</p>
<p><a href="/">Back to home</a></p>
</body>
</html>"#,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            folio_render::markup::escape(&self.to_string()),
        );
        (status, Html(body)).into_response()
    }
}
