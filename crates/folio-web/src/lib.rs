//! folio-web — HTTP front end for the portfolio site.
//! Serves:
//!   - Home, Projects and Research pages
//!   - JSON dumps of the content catalog
//!   - Static assets (photos, videos, figures, PDFs)

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
