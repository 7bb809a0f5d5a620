//! Shared application state for the web server.

use std::sync::Arc;

use folio_common::{Result, SiteConfig};
use folio_render::Site;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub site: Site,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        Self { site }
    }

    pub fn from_config(config: SiteConfig) -> Result<Self> {
        Ok(Self::new(Site::from_config(config)?))
    }
}

pub type SharedState = Arc<AppState>;
