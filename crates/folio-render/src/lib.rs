//! folio-render — HTML rendering core for the portfolio site.
//! Provides:
//!   - Asset lookup rooted at the configured asset directory
//!   - Video id extraction and the media fallback chain
//!   - PDF embedding for papers
//!   - Project and paper formatters
//!   - Page assembly with explicit navigation requests
//!   - The built-in content catalog

pub mod assets;
pub mod catalog;
pub mod format;
pub mod icons;
pub mod layout;
pub mod markup;
pub mod media;
pub mod pages;
pub mod pdf;
pub mod video;

pub use assets::{AssetStore, FsAssets};
pub use catalog::{Catalog, Profile};
pub use media::{MediaKind, MediaOutcome, MediaResolver};
pub use pages::{Interaction, NavRequest, Page, PageOutput, Site};
pub use video::{extract_video_id, Provider, VideoMatch};
