//! folio-common — Shared types, errors, and configuration used across all folio crates.

pub mod error;
pub mod records;
pub mod site_config;

// Re-export commonly used types
pub use error::{FolioError, Result};
pub use records::{Link, Metric, MetricValue, PaperRecord, ProjectRecord, RecordError};
pub use site_config::{SiteConfig, UnembeddablePolicy};
