//! Record formatters.
//!
//! A formatter renders one record: title, tag chips, then a two-column grid
//! with the narrative fields on the left and media plus links on the right.

pub mod paper;
pub mod project;

use std::fmt::Write;

use folio_common::Link;

use crate::icons::IconTable;
use crate::markup::escape;
use crate::media::MediaOutcome;

pub use paper::format_paper;
pub use project::format_project;

/// Markup for one record plus whether its media chain showed anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub markup: String,
    pub media: MediaOutcome,
}

impl Formatted {
    pub fn media_shown(&self) -> bool {
        self.media.is_shown()
    }
}

/// "Links" heading and one anchor per link, in input order.
pub(crate) fn links_section(out: &mut String, links: &[Link], icons: &IconTable) {
    if links.is_empty() {
        return;
    }
    out.push_str(r#"<h3>Links</h3><ul class="links">"#);
    for link in links {
        let icon = icons.select(&link.label, &link.url);
        let _ = write!(
            out,
            r#"<li><a href="{}" target="_blank" rel="noopener">{} {}</a></li>"#,
            escape(&link.url),
            icon.glyph(),
            escape(&link.label)
        );
    }
    out.push_str("</ul>");
}
