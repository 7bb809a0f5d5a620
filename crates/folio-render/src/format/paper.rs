use std::fmt::Write;

use folio_common::{Metric, PaperRecord};

use super::{links_section, Formatted};
use crate::icons::PAPER_ICONS;
use crate::markup::{bullet_section, escape, paragraphs, tag_chips};
use crate::media::MediaResolver;

pub fn format_paper(paper: &PaperRecord, media: &MediaResolver<'_>) -> Formatted {
    let mut out = String::new();
    out.push_str(r#"<section class="paper-container">"#);
    let _ = write!(out, r#"<h2 class="paper-title">{}</h2>"#, escape(paper.title()));
    let _ = write!(
        out,
        "<p><strong>Authors:</strong> {}</p><p><strong>Published in:</strong> {}, {}</p>",
        escape(&paper.authors().join(", ")),
        escape(paper.publication()),
        paper.year()
    );
    format_metrics(&mut out, paper.metrics());
    tag_chips(&mut out, paper.tags());

    out.push_str(r#"<div class="columns columns-2-1"><div class="column">"#);
    out.push_str("<h3>Abstract</h3>");
    paragraphs(&mut out, paper.abstract_text());
    bullet_section(&mut out, "Key Findings", paper.highlights());
    bullet_section(&mut out, "Methodologies", paper.methodologies());
    if let Some(citation) = paper.citation() {
        out.push_str("<h3>Citation</h3>");
        format_citation(&mut out, citation);
    }
    out.push_str(r#"</div><div class="column">"#);

    let outcome = media.paper_media(&mut out, paper);
    links_section(&mut out, paper.links(), &PAPER_ICONS);

    out.push_str("</div></div></section><hr>");
    Formatted { markup: out, media: outcome }
}

/// Metric chips such as "Citations: 42".
pub fn format_metrics(out: &mut String, metrics: &[Metric]) {
    if metrics.is_empty() {
        return;
    }
    out.push_str(r#"<div class="metrics-container">"#);
    for metric in metrics {
        let _ = write!(
            out,
            r#"<div class="metric-item"><span class="metric-label">{}:</span><span>{}</span></div>"#,
            escape(&metric.label),
            escape(&metric.value.to_string())
        );
    }
    out.push_str("</div>");
}

/// Preformatted citation box; line breaks are kept by CSS.
pub fn format_citation(out: &mut String, citation: &str) {
    let _ = write!(out, r#"<div class="citation-box">{}</div>"#, escape(citation.trim()));
}
