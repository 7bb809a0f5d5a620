use std::fmt::Write;

use folio_common::ProjectRecord;

use super::{links_section, Formatted};
use crate::icons::PROJECT_ICONS;
use crate::markup::{bullet_section, escape, paragraphs, tag_chips};
use crate::media::MediaResolver;

pub fn format_project(project: &ProjectRecord, media: &MediaResolver<'_>) -> Formatted {
    let mut out = String::new();
    out.push_str(r#"<section class="project-container">"#);
    let _ = write!(out, r#"<h2 class="project-title">{}</h2>"#, escape(project.title()));
    tag_chips(&mut out, project.tags());

    out.push_str(r#"<div class="columns columns-2-1"><div class="column">"#);
    out.push_str("<h3>Description</h3>");
    paragraphs(&mut out, project.description());
    bullet_section(&mut out, "Key Features", project.key_features());
    bullet_section(&mut out, "Technologies Used", project.technologies());
    out.push_str(r#"</div><div class="column">"#);

    let outcome = media.project_media(&mut out, project);
    links_section(&mut out, project.links(), &PROJECT_ICONS);

    out.push_str("</div></div></section><hr>");
    Formatted { markup: out, media: outcome }
}
