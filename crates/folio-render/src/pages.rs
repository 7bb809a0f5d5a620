//! Page assembly.
//!
//! Every page is rendered top to bottom on each request: style block,
//! navigation, header content, one formatter call per record, closing block.
//! A navigation click does not switch pages here; it comes back as a
//! `NavRequest` for the caller (the HTTP router) to act on.

use std::fmt::{self, Write};
use std::str::FromStr;

use folio_common::{Result, SiteConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::assets::{AssetStore, FsAssets};
use crate::catalog::Catalog;
use crate::format::{format_paper, format_project};
use crate::layout::{Layout, BASE_CSS, HOME_CSS, RESEARCH_CSS};
use crate::markup::escape;
use crate::media::{image_load_failed, MediaResolver};

// ── Pages ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Projects,
    Research,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Wide,
    Centered,
}

impl PageLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            PageLayout::Wide => "wide",
            PageLayout::Centered => "centered",
        }
    }
}

/// Title, icon and layout a page registers with the document shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub icon: &'static str,
    pub layout: PageLayout,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Projects, Page::Research];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Research => "research",
        }
    }

    /// Sidebar button text.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Research => "Researches",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::Research => "/research",
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Page::Home => PageMeta { title: "My Portfolio", icon: "🚀", layout: PageLayout::Wide },
            Page::Projects => PageMeta { title: "Projects | My Portfolio", icon: "💼", layout: PageLayout::Wide },
            Page::Research => PageMeta { title: "Researches | My Portfolio", icon: "📚", layout: PageLayout::Wide },
        }
    }

    /// The page's style block. Constant per page; nothing is retained between calls.
    pub fn style(self) -> &'static str {
        match self {
            Page::Home => HOME_CSS,
            Page::Projects => BASE_CSS,
            Page::Research => RESEARCH_CSS,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "main" => Ok(Page::Home),
            "projects" => Ok(Page::Projects),
            "research" | "researches" => Ok(Page::Research),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}

// ── Interactions & output ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A sidebar navigation button was activated.
    NavClicked(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    SwitchTo(Page),
}

impl NavRequest {
    pub fn target(self) -> Page {
        match self {
            NavRequest::SwitchTo(page) => page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub meta: PageMeta,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutput {
    Document(Document),
    Navigate(NavRequest),
}

/// Clicking the page you are on is a no-op, anything else asks for a switch.
pub fn navigate(current: Page, interaction: Option<Interaction>) -> Option<NavRequest> {
    match interaction {
        Some(Interaction::NavClicked(target)) if target != current => Some(NavRequest::SwitchTo(target)),
        _ => None,
    }
}

// ── Site ─────────────────────────────────────────────────────────────────────

/// Everything a render pass reads: configuration, content, assets and the
/// document shell. Immutable once built.
pub struct Site {
    config: SiteConfig,
    catalog: Catalog,
    assets: Box<dyn AssetStore>,
    layout: Layout,
}

impl Site {
    pub fn new(config: SiteConfig, catalog: Catalog, assets: Box<dyn AssetStore>) -> Result<Self> {
        Ok(Self { config, catalog, assets, layout: Layout::new()? })
    }

    /// Build a site from configuration: the content file if one is set,
    /// otherwise the built-in catalog, with assets served from `assets.dir`.
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let catalog = match &config.content.path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let assets = Box::new(FsAssets::new(config.assets.dir.clone()));
        Self::new(config, catalog, assets)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn media(&self) -> MediaResolver<'_> {
        MediaResolver::new(self.assets.as_ref(), self.config.media.unembeddable)
    }

    /// Render `page`, or hand back a navigation request if the interaction
    /// asks to leave it.
    pub fn render(&self, page: Page, interaction: Option<Interaction>) -> Result<PageOutput> {
        let style = page.style();

        if let Some(request) = navigate(page, interaction) {
            debug!(from = %page, to = %request.target(), "navigation requested");
            return Ok(PageOutput::Navigate(request));
        }

        let body = match page {
            Page::Home => self.home_body(),
            Page::Projects => self.projects_body(),
            Page::Research => self.research_body(),
        };
        let html = self.layout.render(page, style, &body)?;
        Ok(PageOutput::Document(Document { meta: page.meta(), html }))
    }

    fn home_body(&self) -> String {
        let profile = &self.catalog.profile;
        let mut out = String::new();

        out.push_str(r#"<div class="intro-section"><div class="image-container">"#);
        let photo = self.config.profile_photo();
        match self.media().load_image(photo) {
            Ok(image) => {
                let _ = write!(
                    out,
                    r#"<img src="{}" width="{}" alt="{}">"#,
                    escape(&image.url),
                    self.config.assets.profile_photo_width,
                    escape(&profile.name)
                );
            }
            Err(e) => image_load_failed(&mut out, &e),
        }
        out.push_str(r#"</div><div class="text-container"><div class="profile-header">"#);
        let _ = write!(out, r#"<h1 class="profile-name">{}</h1>"#, escape(&profile.name));
        let _ = write!(out, r#"<div class="profile-title">{}</div>"#, escape(&profile.headline));
        out.push_str(r#"<div class="profile-intro">"#);
        for paragraph in &profile.intro {
            let _ = write!(out, "<p>{}</p>", escape(paragraph));
        }
        out.push_str("</div></div></div></div><hr>");

        out.push_str(r#"<div class="columns"><div class="column"><h3>Contact Information</h3>"#);
        if let Some(email) = &profile.email {
            let _ = write!(out, r#"<p>📧 <a href="mailto:{0}">{0}</a></p>"#, escape(email));
        }
        out.push_str(r#"</div><div class="column">"#);
        if !profile.links.is_empty() {
            out.push_str("<h3>Links</h3><ul>");
            for link in &profile.links {
                let _ = write!(
                    out,
                    r#"<li><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
                    escape(&link.url),
                    escape(&link.label)
                );
            }
            out.push_str("</ul>");
        }
        out.push_str("</div></div>");
        out
    }

    fn projects_body(&self) -> String {
        let media = self.media();
        let mut out = String::from("<h1>My Projects</h1>");
        for project in &self.catalog.projects {
            let formatted = format_project(project, &media);
            debug!(title = project.title(), media = ?formatted.media, "rendered project");
            out.push_str(&formatted.markup);
        }
        out
    }

    fn research_body(&self) -> String {
        let media = self.media();
        let mut out = String::from("<h1>Researches</h1>");
        for paper in &self.catalog.papers {
            let formatted = format_paper(paper, &media);
            debug!(title = paper.title(), media = ?formatted.media, "rendered paper");
            out.push_str(&formatted.markup);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;
    use crate::media::IMAGE_HINT;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    fn site(assets: MemoryAssets) -> Site {
        Site::new(SiteConfig::default(), Catalog::builtin().unwrap(), Box::new(assets)).unwrap()
    }

    fn document(output: PageOutput) -> Document {
        match output {
            PageOutput::Document(doc) => doc,
            PageOutput::Navigate(nav) => panic!("unexpected navigation: {nav:?}"),
        }
    }

    #[test]
    fn test_page_parsing() {
        assert_eq!("home".parse::<Page>().unwrap(), Page::Home);
        assert_eq!("Researches".parse::<Page>().unwrap(), Page::Research);
        assert_eq!("research".parse::<Page>().unwrap(), Page::Research);
        assert_eq!("about".parse::<Page>(), Err(UnknownPage("about".into())));
    }

    #[test]
    fn test_navigate() {
        assert_eq!(navigate(Page::Home, None), None);
        assert_eq!(navigate(Page::Home, Some(Interaction::NavClicked(Page::Home))), None);
        assert_eq!(
            navigate(Page::Home, Some(Interaction::NavClicked(Page::Research))),
            Some(NavRequest::SwitchTo(Page::Research))
        );
    }

    #[test]
    fn test_click_returns_nav_request() {
        let site = site(MemoryAssets::default());
        let out = site.render(Page::Projects, Some(Interaction::NavClicked(Page::Home))).unwrap();
        assert_eq!(out, PageOutput::Navigate(NavRequest::SwitchTo(Page::Home)));
    }

    #[test]
    fn test_home_with_photo() {
        let site = site(MemoryAssets::default().with("photo.jpg", JPEG));
        let doc = document(site.render(Page::Home, None).unwrap());
        assert_eq!(doc.meta.title, "My Portfolio");
        assert!(doc.html.contains(&format!(r#"<img src="{}" width="300""#, escape("/assets/photo.jpg"))));
        assert!(doc.html.contains("fadhel1597@gmail.com"));
        let github = doc.html.find(&escape("https://github.com/FadhelHaidar")).unwrap();
        let linkedin = doc.html.find(&escape("https://linkedin.com/in/fadhel-haidar")).unwrap();
        assert!(github < linkedin);
    }

    #[test]
    fn test_home_without_photo_degrades() {
        let site = site(MemoryAssets::default());
        let doc = document(site.render(Page::Home, None).unwrap());
        assert!(doc.html.contains("Could not load image"));
        assert!(doc.html.contains(IMAGE_HINT));
        // The rest of the page still renders.
        assert!(doc.html.contains("Contact Information"));
    }

    #[test]
    fn test_projects_in_catalog_order() {
        let site = site(MemoryAssets::default());
        let doc = document(site.render(Page::Projects, None).unwrap());
        let positions: Vec<usize> = site
            .catalog()
            .projects
            .iter()
            .map(|p| doc.html.find(&escape(p.title())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.html.contains(&escape("https://www.youtube.com/embed/sdrObaXCZVc")));
        assert!(doc.html.contains(&escape("https://www.youtube.com/embed/HYcV47oXoCE")));
    }

    #[test]
    fn test_research_page() {
        let site = site(MemoryAssets::default());
        let doc = document(site.render(Page::Research, None).unwrap());
        assert!(doc.html.contains("<h1>Researches</h1>"));
        assert!(doc.html.contains("View Full Paper"));
        assert!(doc.html.contains(".citation-box"));
        assert!(doc.html.contains("🔍 DOI"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let site = site(MemoryAssets::default().with("photo.jpg", JPEG));
        for page in Page::ALL {
            let a = site.render(page, None).unwrap();
            let b = site.render(page, None).unwrap();
            assert_eq!(a, b, "{page} differs between renders");
        }
    }
}
