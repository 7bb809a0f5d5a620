//! Document shell (head, sidebar navigation, main column) rendered with minijinja.

use folio_common::{FolioError, Result};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::pages::Page;

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");

/// Shared stylesheet plus per-page additions.
pub const BASE_CSS: &str = include_str!("../templates/base.css");
pub const HOME_CSS: &str = concat!(include_str!("../templates/base.css"), include_str!("../templates/home.css"));
pub const RESEARCH_CSS: &str =
    concat!(include_str!("../templates/base.css"), include_str!("../templates/research.css"));

#[derive(Serialize)]
struct NavItem {
    key: &'static str,
    label: &'static str,
    active: bool,
}

pub struct Layout {
    env: Environment<'static>,
}

impl Layout {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)
            .map_err(|e| FolioError::Template(e.to_string()))?;
        Ok(Self { env })
    }

    /// Wrap `body` in the full document for `page`.
    pub fn render(&self, page: Page, style: &str, body: &str) -> Result<String> {
        let meta = page.meta();
        let nav: Vec<NavItem> = Page::ALL
            .iter()
            .map(|p| NavItem { key: p.key(), label: p.label(), active: *p == page })
            .collect();

        self.env
            .get_template("layout.html")
            .and_then(|tmpl| {
                tmpl.render(context! {
                    title => meta.title,
                    icon => meta.icon,
                    layout => meta.layout.as_str(),
                    style => style,
                    current_path => page.path(),
                    nav => nav,
                    body => body,
                })
            })
            .map_err(|e| FolioError::Template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell() {
        let layout = Layout::new().unwrap();
        let html = layout.render(Page::Projects, "p{}", "<h1>Body & more</h1>").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Projects | My Portfolio</title>"));
        assert!(html.contains("<h1>Body & more</h1>"));
        assert!(html.contains(r#"action="/projects""#));
        assert!(html.contains(r#"value="projects" class="sidebar-nav-item active""#));
        assert!(html.contains(r#"value="home" class="sidebar-nav-item""#));
        assert!(html.contains("layout-wide"));
    }
}
