//! PDF embedding for papers.

use std::fmt::Write;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};

use crate::assets::AssetStore;
use crate::markup::{escape, notice, NoticeLevel};
use crate::media::{MediaKind, MediaOutcome};

const PDF_FRAME_HEIGHT: u32 = 500;

/// Show a paper's PDF: a local file is inlined as a base64 data URI with a
/// download button; a remote URL gets a "View Full Paper" link and an iframe.
/// A local file that cannot be read is reported and the URL is tried next.
pub fn display_pdf(
    out: &mut String,
    assets: &dyn AssetStore,
    pdf_path: Option<&Path>,
    pdf_url: Option<&str>,
) -> MediaOutcome {
    if let Some(path) = pdf_path.filter(|p| assets.exists(p)) {
        match assets.read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), size = bytes.len(), "embedding local pdf");
                let data_uri = format!("data:application/pdf;base64,{}", STANDARD.encode(&bytes));
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "paper.pdf".to_string());
                let _ = write!(
                    out,
                    r#"<a class="btn" href="{uri}" download="{name}">Download PDF</a><iframe class="pdf-frame" src="{uri}" width="100%" height="{h}"></iframe>"#,
                    uri = data_uri,
                    name = escape(&file_name),
                    h = PDF_FRAME_HEIGHT,
                );
                return MediaOutcome::Shown(MediaKind::LocalPdf);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read pdf");
                notice(out, NoticeLevel::Warning, &format!("Could not read PDF {}: {e}", path.display()));
            }
        }
    }

    if let Some(url) = pdf_url {
        let url = escape(url);
        let _ = write!(
            out,
            r#"<p><a href="{url}" target="_blank" rel="noopener">View Full Paper</a></p><iframe class="pdf-frame" src="{url}" width="100%" height="{h}"></iframe>"#,
            h = PDF_FRAME_HEIGHT,
        );
        return MediaOutcome::Shown(MediaKind::RemotePdf);
    }

    MediaOutcome::NotShown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;

    #[test]
    fn test_local_pdf_inlined() {
        let assets = MemoryAssets::default().with("papers/vgg.pdf", b"%PDF-1.7");
        let mut out = String::new();
        let outcome = display_pdf(&mut out, &assets, Some(Path::new("papers/vgg.pdf")), Some("https://x/y.pdf"));
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::LocalPdf));
        assert!(out.contains("data:application/pdf;base64,JVBERi0xLjc="));
        assert!(out.contains(r#"download="vgg.pdf""#));
        assert!(!out.contains("View Full Paper"));
    }

    #[test]
    fn test_remote_pdf() {
        let assets = MemoryAssets::default();
        let mut out = String::new();
        let outcome = display_pdf(&mut out, &assets, Some(Path::new("missing.pdf")), Some("https://x/y.pdf?a=1&b=2"));
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::RemotePdf));
        assert!(out.contains(&format!(r#"href="{}""#, escape("https://x/y.pdf?a=1&b=2"))));
        assert!(out.contains("a=1&amp;b=2"));
        assert!(out.contains("View Full Paper"));
    }

    #[test]
    fn test_unreadable_local_pdf_falls_back_to_url() {
        let assets = MemoryAssets::default().locked("papers/vgg.pdf");
        let mut out = String::new();
        let outcome = display_pdf(&mut out, &assets, Some(Path::new("papers/vgg.pdf")), Some("https://x/y.pdf"));
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::RemotePdf));
        assert!(out.contains("Could not read PDF"));
        assert!(out.contains("View Full Paper"));
        assert!(!out.contains("data:application/pdf"));
        let warning = out.find("Could not read PDF").unwrap();
        assert!(warning < out.find("View Full Paper").unwrap());
    }

    #[test]
    fn test_unreadable_local_pdf_without_url() {
        let assets = MemoryAssets::default().locked("papers/vgg.pdf");
        let mut out = String::new();
        let outcome = display_pdf(&mut out, &assets, Some(Path::new("papers/vgg.pdf")), None);
        assert_eq!(outcome, MediaOutcome::NotShown);
        assert!(out.contains("Could not read PDF"));
        assert!(!out.contains("<iframe"));
    }

    #[test]
    fn test_no_pdf() {
        let assets = MemoryAssets::default();
        let mut out = String::new();
        assert_eq!(display_pdf(&mut out, &assets, None, None), MediaOutcome::NotShown);
        assert!(out.is_empty());
    }
}
