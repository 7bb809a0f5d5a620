//! Media fallback chain.
//!
//! Each record shows at most one media source. Priority for projects:
//! local video → remote video (native player, provider embed, plain link) →
//! static image → placeholder. Papers go PDF → figure image → placeholder.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use folio_common::{PaperRecord, ProjectRecord, UnembeddablePolicy};
use thiserror::Error;
use tracing::{debug, warn};

use crate::assets::AssetStore;
use crate::markup::{escape, notice, NoticeLevel};
use crate::pdf::display_pdf;
use crate::video::{extract_video_id, is_direct_video, Provider, VideoMatch};

pub const PROJECT_PLACEHOLDER: &str = "Add project image or video to showcase your work";
pub const PAPER_PLACEHOLDER: &str = "Add a PDF or a figure to showcase this paper";
pub const IMAGE_HINT: &str = "Please ensure the image path is correct.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    LocalVideo,
    NativeVideo,
    EmbeddedVideo(Provider),
    VideoLink,
    Image,
    LocalPdf,
    RemotePdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaOutcome {
    Shown(MediaKind),
    NotShown,
}

impl MediaOutcome {
    pub fn is_shown(self) -> bool {
        matches!(self, MediaOutcome::Shown(_))
    }
}

// ── Image load guard ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Svg,
}

impl ImageFormat {
    /// Identify an image by its leading bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else {
            let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
            let head = head.trim_start();
            (head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")))
                .then_some(ImageFormat::Svg)
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: std::io::Error },

    #[error("{}: not a recognized image format", .0.display())]
    UnknownFormat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub url: String,
    pub format: ImageFormat,
}

// ── Resolver ─────────────────────────────────────────────────────────────────

pub struct MediaResolver<'a> {
    assets: &'a dyn AssetStore,
    policy: UnembeddablePolicy,
}

impl<'a> MediaResolver<'a> {
    pub fn new(assets: &'a dyn AssetStore, policy: UnembeddablePolicy) -> Self {
        Self { assets, policy }
    }

    pub fn assets(&self) -> &'a dyn AssetStore {
        self.assets
    }

    /// Read a local image and check that it is one.
    pub fn load_image(&self, path: &Path) -> Result<LoadedImage, ImageError> {
        let bytes = self
            .assets
            .read(path)
            .map_err(|source| ImageError::Unreadable { path: path.to_path_buf(), source })?;
        let format = ImageFormat::sniff(&bytes)
            .ok_or_else(|| ImageError::UnknownFormat(path.to_path_buf()))?;
        Ok(LoadedImage { url: self.assets.public_url(path), format })
    }

    /// Video stage of the chain.
    pub fn display_video(
        &self,
        out: &mut String,
        video_url: Option<&str>,
        video_path: Option<&Path>,
    ) -> MediaOutcome {
        if let Some(path) = video_path.filter(|p| self.assets.exists(p)) {
            debug!(path = %path.display(), "showing local video");
            video_element(out, &self.assets.public_url(path));
            return MediaOutcome::Shown(MediaKind::LocalVideo);
        }

        let Some(url) = video_url else {
            return MediaOutcome::NotShown;
        };

        if is_direct_video(url) {
            debug!(url, "showing native video player");
            video_element(out, url);
            return MediaOutcome::Shown(MediaKind::NativeVideo);
        }

        match extract_video_id(url) {
            VideoMatch::Embed { provider, id } => {
                debug!(provider = provider.name(), id = %id, "embedding video");
                iframe_embed(out, &provider.embed_url(&id));
                MediaOutcome::Shown(MediaKind::EmbeddedVideo(provider))
            }
            VideoMatch::NoMatch => {
                debug!(url, "video url not embeddable, falling back to link");
                notice(
                    out,
                    NoticeLevel::Warning,
                    &format!("Unable to embed video. You can view it directly at: {url}"),
                );
                let _ = write!(
                    out,
                    r#"<p><a href="{}" target="_blank" rel="noopener">Open Video in New Tab</a></p>"#,
                    escape(url)
                );
                match self.policy {
                    UnembeddablePolicy::CountsAsShown => MediaOutcome::Shown(MediaKind::VideoLink),
                    UnembeddablePolicy::FallThrough => MediaOutcome::NotShown,
                }
            }
        }
    }

    /// Image stage of the chain. A file that exists but fails to load is
    /// reported inline and counts as not shown.
    pub fn display_image(&self, out: &mut String, path: Option<&Path>, caption: Option<&str>) -> MediaOutcome {
        let Some(path) = path.filter(|p| self.assets.exists(p)) else {
            return MediaOutcome::NotShown;
        };
        match self.load_image(path) {
            Ok(image) => {
                out.push_str(r#"<figure class="media-image">"#);
                let _ = write!(
                    out,
                    r#"<img src="{}" alt="{}">"#,
                    escape(&image.url),
                    escape(caption.unwrap_or("Project image"))
                );
                if let Some(caption) = caption {
                    let _ = write!(out, "<figcaption>{}</figcaption>", escape(caption));
                }
                out.push_str("</figure>");
                MediaOutcome::Shown(MediaKind::Image)
            }
            Err(e) => {
                image_load_failed(out, &e);
                MediaOutcome::NotShown
            }
        }
    }

    /// Full chain for a project: video, then image, then placeholder.
    pub fn project_media(&self, out: &mut String, project: &ProjectRecord) -> MediaOutcome {
        let outcome = self.display_video(out, project.video_url(), project.video_path());
        if outcome.is_shown() {
            return outcome;
        }
        let outcome = self.display_image(out, project.image_path(), None);
        if !outcome.is_shown() {
            notice(out, NoticeLevel::Info, PROJECT_PLACEHOLDER);
        }
        outcome
    }

    /// Full chain for a paper: PDF, then figure image, then placeholder.
    pub fn paper_media(&self, out: &mut String, paper: &PaperRecord) -> MediaOutcome {
        let outcome = display_pdf(out, self.assets, paper.pdf_path(), paper.pdf_url());
        if outcome.is_shown() {
            return outcome;
        }
        let outcome = self.display_image(out, paper.image_path(), Some("Figure from the paper"));
        if !outcome.is_shown() {
            notice(out, NoticeLevel::Info, PAPER_PLACEHOLDER);
        }
        outcome
    }
}

/// Inline warning plus hint for an image that could not be loaded.
pub fn image_load_failed(out: &mut String, err: &ImageError) {
    warn!(error = %err, "could not load image");
    notice(out, NoticeLevel::Error, &format!("Could not load image: {err}"));
    let _ = write!(out, r#"<p class="hint">{}</p>"#, IMAGE_HINT);
}

fn video_element(out: &mut String, src: &str) {
    let _ = write!(
        out,
        r#"<video class="media-video" src="{}" controls preload="metadata"></video>"#,
        escape(src)
    );
}

fn iframe_embed(out: &mut String, embed_url: &str) {
    let _ = write!(
        out,
        r#"<div class="video-embed"><iframe src="{}" frameborder="0" allowfullscreen></iframe></div>"#,
        escape(embed_url)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn resolver(assets: &MemoryAssets) -> MediaResolver<'_> {
        MediaResolver::new(assets, UnembeddablePolicy::CountsAsShown)
    }

    #[test]
    fn test_local_video_beats_url() {
        let assets = MemoryAssets::default().with("demo.mp4", b"video");
        let mut out = String::new();
        let outcome = resolver(&assets).display_video(
            &mut out,
            Some("https://youtu.be/F_w_tT8pDR4"),
            Some(Path::new("demo.mp4")),
        );
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::LocalVideo));
        assert!(out.contains(&format!(r#"src="{}""#, escape("/assets/demo.mp4"))));
        assert!(!out.contains("youtube"));
    }

    #[test]
    fn test_missing_local_video_falls_back_to_url() {
        let assets = MemoryAssets::default();
        let mut out = String::new();
        let outcome = resolver(&assets).display_video(
            &mut out,
            Some("https://youtu.be/F_w_tT8pDR4"),
            Some(Path::new("missing.mp4")),
        );
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::EmbeddedVideo(Provider::YouTube)));
        assert!(out.contains(&escape("https://www.youtube.com/embed/F_w_tT8pDR4")));
    }

    #[test]
    fn test_direct_video_url_uses_native_player() {
        let assets = MemoryAssets::default();
        let mut out = String::new();
        let outcome = resolver(&assets).display_video(&mut out, Some("https://cdn.example.com/a.webm"), None);
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::NativeVideo));
        assert!(out.starts_with("<video"));
    }

    #[test]
    fn test_unembeddable_policy() {
        let assets = MemoryAssets::default().with("shot.png", PNG);
        let project = ProjectRecord::builder("P")
            .video_url("https://example.com/watch/1")
            .image_path("shot.png")
            .build()
            .unwrap();

        let mut out = String::new();
        let outcome = resolver(&assets).project_media(&mut out, &project);
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::VideoLink));
        assert!(out.contains("Open Video in New Tab"));
        assert!(!out.contains("<img"));

        let mut out = String::new();
        let fall_through = MediaResolver::new(&assets, UnembeddablePolicy::FallThrough);
        let outcome = fall_through.project_media(&mut out, &project);
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::Image));
        assert!(out.contains("Open Video in New Tab"));
        assert!(out.contains(&format!(r#"<img src="{}""#, escape("/assets/shot.png"))));
    }

    #[test]
    fn test_project_without_media_gets_placeholder() {
        let assets = MemoryAssets::default();
        let project = ProjectRecord::builder("P").build().unwrap();
        let mut out = String::new();
        let outcome = resolver(&assets).project_media(&mut out, &project);
        assert_eq!(outcome, MediaOutcome::NotShown);
        assert!(out.contains(PROJECT_PLACEHOLDER));
    }

    #[test]
    fn test_broken_image_is_guarded() {
        let assets = MemoryAssets::default().with("broken.png", b"not an image");
        let project = ProjectRecord::builder("P").image_path("broken.png").build().unwrap();
        let mut out = String::new();
        let outcome = resolver(&assets).project_media(&mut out, &project);
        assert_eq!(outcome, MediaOutcome::NotShown);
        assert!(out.contains("Could not load image"));
        assert!(out.contains(IMAGE_HINT));
        assert!(out.contains(PROJECT_PLACEHOLDER));
    }

    #[test]
    fn test_paper_figure_fallback() {
        let assets = MemoryAssets::default().with("fig.png", PNG);
        let paper = PaperRecord::builder("Paper", 2024)
            .authors(["A"])
            .image_path("fig.png")
            .build()
            .unwrap();
        let mut out = String::new();
        let outcome = resolver(&assets).paper_media(&mut out, &paper);
        assert_eq!(outcome, MediaOutcome::Shown(MediaKind::Image));
        assert!(out.contains("Figure from the paper"));
    }

    #[test]
    fn test_paper_without_media_gets_placeholder() {
        let assets = MemoryAssets::default();
        let paper = PaperRecord::builder("Paper", 2024).authors(["A"]).build().unwrap();
        let mut out = String::new();
        assert_eq!(resolver(&assets).paper_media(&mut out, &paper), MediaOutcome::NotShown);
        assert!(out.contains(PAPER_PLACEHOLDER));
    }

    #[test]
    fn test_sniff() {
        assert_eq!(ImageFormat::sniff(PNG), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::sniff(b"  <svg xmlns='x'/>"), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::sniff(b"%PDF-1.7"), None);
    }
}
