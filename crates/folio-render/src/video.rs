//! Video URL recognition.
//!
//! YouTube URLs are matched against an ordered table of literal anchors, first
//! match wins. Vimeo URLs use the trailing path segment as the id.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Vimeo,
}

impl Provider {
    pub fn embed_url(self, id: &str) -> String {
        match self {
            Provider::YouTube => format!("https://www.youtube.com/embed/{id}"),
            Provider::Vimeo => format!("https://player.vimeo.com/video/{id}"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Provider::YouTube => "YouTube",
            Provider::Vimeo => "Vimeo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoMatch {
    Embed { provider: Provider, id: String },
    NoMatch,
}

impl VideoMatch {
    pub fn embed_url(&self) -> Option<String> {
        match self {
            VideoMatch::Embed { provider, id } => Some(provider.embed_url(id)),
            VideoMatch::NoMatch => None,
        }
    }
}

struct AnchorRule {
    anchor: &'static str,
    provider: Provider,
}

const ANCHOR_RULES: &[AnchorRule] = &[
    AnchorRule { anchor: "youtube.com/shorts/", provider: Provider::YouTube },
    AnchorRule { anchor: "youtube.com/watch?v=", provider: Provider::YouTube },
    AnchorRule { anchor: "youtube.com/embed/", provider: Provider::YouTube },
    AnchorRule { anchor: "youtu.be/", provider: Provider::YouTube },
];

/// Characters that end an id taken after an anchor.
const ID_DELIMITERS: &[char] = &['?', '&', '/', '#'];

const DIRECT_VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogg", ".ogv", ".mov"];

/// Extract the provider-native video id from `url`.
pub fn extract_video_id(url: &str) -> VideoMatch {
    for rule in ANCHOR_RULES {
        if let Some(pos) = url.find(rule.anchor) {
            let rest = &url[pos + rule.anchor.len()..];
            let id = rest.split(ID_DELIMITERS).next().unwrap_or_default();
            return embed(rule.provider, id);
        }
    }

    if url.to_ascii_lowercase().contains("vimeo") {
        return embed(Provider::Vimeo, trailing_segment(url));
    }

    VideoMatch::NoMatch
}

fn embed(provider: Provider, id: &str) -> VideoMatch {
    if id.is_empty() {
        VideoMatch::NoMatch
    } else {
        VideoMatch::Embed { provider, id: id.to_string() }
    }
}

/// Last non-empty path segment, ignoring scheme, host, query and fragment.
fn trailing_segment(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = without_scheme.split_once('/').map_or("", |(_, path)| path);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default()
}

/// Whether `url` points straight at a video file the browser can play.
pub fn is_direct_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default().to_ascii_lowercase();
    DIRECT_VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn youtube(id: &str) -> VideoMatch {
        VideoMatch::Embed { provider: Provider::YouTube, id: id.to_string() }
    }

    #[test]
    fn test_youtube_shapes() {
        assert_eq!(extract_video_id("https://youtu.be/F_w_tT8pDR4"), youtube("F_w_tT8pDR4"));
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=qANcUrKSWHU&t=5"),
            youtube("qANcUrKSWHU")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/sdrObaXCZVc?autoplay=1"),
            youtube("sdrObaXCZVc")
        );
        assert_eq!(
            extract_video_id("https://youtube.com/shorts/abc123XYZ_-/extra"),
            youtube("abc123XYZ_-")
        );
        assert_eq!(extract_video_id("https://youtu.be/HYcV47oXoCE?si=x"), youtube("HYcV47oXoCE"));
    }

    #[test]
    fn test_first_anchor_wins() {
        // An embed URL that also mentions a short link later on.
        let url = "https://www.youtube.com/embed/first?next=https://youtu.be/second";
        assert_eq!(extract_video_id(url), youtube("first"));
    }

    #[test]
    fn test_empty_id_is_no_match() {
        assert_eq!(extract_video_id("https://youtu.be/"), VideoMatch::NoMatch);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=&t=3"), VideoMatch::NoMatch);
    }

    #[test]
    fn test_vimeo_trailing_segment() {
        assert_eq!(
            extract_video_id("https://vimeo.com/76979871"),
            VideoMatch::Embed { provider: Provider::Vimeo, id: "76979871".into() }
        );
        assert_eq!(
            extract_video_id("https://Vimeo.com/channels/staff/76979871/?share=copy"),
            VideoMatch::Embed { provider: Provider::Vimeo, id: "76979871".into() }
        );
        assert_eq!(extract_video_id("https://vimeo.com"), VideoMatch::NoMatch);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(extract_video_id("https://example.com/clip"), VideoMatch::NoMatch);
        assert_eq!(extract_video_id("https://www.youtube.com/@channel"), VideoMatch::NoMatch);
        assert_eq!(VideoMatch::NoMatch.embed_url(), None);
    }

    #[test]
    fn test_embed_urls() {
        assert_eq!(youtube("abc").embed_url().unwrap(), "https://www.youtube.com/embed/abc");
        assert_eq!(Provider::Vimeo.embed_url("42"), "https://player.vimeo.com/video/42");
    }

    #[test]
    fn test_direct_video() {
        assert!(is_direct_video("https://cdn.example.com/demo.MP4?sig=1"));
        assert!(is_direct_video("clip.webm"));
        assert!(!is_direct_video("https://youtu.be/F_w_tT8pDR4"));
    }
}
