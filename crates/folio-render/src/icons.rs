//! Decorative icons for outbound links.
//!
//! Each table is an ordered list of keyword rules checked against the
//! lowercased label or url. The first rule with a hit wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Link,
    Globe,
    Document,
    Chart,
    Lookup,
    Code,
    Film,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Link => "🔗",
            Icon::Globe => "🌐",
            Icon::Document => "📄",
            Icon::Chart => "📊",
            Icon::Lookup => "🔍",
            Icon::Code => "💻",
            Icon::Film => "🎬",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOn {
    Label,
    Url,
}

#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    on: MatchOn,
    word: &'static str,
}

const fn label(word: &'static str) -> Keyword {
    Keyword { on: MatchOn::Label, word }
}

const fn url(word: &'static str) -> Keyword {
    Keyword { on: MatchOn::Url, word }
}

#[derive(Debug, Clone, Copy)]
pub struct IconRule {
    keywords: &'static [Keyword],
    icon: Icon,
}

#[derive(Debug, Clone, Copy)]
pub struct IconTable {
    rules: &'static [IconRule],
    default: Icon,
}

pub const PROJECT_ICONS: IconTable = IconTable {
    rules: &[
        IconRule { keywords: &[url("github")], icon: Icon::Link },
        IconRule { keywords: &[label("demo"), label("live")], icon: Icon::Globe },
        IconRule { keywords: &[label("case"), label("study"), label("doc")], icon: Icon::Document },
        IconRule { keywords: &[label("result"), label("analysis")], icon: Icon::Chart },
    ],
    default: Icon::Link,
};

pub const PAPER_ICONS: IconTable = IconTable {
    rules: &[
        IconRule { keywords: &[label("doi")], icon: Icon::Lookup },
        IconRule { keywords: &[label("code"), url("github")], icon: Icon::Code },
        IconRule { keywords: &[label("dataset")], icon: Icon::Chart },
        IconRule { keywords: &[label("video"), label("presentation")], icon: Icon::Film },
    ],
    default: Icon::Link,
};

impl IconTable {
    pub fn select(&self, link_label: &str, link_url: &str) -> Icon {
        let link_label = link_label.to_lowercase();
        let link_url = link_url.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                rule.keywords.iter().any(|k| match k.on {
                    MatchOn::Label => link_label.contains(k.word),
                    MatchOn::Url => link_url.contains(k.word),
                })
            })
            .map_or(self.default, |rule| rule.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_icons() {
        assert_eq!(PROJECT_ICONS.select("Source", "https://GitHub.com/me/repo"), Icon::Link);
        assert_eq!(PROJECT_ICONS.select("Live Demo", "https://app.example.com"), Icon::Globe);
        assert_eq!(PROJECT_ICONS.select("Case Study", "https://blog.example.com"), Icon::Document);
        assert_eq!(PROJECT_ICONS.select("Results", "https://example.com"), Icon::Chart);
        assert_eq!(PROJECT_ICONS.select("Slides", "https://example.com"), Icon::Link);
    }

    #[test]
    fn test_paper_icons() {
        assert_eq!(PAPER_ICONS.select("DOI", "https://doi.org/10.1016/x"), Icon::Lookup);
        assert_eq!(PAPER_ICONS.select("Code", "https://gitlab.com/x"), Icon::Code);
        assert_eq!(PAPER_ICONS.select("Repository", "https://github.com/x"), Icon::Code);
        assert_eq!(PAPER_ICONS.select("Dataset", "https://zenodo.org/x"), Icon::Chart);
        assert_eq!(PAPER_ICONS.select("Conference Presentation", "https://x"), Icon::Film);
        assert_eq!(PAPER_ICONS.select("Preprint", "https://arxiv.org/x"), Icon::Link);
    }

    #[test]
    fn test_first_match_wins() {
        // "doi" and "code" both appear; the doi rule comes first.
        assert_eq!(PAPER_ICONS.select("Code DOI", "https://github.com/x"), Icon::Lookup);
        // A github url outranks a demo label in the project table.
        assert_eq!(PROJECT_ICONS.select("Live demo", "https://github.com/x"), Icon::Link);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(PROJECT_ICONS.select("LIVE", "https://x"), Icon::Globe);
        assert_eq!(PAPER_ICONS.select("dOi", "https://x"), Icon::Lookup);
    }
}
