//! Portfolio records: projects and research papers.
//!
//! Records are immutable once built. Both the builders and the serde path go
//! through the same validation, so a `ProjectRecord` or `PaperRecord` that
//! exists is always well-formed. Every list keeps the order it was given in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validation failures raised while constructing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record title must not be blank")]
    BlankTitle,

    #[error("{record}: blank entry in `{field}`")]
    BlankEntry { record: String, field: &'static str },

    #[error("{record}: link #{index} needs both a label and a url")]
    IncompleteLink { record: String, index: usize },

    #[error("{record}: year {year} is out of range")]
    YearOutOfRange { record: String, year: i32 },

    #[error("{record}: a paper needs at least one author")]
    NoAuthors { record: String },
}

// ── Links & metrics ──────────────────────────────────────────────────────────

/// An outbound link. The url is opaque and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), url: url.into() }
    }
}

/// Metric value as written in the content source (`42`, `3.8`, `"Q1"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" of whole floats.
            MetricValue::Float(v) => write!(f, "{v:?}"),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self { MetricValue::Int(v) }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self { MetricValue::Float(v) }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self { MetricValue::Text(v.to_string()) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
}

// ── Validation helpers ───────────────────────────────────────────────────────

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn check_title(title: &str) -> Result<(), RecordError> {
    if is_blank(title) { Err(RecordError::BlankTitle) } else { Ok(()) }
}

fn check_entries(record: &str, field: &'static str, items: &[String]) -> Result<(), RecordError> {
    if items.iter().any(|s| is_blank(s)) {
        return Err(RecordError::BlankEntry { record: record.to_string(), field });
    }
    Ok(())
}

fn check_links(record: &str, links: &[Link]) -> Result<(), RecordError> {
    match links.iter().position(|l| is_blank(&l.label) || is_blank(&l.url)) {
        Some(index) => Err(RecordError::IncompleteLink { record: record.to_string(), index }),
        None => Ok(()),
    }
}

/// An empty optional string means "not set".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !is_blank(s))
}

fn non_blank_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|p| !p.as_os_str().is_empty())
}

// ── ProjectRecord ────────────────────────────────────────────────────────────

/// Raw project fields, as they come from a content file or a builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFields {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub video_url: Option<String>,
    pub video_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One entry of the projects gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectFields")]
pub struct ProjectRecord {
    title: String,
    tags: Vec<String>,
    description: String,
    key_features: Vec<String>,
    technologies: Vec<String>,
    video_url: Option<String>,
    video_path: Option<PathBuf>,
    image_path: Option<PathBuf>,
    links: Vec<Link>,
}

impl TryFrom<ProjectFields> for ProjectRecord {
    type Error = RecordError;

    fn try_from(f: ProjectFields) -> Result<Self, Self::Error> {
        check_title(&f.title)?;
        check_entries(&f.title, "tags", &f.tags)?;
        check_entries(&f.title, "key_features", &f.key_features)?;
        check_entries(&f.title, "technologies", &f.technologies)?;
        check_links(&f.title, &f.links)?;

        Ok(Self {
            title: f.title.trim().to_string(),
            tags: f.tags,
            description: f.description.trim().to_string(),
            key_features: f.key_features,
            technologies: f.technologies,
            video_url: non_blank(f.video_url),
            video_path: non_blank_path(f.video_path),
            image_path: non_blank_path(f.image_path),
            links: f.links,
        })
    }
}

impl ProjectRecord {
    pub fn builder(title: impl Into<String>) -> ProjectBuilder {
        ProjectBuilder {
            fields: ProjectFields { title: title.into(), ..Default::default() },
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn description(&self) -> &str { &self.description }
    pub fn key_features(&self) -> &[String] { &self.key_features }
    pub fn technologies(&self) -> &[String] { &self.technologies }
    pub fn video_url(&self) -> Option<&str> { self.video_url.as_deref() }
    pub fn video_path(&self) -> Option<&Path> { self.video_path.as_deref() }
    pub fn image_path(&self) -> Option<&Path> { self.image_path.as_deref() }
    pub fn links(&self) -> &[Link] { &self.links }
}

#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    fields: ProjectFields,
}

impl ProjectBuilder {
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = description.into();
        self
    }

    pub fn key_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.key_features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.fields.video_url = Some(url.into());
        self
    }

    pub fn video_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fields.video_path = Some(path.into());
        self
    }

    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fields.image_path = Some(path.into());
        self
    }

    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.fields.links.push(Link::new(label, url));
        self
    }

    pub fn build(self) -> Result<ProjectRecord, RecordError> {
        ProjectRecord::try_from(self.fields)
    }
}

// ── PaperRecord ──────────────────────────────────────────────────────────────

/// Raw paper fields, as they come from a content file or a builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperFields {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub publication: String,
    pub year: i32,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub methodologies: Vec<String>,
    pub pdf_url: Option<String>,
    pub pdf_path: Option<PathBuf>,
    pub image_path: Option<PathBuf>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub citation: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One entry of the research listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaperFields")]
pub struct PaperRecord {
    title: String,
    authors: Vec<String>,
    publication: String,
    year: i32,
    #[serde(rename = "abstract")]
    abstract_text: String,
    tags: Vec<String>,
    highlights: Vec<String>,
    methodologies: Vec<String>,
    pdf_url: Option<String>,
    pdf_path: Option<PathBuf>,
    image_path: Option<PathBuf>,
    metrics: Vec<Metric>,
    citation: Option<String>,
    links: Vec<Link>,
}

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

impl TryFrom<PaperFields> for PaperRecord {
    type Error = RecordError;

    fn try_from(f: PaperFields) -> Result<Self, Self::Error> {
        check_title(&f.title)?;
        if f.authors.is_empty() {
            return Err(RecordError::NoAuthors { record: f.title });
        }
        check_entries(&f.title, "authors", &f.authors)?;
        check_entries(&f.title, "tags", &f.tags)?;
        check_entries(&f.title, "highlights", &f.highlights)?;
        check_entries(&f.title, "methodologies", &f.methodologies)?;
        if f.metrics.iter().any(|m| is_blank(&m.label)) {
            return Err(RecordError::BlankEntry { record: f.title, field: "metrics" });
        }
        check_links(&f.title, &f.links)?;
        if !YEAR_RANGE.contains(&f.year) {
            return Err(RecordError::YearOutOfRange { record: f.title, year: f.year });
        }

        Ok(Self {
            title: f.title.trim().to_string(),
            authors: f.authors,
            publication: f.publication.trim().to_string(),
            year: f.year,
            abstract_text: f.abstract_text.trim().to_string(),
            tags: f.tags,
            highlights: f.highlights,
            methodologies: f.methodologies,
            pdf_url: non_blank(f.pdf_url),
            pdf_path: non_blank_path(f.pdf_path),
            image_path: non_blank_path(f.image_path),
            metrics: f.metrics,
            citation: non_blank(f.citation),
            links: f.links,
        })
    }
}

impl PaperRecord {
    pub fn builder(title: impl Into<String>, year: i32) -> PaperBuilder {
        PaperBuilder {
            fields: PaperFields { title: title.into(), year, ..Default::default() },
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn authors(&self) -> &[String] { &self.authors }
    pub fn publication(&self) -> &str { &self.publication }
    pub fn year(&self) -> i32 { self.year }
    pub fn abstract_text(&self) -> &str { &self.abstract_text }
    pub fn tags(&self) -> &[String] { &self.tags }
    pub fn highlights(&self) -> &[String] { &self.highlights }
    pub fn methodologies(&self) -> &[String] { &self.methodologies }
    pub fn pdf_url(&self) -> Option<&str> { self.pdf_url.as_deref() }
    pub fn pdf_path(&self) -> Option<&Path> { self.pdf_path.as_deref() }
    pub fn image_path(&self) -> Option<&Path> { self.image_path.as_deref() }
    pub fn metrics(&self) -> &[Metric] { &self.metrics }
    pub fn citation(&self) -> Option<&str> { self.citation.as_deref() }
    pub fn links(&self) -> &[Link] { &self.links }
}

#[derive(Debug, Clone)]
pub struct PaperBuilder {
    fields: PaperFields,
}

impl PaperBuilder {
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn publication(mut self, publication: impl Into<String>) -> Self {
        self.fields.publication = publication.into();
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.fields.abstract_text = text.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }

    pub fn methodologies<I, S>(mut self, methodologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.methodologies = methodologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.fields.pdf_url = Some(url.into());
        self
    }

    pub fn pdf_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fields.pdf_path = Some(path.into());
        self
    }

    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fields.image_path = Some(path.into());
        self
    }

    pub fn metric(mut self, label: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.fields.metrics.push(Metric { label: label.into(), value: value.into() });
        self
    }

    pub fn citation(mut self, citation: impl Into<String>) -> Self {
        self.fields.citation = Some(citation.into());
        self
    }

    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.fields.links.push(Link::new(label, url));
        self
    }

    pub fn build(self) -> Result<PaperRecord, RecordError> {
        PaperRecord::try_from(self.fields)
    }
}
