//! A library for parsing publication data out of loosely structured text.
//!
//! `bibfolio` turns the two text formats of a publication listing — a BibTeX
//! citation entry and an adjacent markdown-style summary outline — into
//! structured records that a rendering layer can consume. Parsing is
//! best-effort by design: structurally broken input yields an empty result,
//! never an error, and missing fields are simply absent.
//!
//! # Parsing a citation
//!
//! ```rust
//! use bibfolio::{BibtexParser, PublicationType};
//!
//! let input = r#"@article{Doe2021,
//!     title={On Widgets},
//!     author={Doe, Jane and Roe, Richard},
//!     journal={Widget Journal},
//!     year={2021}
//! }"#;
//!
//! let parser = BibtexParser::new();
//! let publications = parser.parse(input);
//! assert_eq!(publications.len(), 1);
//! assert_eq!(publications[0].citation_key, "Doe2021");
//! assert_eq!(publications[0].field("title"), Some("On Widgets"));
//! assert_eq!(publications[0].kind, PublicationType::Journal);
//! ```
//!
//! # Parsing a summary outline
//!
//! ```rust
//! use bibfolio::SummaryParser;
//!
//! let input = "# On Widgets\n\n## Overview\nA short study of widgets.\n";
//! let outline = SummaryParser::new().parse(input);
//! assert_eq!(outline.title, "On Widgets");
//! assert_eq!(outline.sections["overview"], vec!["A short study of widgets."]);
//! ```
//!
//! # Formatting citations
//!
//! ```rust
//! use bibfolio::citation;
//!
//! let authors = citation::format_authors_for_citation("Doe, Jane and Roe, Richard");
//! assert_eq!(authors, "Doe, J. & Roe, R.");
//! ```
//!
//! # Thread safety
//!
//! Both parsers are stateless and operate on in-memory strings only; they can
//! be shared freely between threads. Diagnostic output goes through
//! [`tracing`] at debug level, so verbosity is controlled entirely by the
//! consumer's subscriber.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod bibtex;
pub mod citation;
pub mod manifest;
pub mod summary;
mod utils;

// Reexports
pub use bibtex::BibtexParser;
pub use manifest::{Manifest, ManifestEntry, ManifestError};
pub use summary::SummaryParser;

/// Derived classification of a publication.
///
/// Always set on a parsed [`Publication`]: taken from an explicit `type`
/// field when present, otherwise inferred from the BibTeX entry type, falling
/// back to [`PublicationType::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    Journal,
    Conference,
    Preprint,
    #[default]
    Other,
}

impl PublicationType {
    /// Infer the classification from a lower-cased BibTeX entry type.
    pub fn from_entry_type(entry_type: &str) -> Self {
        match entry_type {
            "article" => Self::Journal,
            "inproceedings" | "conference" => Self::Conference,
            "techreport" | "unpublished" => Self::Preprint,
            _ => Self::Other,
        }
    }

    /// Parse an explicit `type` field value, case-insensitively.
    pub fn from_field(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "journal" => Self::Journal,
            "conference" => Self::Conference,
            "preprint" => Self::Preprint,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Conference => "conference",
            Self::Preprint => "preprint",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled external link (slides, data, poster, video) attached to a
/// publication through its summary outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

/// A single parsed publication record.
///
/// `fields` holds every `name={value}` pair found in the source entry under
/// its lower-cased name, with no constraint on the set of names. `links`
/// collects URLs from the non-standard `links` field and from `url`. The
/// `overview`, `contributions` and `resources` members stay empty until
/// [`Publication::apply_summary`] merges a parsed [`Outline`] in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Lower-cased BibTeX entry keyword, e.g. "article".
    pub entry_type: String,
    /// The entry's unique identifying token.
    pub citation_key: String,
    /// Lower-cased field name to trimmed value.
    pub fields: HashMap<String, String>,
    /// Link-type label (e.g. "journal", "pdf", "code", "url") to URL.
    pub links: HashMap<String, String>,
    /// Derived classification.
    #[serde(rename = "type")]
    pub kind: PublicationType,
    /// The unmodified source text, retained for verbatim re-export.
    pub raw: String,
    /// Overview paragraph merged from a summary outline.
    pub overview: Option<String>,
    /// Key contributions merged from a summary outline.
    pub contributions: Vec<String>,
    /// Resource links merged from a summary outline.
    pub resources: Vec<Resource>,
}

impl Publication {
    /// Look up a field by its lower-cased name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The publication venue: journal, else booktitle, else publisher.
    pub fn venue(&self) -> Option<&str> {
        self.field("journal")
            .or_else(|| self.field("booktitle"))
            .or_else(|| self.field("publisher"))
    }

    /// Merge a parsed summary outline into this record.
    ///
    /// The "overview" section becomes a single space-joined paragraph, the
    /// "key contributions" section is taken as-is, and outline resources
    /// replace the record's resources when non-empty.
    pub fn apply_summary(&mut self, outline: &Outline) {
        if let Some(lines) = outline.sections.get("overview") {
            self.overview = Some(lines.join(" "));
        }
        if let Some(lines) = outline.sections.get("key contributions") {
            self.contributions = lines.clone();
        }
        if !outline.resources.is_empty() {
            self.resources = outline.resources.clone();
        }
    }
}

/// A parsed summary outline.
///
/// Section names are lower-cased; each section holds its list items and
/// plain lines in document order. Resource links appear only in `resources`,
/// never duplicated into `sections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// First top-level header text, or empty if the document has none.
    pub title: String,
    /// Lower-cased section header to collected lines.
    pub sections: HashMap<String, Vec<String>>,
    /// Labeled links collected from list items under a "Resources" section.
    pub resources: Vec<Resource>,
}
