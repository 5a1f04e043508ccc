//! Summary outline parser.
//!
//! Parses the lightweight markdown-like summary documents that accompany
//! publications: a `#` title line, `##` section headers, `- ` list items,
//! and `[label](url)` resource links inside a "Resources" section.
//!
//! # Example
//!
//! ```
//! use bibfolio::SummaryParser;
//!
//! let input = r#"# On Widgets
//!
//! ### Overview
//! A short study of widgets.
//!
//! ### Resources
//! - [Slides](http://x.com/slides)
//! "#;
//!
//! let outline = SummaryParser::new().parse(input);
//! assert_eq!(outline.title, "On Widgets");
//! assert_eq!(outline.resources[0].title, "Slides");
//! ```

mod parse;

use crate::Outline;
use parse::summary_parse;

/// Parser for markdown-style summary outlines.
#[derive(Debug, Clone, Default)]
pub struct SummaryParser;

impl SummaryParser {
    /// Creates a new summary parser instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a summary document into an [`Outline`].
    ///
    /// Never fails: empty input yields a default outline, and lines that
    /// cannot be attributed to a section are dropped.
    pub fn parse(&self, input: &str) -> Outline {
        summary_parse(input)
    }
}
