//! BibTeX citation parser.
//!
//! Parses a single BibTeX entry into a [`Publication`] record. The parser is
//! deliberately lenient: it extracts what it can and reports structural
//! failure (no entry marker, no parsable header) as an empty result rather
//! than an error.
//!
//! # Example
//!
//! ```
//! use bibfolio::BibtexParser;
//!
//! let input = r#"@inproceedings{Roe2019,
//!     title={Widget Assembly at Scale},
//!     author={Roe, Richard},
//!     booktitle={Proc. Widget Conf.},
//!     year={2019}
//! }"#;
//!
//! let publications = BibtexParser::new().parse(input);
//! assert_eq!(publications[0].entry_type, "inproceedings");
//! ```
//!
//! # Known limitations
//!
//! Candidate fields are split on a comma-newline delimiter, so a field value
//! that itself contains that pattern is truncated at the split point (the
//! remainder of its first line is kept). This matches the behavior of the
//! content files the parser was built for and is not silently corrected.

mod fields;
mod parse;

use crate::Publication;
use parse::bibtex_parse;

/// Parser for BibTeX formatted citation entries.
///
/// Only the first entry in the input is parsed; concatenated entries beyond
/// it are ignored by design.
#[derive(Debug, Clone, Default)]
pub struct BibtexParser;

impl BibtexParser {
    /// Creates a new BibTeX parser instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the first BibTeX entry in `input`.
    ///
    /// Returns a vector with zero or one [`Publication`]: empty when the
    /// input has no `@` marker or no `@type{key,` header. Missing fields are
    /// simply absent from the record; callers supply their own defaults.
    pub fn parse(&self, input: &str) -> Vec<Publication> {
        bibtex_parse(input)
    }
}
