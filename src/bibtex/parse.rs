//! Low-level BibTeX scanning.
//!
//! This module handles the text-level work of citation parsing: comment
//! stripping, entry header matching, splitting the field body into candidate
//! field lines, and brace-matched value extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::bibtex::fields::apply_field;
use crate::utils::strip_comment_lines;
use crate::{Publication, PublicationType};

/// Matches `@<type>{<key>,` anywhere in the entry text.
static ENTRY_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)\s*\{([^,]*),").unwrap());

/// Field delimiter: a comma followed by a newline, with surrounding
/// whitespace. A field value containing this pattern will mis-split; the
/// multi-line fallback in [`split_field`] recovers a truncated value.
static FIELD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\n\s*").unwrap());

/// A line-leading `@`, marking the start of a following entry.
static NEXT_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*@").unwrap());

/// Parse the first BibTeX entry in `input` into a [`Publication`].
///
/// Returns an empty vector when no entry marker or no parsable header is
/// found. Only the first entry of a concatenated blob is parsed; anything
/// from a subsequent `@...` marker onward is ignored.
pub(crate) fn bibtex_parse(input: &str) -> Vec<Publication> {
    if input.is_empty() {
        return Vec::new();
    }

    let text = strip_comment_lines(input);

    if !text.contains('@') {
        debug!("no entry marker found in input");
        return Vec::new();
    }

    let Some(header) = ENTRY_HEADER.captures(&text) else {
        debug!("could not match entry type and citation key");
        return Vec::new();
    };

    let entry_type = header[1].to_lowercase();
    let citation_key = header[2].trim().to_string();
    debug!(%entry_type, %citation_key, "parsed entry header");

    let mut publication = Publication {
        entry_type,
        citation_key,
        raw: input.to_string(),
        ..Publication::default()
    };

    let body = &text[header.get(0).unwrap().end()..];
    // Single-entry contract: drop everything from a following entry marker.
    let body = match NEXT_ENTRY.find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    };

    for candidate in FIELD_SEPARATOR.split(body) {
        let line = candidate.trim();
        if line.is_empty() || line == "}" {
            continue;
        }
        let Some((name, value)) = split_field(line) else {
            continue;
        };
        apply_field(&mut publication, &name, &value);
    }

    publication.kind = match publication.fields.get("type") {
        Some(explicit) => PublicationType::from_field(explicit),
        None => PublicationType::from_entry_type(&publication.entry_type),
    };

    vec![publication]
}

/// Split a candidate field line into its lower-cased name and value.
///
/// The value is the text between the first `{` after `=` and its matching
/// close brace, tracked by depth so nested braces survive intact. When the
/// matching close brace is not on this line (a value that contained the field
/// delimiter), the remainder of the line is taken instead, with at most one
/// trailing `}` stripped.
pub(crate) fn split_field(line: &str) -> Option<(String, String)> {
    let equals = line.find('=')?;
    let name = line[..equals].trim().to_lowercase();

    let open = equals + line[equals..].find('{')?;
    let mut depth = 1usize;
    let mut close = None;
    for (offset, c) in line[open + 1..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + 1 + offset);
                    break;
                }
            }
            _ => {}
        }
    }

    let value = match close {
        Some(end) => line[open + 1..end].trim().to_string(),
        None => {
            let rest = line[open + 1..].trim();
            rest.strip_suffix('}').unwrap_or(rest).to_string()
        }
    };

    Some((name, value))
}
