//! Pure citation-formatting helpers.
//!
//! Stateless transformations over already-parsed author fields and
//! [`Publication`] records. BibTeX author fields separate authors with the
//! literal `" and "` and write individual names either as `"Last, First"` or
//! `"First Last"`; these helpers normalize both.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Publication;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Format an author field for display, as `"First Last, First Last"`.
///
/// `"Last, First"` names are flipped to `"First Last"`; names without a comma
/// pass through unchanged.
///
/// ```
/// use bibfolio::citation::format_authors;
///
/// assert_eq!(
///     format_authors("Doe, Jane and Roe, Richard"),
///     "Jane Doe, Richard Roe"
/// );
/// ```
pub fn format_authors(authors: &str) -> String {
    if authors.is_empty() {
        return String::new();
    }
    authors
        .split(" and ")
        .map(|author| {
            let parts: Vec<&str> = author.split(',').collect();
            if parts.len() > 1 {
                format!("{} {}", parts[1].trim(), parts[0].trim())
            } else {
                author.trim().to_string()
            }
        })
        .join(", ")
}

/// Format an author field for a citation string.
///
/// A single author is rendered as `"Last, I. I."`, two authors are joined
/// with `" & "`, and three or more become the first author plus `"et al."`.
pub fn format_authors_for_citation(authors: &str) -> String {
    if authors.is_empty() {
        return String::new();
    }
    let list: Vec<&str> = authors.split(" and ").collect();
    match list.len() {
        1 => format_single_author(list[0]),
        2 => format!(
            "{} & {}",
            format_single_author(list[0]),
            format_single_author(list[1])
        ),
        _ => format!("{} et al.", format_single_author(list[0])),
    }
}

/// Format one author name as `"Last, I. I."`.
///
/// With a comma, the left side is the last name and the right side holds the
/// given names; without one, the final whitespace-separated token is taken as
/// the last name. Given names are reduced to dotted initials.
pub fn format_single_author(author: &str) -> String {
    if let Some((family, given)) = author.split_once(',') {
        return format!("{}, {}", family.trim(), initials_of(given));
    }
    let mut parts: Vec<&str> = author.split_whitespace().collect();
    let family = parts.pop().unwrap_or("");
    format!("{}, {}", family, initials_of(&parts.join(" ")))
}

/// Reduce space-separated given names to `"I. I."` initials.
fn initials_of(given: &str) -> String {
    given
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .map(|initial| format!("{initial}."))
        .join(" ")
}

/// Assemble an APA-style citation string for a parsed record.
///
/// Produces `"<authors> (<year>). <title>. <venue> Volume <v> (<n>) pp. <p>"`
/// with the venue taken from journal, booktitle or publisher in that order.
/// Absent parts are omitted and whitespace runs collapsed, so missing fields
/// never leave gaps.
pub fn generate_citation(publication: &Publication) -> String {
    let authors = format_authors_for_citation(publication.field("author").unwrap_or(""));
    let title = publication.field("title").unwrap_or("");
    let venue = publication.venue().unwrap_or("");
    let year = publication.field("year").unwrap_or("");
    let volume = publication
        .field("volume")
        .map(|v| format!("Volume {v}"))
        .unwrap_or_default();
    let number = publication
        .field("number")
        .map(|n| format!("({n})"))
        .unwrap_or_default();
    let pages = publication
        .field("pages")
        .map(|p| format!("pp. {p}"))
        .unwrap_or_default();

    let citation = format!("{authors} ({year}). {title}. {venue} {volume} {number} {pages}");
    WHITESPACE_RUN
        .replace_all(&citation, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn publication_with(fields: &[(&str, &str)]) -> Publication {
        let mut publication = Publication::default();
        for (name, value) in fields {
            publication
                .fields
                .insert(name.to_string(), value.to_string());
        }
        publication
    }

    #[test]
    fn test_format_authors_flips_comma_names() {
        assert_eq!(
            format_authors("Doe, Jane and Roe, Richard"),
            "Jane Doe, Richard Roe"
        );
    }

    #[test]
    fn test_format_authors_passes_plain_names_through() {
        assert_eq!(format_authors("Jane Doe and Richard Roe"), "Jane Doe, Richard Roe");
        assert_eq!(format_authors("Madonna"), "Madonna");
    }

    #[test]
    fn test_format_authors_empty_input() {
        assert_eq!(format_authors(""), "");
    }

    #[rstest]
    #[case("Doe, Jane", "Doe, J.")]
    #[case("Doe, Jane Mary", "Doe, J. M.")]
    #[case("Jane Doe", "Doe, J.")]
    #[case("Jane Mary Doe", "Doe, J. M.")]
    fn test_format_single_author(#[case] author: &str, #[case] expected: &str) {
        assert_eq!(format_single_author(author), expected);
    }

    #[test]
    fn test_format_authors_for_citation_one_author() {
        assert_eq!(format_authors_for_citation("Doe, Jane"), "Doe, J.");
    }

    #[test]
    fn test_format_authors_for_citation_two_authors() {
        assert_eq!(
            format_authors_for_citation("Doe, Jane and Roe, Richard"),
            "Doe, J. & Roe, R."
        );
    }

    #[test]
    fn test_format_authors_for_citation_three_authors_et_al() {
        assert_eq!(
            format_authors_for_citation("Doe, Jane and Roe, Richard and Poe, Edgar"),
            "Doe, J. et al."
        );
    }

    #[test]
    fn test_format_authors_for_citation_empty_input() {
        assert_eq!(format_authors_for_citation(""), "");
    }

    #[test]
    fn test_generate_citation_full_record() {
        let publication = publication_with(&[
            ("author", "Doe, Jane and Roe, Richard"),
            ("title", "On Widgets"),
            ("journal", "Widget Journal"),
            ("year", "2021"),
            ("volume", "12"),
            ("number", "3"),
            ("pages", "1--10"),
        ]);
        assert_eq!(
            generate_citation(&publication),
            "Doe, J. & Roe, R. (2021). On Widgets. Widget Journal Volume 12 (3) pp. 1--10"
        );
    }

    #[test]
    fn test_generate_citation_omits_absent_parts() {
        let publication = publication_with(&[
            ("author", "Doe, Jane"),
            ("title", "On Widgets"),
            ("year", "2021"),
        ]);
        assert_eq!(generate_citation(&publication), "Doe, J. (2021). On Widgets.");
    }

    #[test]
    fn test_generate_citation_venue_falls_back_to_booktitle() {
        let publication = publication_with(&[
            ("author", "Doe, Jane"),
            ("title", "On Widgets"),
            ("booktitle", "Proc. Widget Conf."),
            ("year", "2019"),
        ]);
        assert_eq!(
            generate_citation(&publication),
            "Doe, J. (2019). On Widgets. Proc. Widget Conf."
        );
    }

    #[test]
    fn test_generate_citation_empty_record() {
        let publication = Publication::default();
        assert_eq!(generate_citation(&publication), "(). .");
    }
}
