//! Line-oriented outline scanning.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::utils::strip_comment_lines;
use crate::{Outline, Resource};

/// A generic header: one or more `#`, whitespace, text.
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s+(.*)$").unwrap());

/// A section sub-header: exactly two `#`, whitespace, text.
static SUB_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.*)$").unwrap());

/// A list item: leading `-`, whitespace, text.
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.*)$").unwrap());

/// An inline markdown link, `[label](url)`.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Parse a markdown-style summary outline.
///
/// Total over any input: an empty or headerless document simply produces an
/// empty [`Outline`]. Lines that precede the first header are dropped.
pub(crate) fn summary_parse(input: &str) -> Outline {
    let text = strip_comment_lines(input);
    let mut outline = Outline::default();

    let mut current_section: Option<String> = None;
    let mut section_lines: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        // Sub-headers are checked before the generic header pattern, which
        // they also match; otherwise `## Overview` at the top of a document
        // would be taken as its title.
        if let Some(captures) = SUB_HEADER.captures(line) {
            commit_section(&mut outline, current_section.take(), &mut section_lines);
            current_section = Some(captures[1].to_string());
            debug!(section = %captures[1], "starting section");
            continue;
        }

        if outline.title.is_empty() {
            if let Some(captures) = HEADER.captures(line) {
                outline.title = captures[1].to_string();
                debug!(title = %outline.title, "found title");
                continue;
            }
        }

        if let Some(captures) = LIST_ITEM.captures(line) {
            let item = captures[1].to_string();
            let in_resources = current_section
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case("resources"));
            if in_resources {
                if let Some(link) = LINK.captures(&item) {
                    let resource = Resource {
                        title: link[1].to_string(),
                        url: link[2].to_string(),
                    };
                    debug!(title = %resource.title, url = %resource.url, "found resource");
                    outline.resources.push(resource);
                    continue;
                }
            }
            section_lines.push(item);
            continue;
        }

        if current_section.is_some() {
            section_lines.push(line.to_string());
        } else {
            debug!(%line, "dropping line outside any section");
        }
    }

    commit_section(&mut outline, current_section, &mut section_lines);
    outline
}

/// Store the accumulated lines under the section's lower-cased name.
fn commit_section(outline: &mut Outline, section: Option<String>, lines: &mut Vec<String>) {
    let collected = std::mem::take(lines);
    if let Some(name) = section {
        if !collected.is_empty() {
            outline.sections.insert(name.to_lowercase(), collected);
        }
    }
}
