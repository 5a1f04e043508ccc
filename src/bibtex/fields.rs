//! Field-name dispatch into a [`Publication`] record.

use tracing::debug;

use crate::Publication;

/// Route a parsed `name`/`value` pair into the record.
///
/// Two names get special treatment: `links`, a comma-separated list of
/// `label:url` pairs, and `url`, which lands in the links map and backfills
/// the `journal` and `pdf` links when those are not already set. Everything
/// else is stored verbatim in `fields` under its lower-cased name.
pub(crate) fn apply_field(publication: &mut Publication, name: &str, value: &str) {
    match name {
        "links" => {
            for part in value.split(',') {
                let part = part.trim();
                let Some(colon) = part.find(':') else {
                    continue;
                };
                if colon == 0 {
                    continue;
                }
                let label = part[..colon].trim().to_string();
                let url = part[colon + 1..].trim().to_string();
                debug!(%label, %url, "link found");
                publication.links.insert(label, url);
            }
        }
        "url" => {
            debug!(url = %value, "url field found");
            publication
                .links
                .insert("url".to_string(), value.to_string());
            // First-seen-wins: an explicit journal or pdf link is never
            // overwritten by a bare url.
            for label in ["journal", "pdf"] {
                publication
                    .links
                    .entry(label.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        _ => {
            debug!(field = %name, %value, "field found");
            publication
                .fields
                .insert(name.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_field_stored_verbatim() {
        let mut publication = Publication::default();
        apply_field(&mut publication, "title", "On Widgets");
        assert_eq!(publication.field("title"), Some("On Widgets"));
        assert!(publication.links.is_empty());
    }

    #[test]
    fn test_links_field_splits_label_url_pairs() {
        let mut publication = Publication::default();
        apply_field(
            &mut publication,
            "links",
            "journal: https://j.example/a, pdf: https://j.example/a.pdf",
        );
        assert_eq!(
            publication.links.get("journal"),
            Some(&"https://j.example/a".to_string())
        );
        assert_eq!(
            publication.links.get("pdf"),
            Some(&"https://j.example/a.pdf".to_string())
        );
    }

    #[test]
    fn test_links_field_splits_on_first_colon_only() {
        let mut publication = Publication::default();
        apply_field(&mut publication, "links", "code:https://example.com/repo");
        assert_eq!(
            publication.links.get("code"),
            Some(&"https://example.com/repo".to_string())
        );
    }

    #[test]
    fn test_links_field_skips_unlabeled_pieces() {
        let mut publication = Publication::default();
        apply_field(&mut publication, "links", "no-colon-here, :empty-label");
        assert!(publication.links.is_empty());
    }

    #[test]
    fn test_url_backfills_journal_and_pdf() {
        let mut publication = Publication::default();
        apply_field(&mut publication, "url", "https://example.com/paper");
        assert_eq!(
            publication.links.get("url"),
            Some(&"https://example.com/paper".to_string())
        );
        assert_eq!(
            publication.links.get("journal"),
            Some(&"https://example.com/paper".to_string())
        );
        assert_eq!(
            publication.links.get("pdf"),
            Some(&"https://example.com/paper".to_string())
        );
    }

    #[test]
    fn test_url_backfill_is_first_seen_wins() {
        let mut publication = Publication::default();
        apply_field(&mut publication, "links", "journal: https://j.example/a");
        apply_field(&mut publication, "url", "https://example.com/paper");
        assert_eq!(
            publication.links.get("journal"),
            Some(&"https://j.example/a".to_string())
        );
        assert_eq!(
            publication.links.get("pdf"),
            Some(&"https://example.com/paper".to_string())
        );
    }
}
