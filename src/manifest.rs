//! Publication manifest decoding.
//!
//! A publication listing is driven by a small JSON manifest enumerating the
//! per-publication folders:
//!
//! ```json
//! {
//!   "publications": [
//!     { "folder": "widgets-2021", "id": "doe2021", "featured": true }
//!   ]
//! }
//! ```
//!
//! Fetching the manifest and the files inside each folder is the caller's
//! job; this module only turns the JSON text into typed entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while decoding a publication manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest entry {0} has an empty folder")]
    EmptyFolder(usize),
}

/// The manifest listing all publications to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub publications: Vec<ManifestEntry>,
}

/// One publication entry in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Folder holding the entry's `bibtex.bib` and optional `summary.md`.
    pub folder: String,
    /// Stable identifier, empty when the manifest does not provide one.
    #[serde(default)]
    pub id: String,
    /// Whether the publication is featured in the listing.
    #[serde(default)]
    pub featured: bool,
}

impl Manifest {
    /// Decode a manifest from its JSON text.
    ///
    /// Every entry must name a non-empty folder; everything else is
    /// optional.
    pub fn from_json(input: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(input)?;
        for (index, entry) in manifest.publications.iter().enumerate() {
            if entry.folder.trim().is_empty() {
                return Err(ManifestError::EmptyFolder(index));
            }
        }
        Ok(manifest)
    }
}
