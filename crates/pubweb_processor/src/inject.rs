/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Splicing the publication fragment into the host page.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{info, warn};

use crate::ProcessorError;

/// The publications section: its opening tag and heading, the body to
/// replace, and the closing tag.
static PUBLICATIONS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<section id="publications">\s*<h2>[^<]*</h2>)(.*?)(</section>)"#)
        .expect("valid regex")
});

/// Replace the body of every publications section with `fragment`.
///
/// Returns the new document and whether a section was found. Without a
/// match the document is returned unchanged.
pub fn inject_publications(document: &str, fragment: &str) -> (String, bool) {
    let mut found = false;
    let updated = PUBLICATIONS_SECTION.replace_all(document, |caps: &Captures| {
        found = true;
        format!("{}\n{}            {}", &caps[1], fragment, &caps[3])
    });
    (updated.into_owned(), found)
}

/// Read the document at `path`, inject `fragment` and write it back.
pub fn inject_file(path: &Path, fragment: &str) -> Result<bool, ProcessorError> {
    let document = fs::read_to_string(path)?;
    let (updated, found) = inject_publications(&document, fragment);
    if !found {
        warn!(path = %path.display(), "no publications section found; document left unchanged");
    }
    fs::write(path, updated)?;
    info!("Successfully injected publications into {}", path.display());
    Ok(found)
}
