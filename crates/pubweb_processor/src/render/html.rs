/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML markup for publication entries.
//!
//! Class names and indentation are part of the page's stylesheet contract
//! and must stay stable.

use pubweb_core::reference::fields::Link;

/// Superscript marker for shared first authors.
pub const SUP_MARKER: &str = "<sup>*</sup>";

/// Fragment used when the bibliography holds no entries at all.
pub const NO_PUBLICATIONS: &str = "<p>No publications found.</p>";

/// Note explaining the shared-first-author marker.
pub const EQUAL_CONTRIBUTION_NOTE: &str = "\n            <p class=\"publication-note\" style=\"font-size: 0.9em; text-align: right;\"><strong>*</strong> indicates equal contribution</p>";

const EXTERNAL_LINK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-external-link ml-0.5 inline-block h-4 w-4" aria-hidden="true"><path d="M15 3h6v6"></path><path d="M10 14 21 3"></path><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path></svg>"#;

/// Escape text for use in HTML content and double- or single-quoted
/// attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// The fields of one card, as plain text except for `authors_html`.
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    pub journal: &'a str,
    pub year: &'a str,
    pub title: String,
    pub authors_html: String,
    pub link: Option<Link>,
}

impl Card<'_> {
    /// "Journal (Year)", "Journal", or nothing without a journal.
    fn journal_display(&self) -> Option<String> {
        match (self.journal.is_empty(), self.year.is_empty()) {
            (true, _) => None,
            (false, true) => Some(self.journal.to_string()),
            (false, false) => Some(format!("{} ({})", self.journal, self.year)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut lines = vec![r#"                <div class="publication-card">"#.to_string()];
        if let Some(journal) = self.journal_display() {
            lines.push(format!(
                r#"                    <div class="publication-journal">{}</div>"#,
                escape_html(&journal)
            ));
        }
        lines.push(format!(
            r#"                    <div class="publication-title">{}</div>"#,
            escape_html(&self.title)
        ));
        lines.push(format!(
            r#"                    <div class="publication-authors">{}</div>"#,
            self.authors_html
        ));
        if let Some(link) = &self.link {
            lines.push(format!(
                r#"                    <a href="{}" target="_blank" rel="noopener noreferrer" class="publication-link">{}{}</a>"#,
                escape_html(&link.url),
                escape_html(link.label),
                EXTERNAL_LINK_ICON
            ));
        }
        lines.push("                </div>".to_string());
        lines.join("\n")
    }
}

/// Container for one post-processed reference-list citation.
pub fn citation_entry(citation_html: &str) -> String {
    format!(
        r#"                <div class="publication">
                    <div class="publication-citation">{}</div>
                </div>
"#,
        citation_html
    )
}

/// Join entries and append the equal-contribution note when any entry
/// carries the shared-first-author marker.
pub fn assemble(entries: Vec<String>) -> String {
    let mut fragment = entries.join("\n");
    if fragment.contains(SUP_MARKER) {
        fragment.push_str(EQUAL_CONTRIBUTION_NOTE);
    }
    fragment
}

/// Placeholder fragment shown in place of the publication list on failure.
pub fn error_placeholder(message: &str) -> String {
    format!(
        "<p>Error loading publications: {}</p>",
        escape_html(message)
    )
}
