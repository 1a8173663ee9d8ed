/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author list formatting.

use pubweb_core::{DesignatedAuthor, NameOptions, Person, Reference};

use super::html::{escape_html, SUP_MARKER};
use super::CitationStyle;

/// How rendered names are joined into one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameListPolicy {
    /// Lists longer than this are cut to this many names plus "et al.".
    /// Zero disables truncation.
    pub et_al_min: usize,
}

impl Default for NameListPolicy {
    fn default() -> Self {
        Self { et_al_min: 20 }
    }
}

impl From<&NameOptions> for NameListPolicy {
    fn from(options: &NameOptions) -> Self {
        Self {
            et_al_min: options.et_al_min,
        }
    }
}

impl NameListPolicy {
    /// Join names: `A`, `A & B`, `A, B, & C`, or `A, B, ..., et al.` once the
    /// list exceeds `et_al_min`.
    pub fn join(&self, names: Vec<String>) -> String {
        self.join_with(names, "&")
    }

    /// Join names that are already HTML, using an escaped ampersand.
    pub fn join_html(&self, names: Vec<String>) -> String {
        self.join_with(names, "&amp;")
    }

    fn join_with(&self, mut names: Vec<String>, and: &str) -> String {
        if self.et_al_min > 0 && names.len() > self.et_al_min {
            names.truncate(self.et_al_min);
            names.push("et al.".to_string());
            return names.join(", ");
        }
        match names.len() {
            0 => String::new(),
            1 => names.remove(0),
            2 => format!("{} {} {}", names[0], and, names[1]),
            n => format!("{}, {} {}", names[..n - 1].join(", "), and, names[n - 1]),
        }
    }
}

/// Reduce given names to initials: "David Paul" becomes "D. P." and
/// "Jean-Paul" becomes "J.-P.".
pub fn initialize(given: &str) -> String {
    let mut result = String::new();
    let mut current = String::new();
    let mut after_hyphen = false;

    for c in given.chars().chain(std::iter::once(' ')) {
        if c.is_whitespace() || matches!(c, '~' | '.' | '-') {
            if let Some(first) = current.chars().next() {
                if !result.is_empty() {
                    result.push(if after_hyphen { '-' } else { ' ' });
                }
                result.push(first);
                result.push('.');
                after_hyphen = false;
                current.clear();
            }
            if c == '-' {
                after_hyphen = true;
            }
        } else {
            current.push(c);
        }
    }
    result
}

/// Render each author through `wrap`, appending `marker` to the first
/// `shared` names.
pub fn format_author_names(
    style: &dyn CitationStyle,
    persons: &[Person],
    shared: usize,
    marker: &str,
    wrap: impl Fn(&str) -> String,
) -> Vec<String> {
    persons
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let mut name = wrap(&style.format_name(person));
            if i < shared {
                name.push_str(marker);
            }
            name
        })
        .collect()
}

/// Plain-text author list with `marker` after each shared first author.
/// `wrap` is applied to each name before the marker is added.
///
/// Returns an empty string when the reference has no authors.
pub fn annotated_author_list(
    style: &dyn CitationStyle,
    reference: &Reference,
    marker: &str,
    wrap: impl Fn(&str) -> String,
) -> String {
    let names = format_author_names(
        style,
        &reference.authors,
        reference.shared_first_author_count(),
        marker,
        wrap,
    );
    style.name_policy().join(names)
}

/// HTML author list for card output.
///
/// Each name is escaped, shared first authors get a superscript marker, and a
/// name equal to one of the designated forms is wrapped in `<strong>` together
/// with its marker.
pub fn author_list_html(
    style: &dyn CitationStyle,
    reference: &Reference,
    designated: &DesignatedAuthor,
) -> String {
    let shared = reference.shared_first_author_count();
    let names = reference
        .authors
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let rendered = style.format_name(person);
            let mut html = escape_html(&rendered);
            if i < shared {
                html.push_str(SUP_MARKER);
            }
            if designated.matches(&rendered) {
                html = format!("<strong>{}</strong>", html);
            }
            html
        })
        .collect();
    style.name_policy().join_html(names)
}
