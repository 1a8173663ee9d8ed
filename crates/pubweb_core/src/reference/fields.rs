/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field extractors.
//!
//! Each extractor derives one normalised value from a [`Reference`]. They
//! never fail: missing or malformed data falls back to an empty string, `0`,
//! or `None`.

use std::sync::LazyLock;

use regex::Regex;

use super::Reference;

/// Name of the custom field holding the shared-first-author count.
pub const SHARED_FIRST_AUTHOR_FIELD: &str = "usera";

/// Label used for every outbound paper link.
pub const LINK_LABEL: &str = "Read Paper";

static DOUBLE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("valid regex"));
static SINGLE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("valid regex"));

const MONTHS: [(&str, u8); 35] = [
    ("jan", 1),
    ("january", 1),
    ("1", 1),
    ("feb", 2),
    ("february", 2),
    ("2", 2),
    ("mar", 3),
    ("march", 3),
    ("3", 3),
    ("apr", 4),
    ("april", 4),
    ("4", 4),
    ("may", 5),
    ("5", 5),
    ("jun", 6),
    ("june", 6),
    ("6", 6),
    ("jul", 7),
    ("july", 7),
    ("7", 7),
    ("aug", 8),
    ("august", 8),
    ("8", 8),
    ("sep", 9),
    ("september", 9),
    ("9", 9),
    ("oct", 10),
    ("october", 10),
    ("10", 10),
    ("nov", 11),
    ("november", 11),
    ("11", 11),
    ("dec", 12),
    ("december", 12),
    ("12", 12),
];

/// An outbound link for a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: &'static str,
}

/// Ordering key for a reference: `(year, month)`, where `0` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub year: u32,
    pub month: u8,
}

/// Remove BibTeX grouping braces from a title.
///
/// Doubled braces (`{{X}}`) resolve to their inner text first, then single
/// groups are unwrapped from the inside out. Unbalanced leftovers are dropped,
/// so the result never contains a brace and stripping is idempotent.
pub fn clean_title(title: &str) -> String {
    let mut clean = DOUBLE_BRACE.replace_all(title, "$1").into_owned();
    loop {
        let next = SINGLE_BRACE.replace_all(&clean, "$1").into_owned();
        if next == clean {
            break;
        }
        clean = next;
    }
    clean.replace(['{', '}'], "")
}

/// Parse a year field. Only pure decimal digits are accepted; anything else
/// (including an empty field or an overflowing number) yields `0`.
pub fn parse_year(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    raw.parse().unwrap_or(0)
}

/// Parse a month field to `1..=12`, or `0` if it is not recognised.
///
/// Accepts English month names, their three-letter abbreviations and the
/// numerals `1` to `12` in any case; other integers are accepted only when
/// they fall inside the month range (e.g., `"03"`).
pub fn parse_month(raw: &str) -> u8 {
    let month = raw.trim().to_lowercase();
    if month.is_empty() {
        return 0;
    }
    if let Some((_, n)) = MONTHS.iter().find(|(name, _)| *name == month) {
        return *n;
    }
    match month.parse::<i64>() {
        Ok(n @ 1..=12) => n as u8,
        _ => 0,
    }
}

impl Reference {
    /// The cleaned title, or an empty string.
    pub fn title(&self) -> String {
        clean_title(self.field_trimmed("title"))
    }

    /// The container name: journal, else publisher, else archive prefix.
    pub fn journal(&self) -> &str {
        ["journal", "publisher", "archiveprefix"]
            .iter()
            .map(|name| self.field_trimmed(name))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// The DOI, if the entry carries a non-empty one.
    pub fn doi(&self) -> Option<&str> {
        Some(self.field_trimmed("doi")).filter(|d| !d.is_empty())
    }

    /// The outbound link: a DOI resolver URL when a DOI exists, else the raw URL.
    pub fn link(&self) -> Option<Link> {
        if let Some(doi) = self.doi() {
            return Some(Link {
                url: format!("https://doi.org/{}", doi),
                label: LINK_LABEL,
            });
        }
        Some(self.field_trimmed("url"))
            .filter(|u| !u.is_empty())
            .map(|url| Link {
                url: url.to_string(),
                label: LINK_LABEL,
            })
    }

    /// Publication year as an integer (`0` when unknown).
    pub fn year(&self) -> u32 {
        parse_year(self.field("year").unwrap_or("0"))
    }

    /// Publication month as `1..=12` (`0` when unknown).
    pub fn month(&self) -> u8 {
        parse_month(self.field("month").unwrap_or(""))
    }

    /// Number of leading authors who share first authorship.
    pub fn shared_first_author_count(&self) -> usize {
        self.field_trimmed(SHARED_FIRST_AUTHOR_FIELD)
            .parse()
            .unwrap_or(0)
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey {
            year: self.year(),
            month: self.month(),
        }
    }
}
