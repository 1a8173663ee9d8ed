/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA-like plain-text reference list style.
//!
//! Produces entries of the form
//! `Authors (Year, Month). Title. Source. doi:DOI`, which is the shape the
//! citation post-processor expects.

use pubweb_core::reference::parse_month;
use pubweb_core::{Person, Reference};

use super::names::{initialize, NameListPolicy};
use super::CitationStyle;
use crate::ProcessorError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Default)]
pub struct Apa {
    policy: NameListPolicy,
}

impl Apa {
    pub fn new(policy: NameListPolicy) -> Self {
        Self { policy }
    }

    /// "2024, March", "2024", or "n.d." without a usable year.
    fn date(&self, reference: &Reference) -> String {
        let year = reference.field_trimmed("year");
        let year = if year.is_empty() { "n.d." } else { year };
        let month = reference.field_trimmed("month");
        if month.is_empty() {
            return year.to_string();
        }
        match parse_month(month) {
            0 => format!("{}, {}", year, month),
            n => format!("{}, {}", year, MONTH_NAMES[usize::from(n) - 1]),
        }
    }

    /// The container part of an entry, including its terminal period.
    fn source(&self, reference: &Reference) -> Option<String> {
        let field = |name: &str| Some(reference.field_trimmed(name)).filter(|v| !v.is_empty());
        let pages = field("pages").map(|p| p.replace("--", "\u{2013}"));

        let source = match reference.entry_type.as_str() {
            "article" => {
                let journal = field("journaltitle")
                    .or_else(|| Some(reference.journal()).filter(|j| !j.is_empty()))?;
                let mut source = journal.to_string();
                if let Some(volume) = field("volume") {
                    source.push_str(", ");
                    source.push_str(volume);
                    if let Some(number) = field("number") {
                        source.push_str(&format!("({})", number));
                    }
                }
                if let Some(pages) = pages {
                    source.push_str(", ");
                    source.push_str(&pages);
                }
                source
            }
            "inproceedings" | "incollection" | "inbook" => {
                let booktitle = field("booktitle")?;
                let mut source = format!("In {}", booktitle);
                if let Some(pages) = pages {
                    source.push_str(&format!(" (pp. {})", pages));
                }
                if let Some(publisher) = field("publisher") {
                    source = format!("{}. {}", source, publisher);
                }
                source
            }
            "phdthesis" | "mastersthesis" | "thesis" => {
                let kind = if reference.entry_type == "mastersthesis" {
                    "Master's thesis"
                } else {
                    "Doctoral dissertation"
                };
                match field("school").or_else(|| field("institution")) {
                    Some(school) => format!("[{}, {}]", kind, school),
                    None => format!("[{}]", kind),
                }
            }
            "techreport" | "report" => field("institution")
                .or_else(|| Some(reference.journal()).filter(|j| !j.is_empty()))?
                .to_string(),
            _ => Some(reference.journal()).filter(|j| !j.is_empty())?.to_string(),
        };
        Some(add_period(&source))
    }
}

/// Terminate a sentence with a period unless it already ends in punctuation.
fn add_period(text: &str) -> String {
    if text.ends_with(['.', '?', '!']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

impl CitationStyle for Apa {
    fn format_name(&self, person: &Person) -> String {
        let family = if person.prefix.is_empty() {
            person.family.clone()
        } else {
            format!("{} {}", person.prefix, person.family)
        };
        let initials = initialize(&person.given);
        let mut name = if initials.is_empty() {
            family
        } else {
            format!("{}, {}", family, initials)
        };
        if !person.suffix.is_empty() {
            name.push_str(", ");
            name.push_str(&person.suffix);
        }
        name
    }

    fn name_policy(&self) -> &NameListPolicy {
        &self.policy
    }

    fn format_entry(&self, reference: &Reference) -> Result<String, ProcessorError> {
        let title = reference.title();
        if title.is_empty() {
            return Err(ProcessorError::MissingField {
                key: reference.id.clone(),
                field: "title".to_string(),
            });
        }

        let mut parts = Vec::new();
        let authors = self.policy.join(
            reference
                .authors
                .iter()
                .map(|p| self.format_name(p))
                .collect(),
        );
        if !authors.is_empty() {
            parts.push(authors);
        }
        parts.push(format!("({}).", self.date(reference)));
        parts.push(add_period(&title));
        if let Some(source) = self.source(reference) {
            parts.push(source);
        }
        if let Some(doi) = reference.doi() {
            parts.push(format!("doi:{}", doi));
        } else if let Some(link) = reference.link() {
            parts.push(link.url);
        }
        Ok(parts.join(" "))
    }
}
