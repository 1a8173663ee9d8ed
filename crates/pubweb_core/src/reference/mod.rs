/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A reference is one bibliographic record (article, book, preprint, ...)
//! together with its ordered author list.

pub mod conversion;
pub mod fields;


use indexmap::IndexMap;

pub use self::conversion::parse_bibtex;
pub use self::fields::{clean_title, parse_month, parse_year, SortKey};

/// Citation key for a reference.
pub type RefID = String;

/// An insertion-ordered collection of references keyed by citation key.
pub type Bibliography = IndexMap<RefID, Reference>;

/// A structured person name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// Family name.
    pub family: String,
    /// Given names, space separated (e.g., "David Paul").
    pub given: String,
    /// Name prefix such as "van" or "de".
    pub prefix: String,
    /// Name suffix such as "Jr.".
    pub suffix: String,
}

impl Person {
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            family: family.to_string(),
            given: given.to_string(),
            ..Default::default()
        }
    }
}

/// One bibliographic entry.
///
/// Field names are stored lowercased and values are the flattened field text
/// with BibTeX grouping already resolved by the parser. A reference is never
/// mutated after it has been read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reference {
    /// The citation key.
    pub id: RefID,
    /// Entry type as written in the source, lowercased (e.g., "article").
    pub entry_type: String,
    /// Raw field values in source order.
    pub fields: IndexMap<String, String>,
    /// Persons in the author role, in listed order.
    pub authors: Vec<Person>,
}

impl Reference {
    pub fn new(id: &str, entry_type: &str) -> Self {
        Self {
            id: id.to_string(),
            entry_type: entry_type.to_lowercase(),
            ..Default::default()
        }
    }

    /// Builder-style helper to set a field.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_lowercase(), value.to_string());
        self
    }

    /// Builder-style helper to set the author list.
    pub fn with_authors(mut self, authors: Vec<Person>) -> Self {
        self.authors = authors;
        self
    }

    /// Return the raw value of a field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Return the trimmed value of a field, or an empty string when absent.
    pub fn field_trimmed(&self, name: &str) -> &str {
        self.field(name).map(str::trim).unwrap_or("")
    }
}
