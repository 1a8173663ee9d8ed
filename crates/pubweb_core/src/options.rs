/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conversion options.
//!
//! Every field has a default, so an empty YAML document is a valid
//! configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Bibliography source, relative to the project root.
    pub bibliography: PathBuf,
    /// Host HTML document, relative to the project root.
    pub document: PathBuf,
    /// The page owner, whose name is emphasised and used for filtering.
    pub designated_author: DesignatedAuthor,
    /// Author list formatting.
    pub names: NameOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bibliography: PathBuf::from("data/publications.bib"),
            document: PathBuf::from("index.html"),
            designated_author: DesignatedAuthor::default(),
            names: NameOptions::default(),
        }
    }
}

/// Recognised rendered forms of the page owner's name.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DesignatedAuthor {
    /// Name forms exactly as the name formatter renders them
    /// (e.g., "Schaub, D. P.").
    pub forms: Vec<String>,
}

impl Default for DesignatedAuthor {
    fn default() -> Self {
        Self {
            forms: vec!["Schaub, D. P.".to_string(), "Schaub, D.".to_string()],
        }
    }
}

impl DesignatedAuthor {
    /// Whether a rendered name is one of the recognised forms.
    pub fn matches(&self, rendered: &str) -> bool {
        self.forms.iter().any(|form| form == rendered)
    }

    /// The non-empty forms, longest first, so that a shorter form never
    /// claims a prefix of a longer one.
    pub fn forms_longest_first(&self) -> Vec<&str> {
        let mut forms: Vec<&str> = self
            .forms
            .iter()
            .map(String::as_str)
            .filter(|f| !f.trim().is_empty())
            .collect();
        forms.sort_by(|a, b| b.len().cmp(&a.len()));
        forms
    }
}

/// Options for joining author names.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct NameOptions {
    /// Lists with more names than this are cut to this many names followed
    /// by "et al.".
    pub et_al_min: usize,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self { et_al_min: 20 }
    }
}
