/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use pubweb_core::{Bibliography, DesignatedAuthor, Reference};
use tracing::debug;

use crate::render::CitationStyle;

/// Orders references newest first and optionally keeps only first-author works.
pub struct Sorter<'a> {
    designated: &'a DesignatedAuthor,
    style: &'a dyn CitationStyle,
}

impl<'a> Sorter<'a> {
    pub fn new(designated: &'a DesignatedAuthor, style: &'a dyn CitationStyle) -> Self {
        Self { designated, style }
    }

    /// Sort by `(year, month)` descending. The sort is stable, so entries with
    /// equal keys keep their bibliography order.
    pub fn sort_references<'b>(
        &self,
        bibliography: &'b Bibliography,
        selected_only: bool,
    ) -> Vec<(&'b str, &'b Reference)> {
        let mut refs: Vec<(&str, &Reference)> = bibliography
            .iter()
            .map(|(key, reference)| (key.as_str(), reference))
            .collect();
        refs.sort_by(|(_, a), (_, b)| b.sort_key().cmp(&a.sort_key()));

        if selected_only {
            refs.retain(|(key, reference)| {
                let keep = self.is_first_author_work(reference);
                debug!(key = *key, keep, "first-author filter");
                keep
            });
        }
        refs
    }

    /// A reference qualifies when it declares shared first authors or its
    /// first author renders as one of the designated forms. A reference
    /// without authors never qualifies.
    pub fn is_first_author_work(&self, reference: &Reference) -> bool {
        if reference.shared_first_author_count() > 0 {
            return true;
        }
        reference
            .authors
            .first()
            .map(|first| self.designated.matches(&self.style.format_name(first)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Apa;
    use pubweb_core::Person;

    fn entry(id: &str, year: &str, month: &str) -> (String, Reference) {
        let mut r = Reference::new(id, "article").with_field("year", year);
        if !month.is_empty() {
            r = r.with_field("month", month);
        }
        (id.to_string(), r)
    }

    fn keys(sorted: &[(&str, &Reference)]) -> Vec<String> {
        sorted.iter().map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn sorts_newest_first_with_month_tiebreak() {
        let bib: Bibliography = vec![
            entry("a2020", "2020", ""),
            entry("b2024jan", "2024", "jan"),
            entry("c2024dec", "2024", "December"),
            entry("d2024", "2024", ""),
            entry("nodate", "", ""),
        ]
        .into_iter()
        .collect();
        let apa = Apa::default();
        let designated = DesignatedAuthor::default();
        let sorted = Sorter::new(&designated, &apa).sort_references(&bib, false);
        assert_eq!(
            keys(&sorted),
            vec!["c2024dec", "b2024jan", "d2024", "a2020", "nodate"]
        );
    }

    #[test]
    fn equal_keys_keep_source_order() {
        let bib: Bibliography = vec![
            entry("first", "2022", "5"),
            entry("second", "2022", "may"),
            entry("third", "2022", "May"),
        ]
        .into_iter()
        .collect();
        let apa = Apa::default();
        let designated = DesignatedAuthor::default();
        let sorted = Sorter::new(&designated, &apa).sort_references(&bib, false);
        assert_eq!(keys(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn first_author_filter() {
        let owner = Reference::new("owner", "article")
            .with_field("year", "2021")
            .with_authors(vec![Person::new("Schaub", "David"), Person::new("Doe", "Jane")]);
        let shared = Reference::new("shared", "article")
            .with_field("year", "2023")
            .with_field("usera", "2")
            .with_authors(vec![Person::new("Doe", "Jane"), Person::new("Schaub", "David Paul")]);
        let other = Reference::new("other", "article")
            .with_field("year", "2024")
            .with_authors(vec![Person::new("Doe", "Jane"), Person::new("Schaub", "David Paul")]);
        let anonymous = Reference::new("anonymous", "article").with_field("year", "2025");

        let bib: Bibliography = [owner, shared, other, anonymous]
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();
        let apa = Apa::default();
        let designated = DesignatedAuthor::default();
        let sorted = Sorter::new(&designated, &apa).sort_references(&bib, true);
        assert_eq!(keys(&sorted), vec!["shared", "owner"]);
    }
}
