/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publication list processing.
//!
//! The [`Processor`] orders the bibliography, renders every reference in the
//! requested [`RenderMode`] and assembles the HTML fragment.

pub mod postprocess;
pub mod sorting;


use std::fmt;

use pubweb_core::{Bibliography, Config, Reference};
use tracing::{debug, error, info};

use crate::render::html::{self, Card, NO_PUBLICATIONS};
use crate::render::names::author_list_html;
use crate::render::{Apa, CitationStyle, NameListPolicy};
use crate::ProcessorError;

pub use postprocess::PostProcessor;
pub use sorting::Sorter;

/// Output layout for the publication list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Visually distinct cards built from individual fields.
    #[default]
    Card,
    /// Full reference-list citations.
    Citation,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Card => write!(f, "card"),
            RenderMode::Citation => write!(f, "citation"),
        }
    }
}

pub struct Processor {
    bibliography: Bibliography,
    config: Config,
    style: Box<dyn CitationStyle>,
}

impl Processor {
    /// Create a processor using the APA-like style with the configured
    /// name-list policy.
    pub fn new(bibliography: Bibliography, config: Config) -> Self {
        let style = Apa::new(NameListPolicy::from(&config.names));
        Self::with_style(bibliography, config, Box::new(style))
    }

    pub fn with_style(
        bibliography: Bibliography,
        config: Config,
        style: Box<dyn CitationStyle>,
    ) -> Self {
        Self {
            bibliography,
            config,
            style,
        }
    }

    /// References in display order, filtered to first-author works when
    /// `selected_only` is set.
    pub fn sorted_references(&self, selected_only: bool) -> Vec<(&str, &Reference)> {
        Sorter::new(&self.config.designated_author, self.style.as_ref())
            .sort_references(&self.bibliography, selected_only)
    }

    /// Render the publication fragment, including the equal-contribution note
    /// when any entry needs it.
    pub fn render(&self, mode: RenderMode, selected_only: bool) -> Result<String, ProcessorError> {
        if self.bibliography.is_empty() {
            return Ok(NO_PUBLICATIONS.to_string());
        }
        let refs = self.sorted_references(selected_only);
        info!(
            total = self.bibliography.len(),
            shown = refs.len(),
            %mode,
            "rendering publications"
        );
        let entries = match mode {
            RenderMode::Card => refs.iter().map(|(_, r)| self.render_card(r)).collect(),
            RenderMode::Citation => self.render_citations(&refs)?,
        };
        Ok(html::assemble(entries))
    }

    fn render_card(&self, reference: &Reference) -> String {
        Card {
            journal: reference.journal(),
            year: reference.field_trimmed("year"),
            title: reference.title(),
            authors_html: author_list_html(
                self.style.as_ref(),
                reference,
                &self.config.designated_author,
            ),
            link: reference.link(),
        }
        .to_html()
    }

    /// Any failure aborts the whole list rather than a single entry.
    fn render_citations(&self, refs: &[(&str, &Reference)]) -> Result<Vec<String>, ProcessorError> {
        let post = PostProcessor::new(&self.config.designated_author)?;
        refs.iter()
            .map(|(key, reference)| {
                let citation = self.style.format_entry(reference)?;
                debug!(key = *key, %citation, "rendered citation");
                let processed = post.process(&citation, reference, self.style.as_ref());
                Ok(html::citation_entry(&processed))
            })
            .collect()
    }
}

/// Unwrap a rendered fragment, substituting the HTML error placeholder on
/// failure. The full error is logged.
pub fn fragment_or_placeholder(result: Result<String, ProcessorError>) -> String {
    match result {
        Ok(fragment) => fragment,
        Err(e) => {
            error!(error = ?e, "error loading publications: {}", e);
            html::error_placeholder(&e.to_string())
        }
    }
}
