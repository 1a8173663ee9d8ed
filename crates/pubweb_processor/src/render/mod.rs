/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation rendering.
//!
//! A [`CitationStyle`] turns one [`Reference`] into a plain-text citation and
//! renders single person names. The HTML side lives in [`html`]; author list
//! joining, which both sides share, lives in [`names`].

pub mod apa;
pub mod html;
pub mod names;

use pubweb_core::{Person, Reference};

use crate::ProcessorError;

pub use apa::Apa;
pub use names::NameListPolicy;

/// A plain-text citation style.
pub trait CitationStyle {
    /// Render one person the way the style prints names in a reference list.
    fn format_name(&self, person: &Person) -> String;

    /// The policy used to join rendered names into one list.
    fn name_policy(&self) -> &NameListPolicy;

    /// Render a full reference-list entry as plain text.
    fn format_entry(&self, reference: &Reference) -> Result<String, ProcessorError>;
}
