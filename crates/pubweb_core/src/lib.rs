/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! pubweb core
//!
//! Data model shared by the pubweb processor and command-line tool: the
//! bibliographic [`Reference`] record with its author [`Person`] list, the
//! insertion-ordered [`Bibliography`] collection, the field extractors that
//! normalise raw BibTeX values, and the [`Config`] options model.

pub mod options;
pub mod reference;

pub use options::{Config, DesignatedAuthor, NameOptions};
pub use reference::fields::Link;
pub use reference::{Bibliography, Person, Reference, SortKey};
