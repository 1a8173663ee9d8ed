/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! pubweb processor
//!
//! Renders a BibTeX bibliography into an HTML publication list for a static
//! personal page and splices it into the page's publications section.
//!
//! # Example
//!
//! ```rust
//! use pubweb_core::{reference::parse_bibtex, Config};
//! use pubweb_processor::{Processor, RenderMode};
//!
//! let bib = parse_bibtex(r#"
//! @article{schaub2024,
//!   title = {Some Title},
//!   author = {Schaub, David Paul},
//!   journal = {Journal of Tests},
//!   year = {2024},
//!   doi = {10.1234/abcd}
//! }
//! "#).unwrap();
//!
//! let processor = Processor::new(bib, Config::default());
//! let html = processor.render(RenderMode::Citation, false).unwrap();
//! assert!(html.contains("<strong>Schaub, D. P.</strong>"));
//! assert!(html.contains(r#"href="https://doi.org/10.1234/abcd""#));
//! ```

pub mod error;
pub mod inject;
pub mod io;
pub mod processor;
pub mod render;

pub use error::ProcessorError;
pub use inject::{inject_file, inject_publications};
pub use processor::{fragment_or_placeholder, PostProcessor, Processor, RenderMode, Sorter};
pub use render::{Apa, CitationStyle, NameListPolicy};
