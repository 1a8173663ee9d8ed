/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use pubweb_core::reference::parse_bibtex;
use pubweb_core::{Bibliography, Config};

use crate::ProcessorError;

/// Load a bibliography from a BibTeX/BibLaTeX file.
pub fn load_bibliography(path: &Path) -> Result<Bibliography, ProcessorError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    parse_bibtex(&content).map_err(|e| ProcessorError::ParseError("BibTeX".to_string(), e.to_string()))
}

/// Load conversion options from a YAML file.
pub fn load_config(path: &Path) -> Result<Config, ProcessorError> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
}
