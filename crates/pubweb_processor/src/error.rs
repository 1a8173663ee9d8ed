/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("reference '{key}' is missing required field '{field}'")]
    MissingField { key: String, field: String },

    #[error("invalid author name pattern: {0}")]
    Pattern(#[from] regex::Error),
}
