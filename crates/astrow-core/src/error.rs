// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The single error type returned by every call-level boundary in the
//! pipeline (resolver and driver). Extractors and the flattener never
//! construct one of these for shape reasons — only I/O, input validation,
//! and language/grammar lookups do.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `astrow-fs` and `astrow-engine`'s public entry
/// points. Internal failure shapes (e.g. a registry construction failure)
/// are folded into [`CoreError::AdapterInitError`].
#[derive(Error, Debug)]
pub enum CoreError {
    /// Empty or malformed pattern list, or a bad option value. Always
    /// fatal to the call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No adapter matches a requested language name or file extension.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A literal path did not resolve to an existing file.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A filesystem operation failed while reading a resolved file.
    #[error("failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A grammar failed in a way that isn't representable as an `ERROR`
    /// node in the parse tree (soft syntax errors never reach here).
    #[error("failed to parse {}: {reason}", .path.display())]
    ParseError { path: PathBuf, reason: String },

    /// A grammar's ABI version doesn't match the linked `tree-sitter`
    /// runtime, or adapter registration otherwise failed. Fatal to the
    /// call.
    #[error("adapter initialization failed: {0}")]
    AdapterInitError(String),

    /// A category name passed to [`crate::taxonomy::code_of`] has no
    /// defined code.
    #[error("unknown semantic category: {0}")]
    UnknownCategory(String),
}

/// Convenience alias used throughout the workspace's crates.
pub type CoreResult<T> = Result<T, CoreError>;
