// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The public API surface of the astrow workspace: the
//! `read_ast`/`parse_ast` table functions, the [`RowBatch`]/[`Row`] output
//! shape, and the scalar-UDF-style taxonomy helpers re-exported from
//! `astrow-core`.

mod batch;
mod driver;
mod source_variant;

pub use astrow_core::{CoreError, CoreResult, Options, PeekMode, ContextLevel, SourceLevel, StructureLevel};
pub use astrow_core::taxonomy;
pub use astrow_languages::LanguageInfo;
pub use astrow_parse::{NativeContext, Node, Parameter};

pub use batch::{Row, RowBatch};
pub use driver::{read_ast, AstReader, CancelToken};
pub use source_variant::parse_ast;

/// `ast_supported_languages()`: every built-in language
/// with its declared aliases and extensions.
#[must_use]
pub fn ast_supported_languages() -> Vec<LanguageInfo> {
    astrow_languages::supported_languages()
}
