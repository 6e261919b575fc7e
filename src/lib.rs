// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! astrow - turns source files in many languages into a queryable,
//! columnar representation of their ASTs.
//!
//! This crate re-exports the full public surface from the workspace's
//! component crates: `read_ast`/`parse_ast` and the row/batch types from
//! [`astrow_engine`], the language registry from [`astrow_languages`],
//! the file resolver from [`astrow_fs`], and the flattened node shape
//! from [`astrow_parse`].

pub use astrow_core as core;
pub use astrow_engine as engine;
pub use astrow_fs as fs;
pub use astrow_languages as languages;
pub use astrow_parse as parse;

pub use astrow_core::taxonomy;
pub use astrow_core::{ContextLevel, CoreError, CoreResult, Options, PeekMode, SourceLevel, StructureLevel};
pub use astrow_engine::{ast_supported_languages, parse_ast, read_ast, AstReader, CancelToken, Row, RowBatch};
pub use astrow_fs::Patterns;
pub use astrow_languages::LanguageInfo;
pub use astrow_parse::{NativeContext, Node, Parameter};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
