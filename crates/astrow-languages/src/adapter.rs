// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`LanguageAdapter`]: the trait one value-type per grammar implements.
//! Per-language behavior lives in a handful of overridable functions plus
//! a data table, never in an inheritance hierarchy.

use astrow_core::{CoreError, NodeConfig};
use tree_sitter::{Node, Parser, Tree};

/// Everything the flattener needs to turn one grammar's parse tree into
/// the universal row shape.
pub trait LanguageAdapter: Send + Sync {
    /// Canonical, lowercase language name (e.g. `"python"`).
    fn language_name(&self) -> &'static str;

    /// Alternate names this language is known by (lowercase). Does not
    /// include file extensions; those come from [`Self::extensions`].
    fn aliases(&self) -> &'static [&'static str];

    /// File extensions (without the leading dot, lowercase) that select
    /// this language by default.
    fn extensions(&self) -> &'static [&'static str];

    /// Parse `source` into a fresh tree. Implementations construct a new
    /// [`Parser`] per call so this is safe to invoke from multiple
    /// threads concurrently.
    fn parse(&self, source: &[u8]) -> Result<Tree, CoreError>;

    /// Look up the configuration for a raw grammar node type, if the
    /// adapter has one. Unconfigured types fall back to
    /// [`NodeConfig::default_syntax`] in the flattener.
    fn node_config(&self, raw_type: &str) -> Option<NodeConfig>;

    /// Derive `name` for a node per its configured [`astrow_core::NameStrategy`],
    /// with a language-specific fallback for unconfigured types.
    fn extract_name<'a>(&self, node: Node<'a>, source: &'a [u8]) -> String;

    /// Whether `node` is part of this language's public API surface
    /// (visibility rules are language-specific).
    fn is_public(&self, node: Node<'_>, source: &[u8]) -> bool;
}

/// A parser builder bound to a `tree_sitter::Language`, shared by every
/// adapter's [`LanguageAdapter::parse`] implementation.
pub(crate) fn parse_with(
    language: &tree_sitter::Language,
    source: &[u8],
) -> Result<Tree, CoreError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| CoreError::AdapterInitError(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| CoreError::ParseError {
            path: std::path::PathBuf::new(),
            reason: "tree-sitter returned no tree (parser was cancelled)".to_owned(),
        })
}

/// Summary row for `ast_supported_languages()`.
#[derive(Debug, Clone)]
pub struct LanguageInfo {
    pub language: &'static str,
    pub aliases: Vec<&'static str>,
    pub extensions: Vec<&'static str>,
}
