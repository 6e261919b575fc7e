// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Options`]: the single config surface for `read_ast`/`parse_ast`.
//! Every table-function option is a field here; nothing is threaded
//! through individual functions positionally.

/// How much of a node's source text to copy into its `peek` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PeekMode {
    /// `chars` for short, single-line nodes; `lines` for multi-line ones.
    #[default]
    Auto,
    /// Truncate at `peek_size` characters.
    Chars,
    /// Whole leading lines, up to `peek_size` characters.
    Lines,
    /// Always `null`.
    None,
}

/// How much semantic derivation the flattener performs per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContextLevel {
    /// `type` only; `semantic_type`/`name`/native fields are skipped.
    None,
    /// `type` and `semantic_type`, no name/native derivation.
    NodeTypesOnly,
    /// `type`, `semantic_type`, `name`; no native context.
    Normalized,
    /// Everything, including native context extraction.
    #[default]
    Native,
}

impl ContextLevel {
    #[must_use]
    pub const fn wants_semantic_type(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn wants_name(self) -> bool {
        matches!(self, Self::Normalized | Self::Native)
    }

    #[must_use]
    pub const fn wants_native(self) -> bool {
        matches!(self, Self::Native)
    }
}

/// How much source-location data is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceLevel {
    /// No location columns at all.
    None,
    /// `start_line`/`end_line` only.
    #[default]
    Lines,
    /// Lines plus `start_column`/`end_column`.
    Full,
}

impl SourceLevel {
    #[must_use]
    pub const fn wants_lines(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn wants_columns(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// How much tree-shape data is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StructureLevel {
    /// No structural columns beyond `node_id`.
    None,
    /// `parent_id`/`depth` only.
    Minimal,
    /// Everything: `parent_id`, `depth`, `sibling_index`,
    /// `children_count`, `descendant_count`.
    #[default]
    Full,
}

impl StructureLevel {
    #[must_use]
    pub const fn wants_parent(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn wants_full(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// The single config surface accepted by `read_ast`/`parse_ast`.
/// Cloneable and, with the `serde` feature, directly (de)serializable so
/// a host can hand it a JSON literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub ignore_errors: bool,
    pub peek_size: usize,
    pub peek_mode: PeekMode,
    pub context: ContextLevel,
    pub source: SourceLevel,
    pub structure: StructureLevel,
    pub batch_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ignore_errors: false,
            peek_size: 120,
            peek_mode: PeekMode::default(),
            context: ContextLevel::default(),
            source: SourceLevel::default(),
            structure: StructureLevel::default(),
            batch_size: 2048,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }

    #[must_use]
    pub fn with_peek_size(mut self, peek_size: usize) -> Self {
        self.peek_size = peek_size;
        self
    }

    #[must_use]
    pub fn with_peek_mode(mut self, peek_mode: PeekMode) -> Self {
        self.peek_mode = peek_mode;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: ContextLevel) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceLevel) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_structure(mut self, structure: StructureLevel) -> Self {
        self.structure = structure;
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let opts = Options::default();
        assert_eq!(opts.peek_size, 120);
        assert_eq!(opts.batch_size, 2048);
        assert_eq!(opts.context, ContextLevel::Native);
        assert_eq!(opts.source, SourceLevel::Lines);
        assert_eq!(opts.structure, StructureLevel::Full);
        assert!(!opts.ignore_errors);
    }

    #[test]
    fn context_monotonicity_flags() {
        assert!(!ContextLevel::None.wants_semantic_type());
        assert!(ContextLevel::NodeTypesOnly.wants_semantic_type());
        assert!(!ContextLevel::NodeTypesOnly.wants_name());
        assert!(ContextLevel::Normalized.wants_name());
        assert!(!ContextLevel::Normalized.wants_native());
        assert!(ContextLevel::Native.wants_native());
    }

    #[test]
    fn builder_methods_chain() {
        let opts = Options::default()
            .with_batch_size(10)
            .with_peek_size(8)
            .with_context(ContextLevel::None);
        assert_eq!(opts.batch_size, 10);
        assert_eq!(opts.peek_size, 8);
        assert_eq!(opts.context, ContextLevel::None);
    }

    #[test]
    fn zero_batch_size_clamped_to_one() {
        assert_eq!(Options::default().with_batch_size(0).batch_size, 1);
    }
}
