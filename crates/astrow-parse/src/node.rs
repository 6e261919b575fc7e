// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flattened row shape. One [`Node`] per tree-sitter
//! node, in depth-first pre-order; optional fields are `None` when the
//! caller's [`astrow_core::Options`] asked the flattener to skip them.

/// Sentinel `parent_id` for a root node: always `-1`, never null/None, so
/// every row carries the same column shape.
pub const ROOT_PARENT_ID: i64 = -1;

/// One positional parameter extracted from a parameter list or a call's
/// argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub r#type: Option<String>,
}

/// Native-context fields populated for definition-like nodes whose
/// [`astrow_core::NativeStrategy`] is not `None`. Kept as
/// a single struct rather than four loose `Option`s on [`Node`] because
/// they are always populated (or skipped) together by one extractor call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeContext {
    pub signature_type: Option<String>,
    pub parameters: Vec<Parameter>,
    pub modifiers: Vec<String>,
    pub annotations: Option<String>,
    pub qualified_name: Option<String>,
}

/// One row of the flattened AST. `file_path` and
/// `language` are not carried here: they are constant for an entire file
/// and live on the batch that groups these rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub node_id: u64,
    pub parent_id: Option<i64>,
    pub r#type: String,
    pub name: Option<String>,
    pub semantic_type: Option<u8>,
    pub flags: Option<u8>,
    pub start_line: Option<u32>,
    pub end_line: Option<u32>,
    pub start_column: Option<u32>,
    pub end_column: Option<u32>,
    pub depth: Option<u32>,
    pub sibling_index: Option<u32>,
    pub children_count: Option<u32>,
    pub descendant_count: Option<u32>,
    pub peek: Option<String>,
    pub native: NativeContext,
}

impl Node {
    #[must_use]
    pub fn signature_type(&self) -> Option<&str> {
        self.native.signature_type.as_deref()
    }

    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.native.parameters
    }

    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        &self.native.modifiers
    }

    #[must_use]
    pub fn annotations(&self) -> Option<&str> {
        self.native.annotations.as_deref()
    }

    #[must_use]
    pub fn qualified_name(&self) -> Option<&str> {
        self.native.qualified_name.as_deref()
    }

    /// True for the root row: `parent_id` is the sentinel, `depth` is 0
    /// when `structure` is populated; the sentinel itself is enough
    /// because a real `parent_id` is never negative.
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self.parent_id, Some(ROOT_PARENT_ID))
    }
}
