// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The row batch the driver hands to the SQL host. A
//! [`RowBatch`] is a capacity-preallocated arena of [`Row`]s: preallocate
//! to the configured size, push until full.

use std::sync::Arc;

use astrow_parse::Node;

/// One emitted row: a flattened AST [`Node`] plus the two columns that
/// are constant for a file's node array but not for a whole batch, since
/// a batch may span a file boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub node: Node,
    pub file_path: Arc<str>,
    pub language: &'static str,
}

/// A fixed-capacity group of rows, emitted as soon as it fills or at
/// end-of-file. Rows within a batch are in
/// the same order the driver produced them: resolver order across files,
/// `node_id` order within a file.
#[derive(Debug, Clone, Default)]
pub struct RowBatch {
    rows: Vec<Row>,
    capacity: usize,
}

impl RowBatch {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { rows: Vec::with_capacity(capacity), capacity }
    }

    /// Push a row. Returns `true` if the batch is now at capacity and
    /// should be emitted.
    pub fn push(&mut self, row: Row) -> bool {
        self.rows.push(row);
        self.is_full()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.rows.len() >= self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl IntoIterator for RowBatch {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
