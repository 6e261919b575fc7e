// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `parse_ast`: the same flattener and native extractors
//! as `read_ast`, run once over an in-memory source string with a
//! required language and no file resolver. Errors are always thrown —
//! `Options::ignore_errors` has no effect here, since there is no
//! per-file error to tolerate past.

use std::sync::Arc;

use astrow_core::{CoreError, Options};
use astrow_languages::registry::registry;
use astrow_parse::flatten;

use crate::batch::{Row, RowBatch};
use crate::driver::INLINE_PATH;

/// Parse `source` as `language` and return it as one or more
/// [`RowBatch`]es of `Options::batch_size` rows each, same as `read_ast`
/// would for a single file, but without touching the filesystem.
pub fn parse_ast(source: &str, language: &str, options: Options) -> Result<Vec<RowBatch>, CoreError> {
    let adapter = registry().adapter_for(language)?;
    let bytes = source.as_bytes();
    let tree = adapter.parse(bytes)?;
    let nodes = flatten(&tree, bytes, adapter.as_ref(), &options);

    let file_path: Arc<str> = Arc::from(INLINE_PATH);
    let language_name = adapter.language_name();
    let capacity = options.batch_size.max(1);

    let mut batches = Vec::new();
    let mut batch = RowBatch::with_capacity(capacity);
    for node in nodes {
        let row = Row { node, file_path: Arc::clone(&file_path), language: language_name };
        if batch.push(row) {
            batches.push(std::mem::replace(&mut batch, RowBatch::with_capacity(capacity)));
        }
    }
    if !batch.is_empty() {
        batches.push(batch);
    }
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_class_method_produces_expected_rows() {
        let batches = parse_ast("class C { m() { return 0; } }", "javascript", Options::default()).unwrap();
        let rows: Vec<_> = batches.into_iter().flat_map(RowBatch::into_rows).collect();

        let class_row = rows
            .iter()
            .find(|r| r.node.semantic_type == Some(astrow_core::taxonomy::DEFINITION_CLASS))
            .expect("a DEFINITION_CLASS row");
        assert_eq!(class_row.node.name.as_deref(), Some("C"));

        assert!(rows
            .iter()
            .any(|r| r.node.semantic_type == Some(astrow_core::taxonomy::DEFINITION_FUNCTION)
                && r.node.name.as_deref() == Some("m")));

        for row in &rows {
            assert_eq!(row.file_path.as_ref(), INLINE_PATH);
            assert_eq!(row.language, "javascript");
        }
    }

    #[test]
    fn batches_respect_batch_size() {
        let options = Options::default().with_batch_size(3);
        let batches = parse_ast("def f():\n    return 1\n", "python", options).unwrap();
        for batch in &batches[..batches.len().saturating_sub(1)] {
            assert_eq!(batch.len(), 3);
        }
    }

    #[test]
    fn unknown_language_errors() {
        let err = parse_ast("x = 1", "not-a-real-language", Options::default()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownLanguage(_)));
    }
}
