// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete worked scenarios and option-law checks across languages and
//! `Options` settings.

use std::fs;

use astrow_core::taxonomy::{self, DEFINITION_CLASS, DEFINITION_FUNCTION, FLOW_JUMP, LITERAL_NUMBER};
use astrow_core::{ContextLevel, CoreError, Options};
use astrow_engine::{parse_ast, read_ast, Row, RowBatch};
use astrow_fs::Patterns;

fn flatten_batches(batches: Vec<RowBatch>) -> Vec<Row> {
    batches.into_iter().flat_map(RowBatch::into_rows).collect()
}

fn read_all(patterns: impl Into<Patterns>, language: Option<&str>, options: Options) -> Result<Vec<Row>, CoreError> {
    let reader = read_ast(patterns, language, options)?;
    let mut rows = Vec::new();
    for batch in reader {
        rows.extend(batch?.into_rows());
    }
    Ok(rows)
}

#[test]
fn s1_single_function_python_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "def f(): return 1\n").unwrap();

    let rows = read_all(path.to_str().unwrap(), None, Options::default()).unwrap();

    let module = rows.iter().find(|r| r.node.is_root()).expect("a root row");
    assert_eq!(module.node.depth, Some(0));
    assert!(module.node.descendant_count.unwrap() >= 5);

    let function = rows
        .iter()
        .find(|r| r.node.semantic_type == Some(DEFINITION_FUNCTION))
        .expect("a function_definition row");
    assert_eq!(function.node.depth, Some(1));
    assert_eq!(function.node.name.as_deref(), Some("f"));
    assert!(function.node.children_count.unwrap() >= 3);

    assert!(rows.iter().any(|r| r.node.semantic_type == Some(FLOW_JUMP)));
    assert!(rows.iter().any(|r| r.node.semantic_type == Some(LITERAL_NUMBER)));
}

#[test]
fn s2_javascript_class_method_via_parse_ast() {
    let rows = flatten_batches(
        parse_ast("class C { m() { return 0; } }", "javascript", Options::default()).unwrap(),
    );

    let classes: Vec<_> = rows.iter().filter(|r| r.node.semantic_type == Some(DEFINITION_CLASS)).collect();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].node.name.as_deref(), Some("C"));

    assert!(rows
        .iter()
        .any(|r| r.node.semantic_type == Some(DEFINITION_FUNCTION) && r.node.name.as_deref() == Some("m")));

    let class_row = classes[0];
    let sum: u32 = rows
        .iter()
        .filter(|c| c.node.parent_id == Some(class_row.node.node_id as i64))
        .map(|c| 1 + c.node.descendant_count.unwrap())
        .sum();
    assert_eq!(sum, class_row.node.descendant_count.unwrap());
}

#[test]
fn s3_duplicate_pattern_list_deduplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "x = 1\n").unwrap();
    let path_str = path.to_str().unwrap().to_owned();

    let once = read_all(vec![path_str.clone()], None, Options::default()).unwrap();
    let twice = read_all(vec![path_str.clone(), path_str], None, Options::default()).unwrap();

    assert_eq!(once.len(), twice.len());
}

#[test]
fn s4_missing_file_errors_unless_ignored() {
    let missing = "/nonexistent/definitely/missing.py";

    let err = read_ast(missing, None, Options::default()).unwrap_err();
    assert!(matches!(err, CoreError::FileNotFound(_)));

    let rows = read_all(missing, None, Options::default().with_ignore_errors(true)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn s5_syntax_error_surfaces_parser_error_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.py");
    fs::write(&path, "def f(:\n").unwrap();

    let rows = read_all(path.to_str().unwrap(), None, Options::default()).unwrap();

    assert!(rows
        .iter()
        .any(|r| r.node.r#type == "ERROR" && r.node.semantic_type == Some(taxonomy::PARSER_ERROR)));

    for row in &rows {
        assert!(row.node.start_line.unwrap() <= row.node.end_line.unwrap());
    }
}

#[test]
fn s6_batches_chain_node_ids_across_boundaries() {
    let mut source = String::from("x0 = 0\n");
    for i in 1..2000 {
        source.push_str(&format!("x{i} = {i}\n"));
    }

    let options = Options::default().with_batch_size(100).with_context(ContextLevel::NodeTypesOnly);
    let batches = parse_ast(&source, "python", options).unwrap();

    assert!(batches.len() > 1);
    for pair in batches.windows(2) {
        let last = pair[0].rows().last().unwrap();
        let first = pair[1].rows().first().unwrap();
        assert_eq!(last.node.node_id + 1, first.node.node_id);
    }
}

#[test]
fn l1_ignore_errors_drops_only_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.py");
    fs::write(&good, "x = 1\n").unwrap();
    let bad = dir.path().join("missing.py");

    let pattern = vec![good.to_str().unwrap().to_owned(), bad.to_str().unwrap().to_owned()];
    let mixed = read_all(pattern, None, Options::default().with_ignore_errors(true)).unwrap();
    let good_only = read_all(good.to_str().unwrap(), None, Options::default().with_ignore_errors(true)).unwrap();

    assert_eq!(mixed.len(), good_only.len());
}

#[test]
fn l2_duplicate_patterns_have_no_effect_on_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.py");
    fs::write(&path, "def f(): return 1\n").unwrap();
    let pattern = path.to_str().unwrap().to_owned();

    let single = read_all(pattern.clone(), None, Options::default()).unwrap();
    let duplicated = read_all(vec![pattern.clone(), pattern], None, Options::default()).unwrap();

    assert_eq!(single.len(), duplicated.len());
}

#[test]
fn l3_context_levels_are_monotonically_nested() {
    let source = "def f(a): return a\n";
    let none = flatten_batches(parse_ast(source, "python", Options::default().with_context(ContextLevel::None)).unwrap());
    let node_types = flatten_batches(
        parse_ast(source, "python", Options::default().with_context(ContextLevel::NodeTypesOnly)).unwrap(),
    );
    let normalized =
        flatten_batches(parse_ast(source, "python", Options::default().with_context(ContextLevel::Normalized)).unwrap());
    let native = flatten_batches(parse_ast(source, "python", Options::default().with_context(ContextLevel::Native)).unwrap());

    assert!(none.iter().all(|r| r.node.semantic_type.is_none()));
    assert!(node_types.iter().all(|r| r.node.name.is_none()));
    assert!(node_types.iter().any(|r| r.node.semantic_type.is_some()));
    assert!(normalized.iter().any(|r| r.node.name.is_some()));
    assert!(normalized.iter().all(|r| r.node.native.signature_type.is_none() && r.node.native.qualified_name.is_none()));
    assert!(native.iter().any(|r| r.node.native.signature_type.is_some() || r.node.native.qualified_name.is_some()));

    assert_eq!(none.len(), node_types.len());
    assert_eq!(node_types.len(), normalized.len());
    assert_eq!(normalized.len(), native.len());
}

#[test]
fn l4_parse_ast_matches_read_ast_on_equivalent_file() {
    let source = "def f(): return 1\n";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, source).unwrap();

    let from_source = flatten_batches(parse_ast(source, "python", Options::default()).unwrap());
    let from_file = read_all(path.to_str().unwrap(), None, Options::default()).unwrap();

    assert_eq!(from_source.len(), from_file.len());
    for (a, b) in from_source.iter().zip(from_file.iter()) {
        assert_eq!(a.node.node_id, b.node.node_id);
        assert_eq!(a.node.r#type, b.node.r#type);
        assert_eq!(a.node.semantic_type, b.node.semantic_type);
        assert_eq!(a.node.start_line, b.node.start_line);
        assert_eq!(a.node.end_line, b.node.end_line);
    }
}
