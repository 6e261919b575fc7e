// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The universal structural invariants checked against `parse_ast`'s
//! output, which exercises the same flattener `read_ast` does without
//! needing a filesystem fixture per test.

use astrow_core::taxonomy;
use astrow_core::Options;
use astrow_engine::{parse_ast, Row, RowBatch};

fn rows(source: &str, language: &str, options: Options) -> Vec<Row> {
    parse_ast(source, language, options)
        .expect("parse succeeds")
        .into_iter()
        .flat_map(RowBatch::into_rows)
        .collect()
}

const PY_FUNC: &str = "def f(a, b):\n    if a:\n        return a\n    return b\n";

#[test]
fn p1_node_ids_are_contiguous_in_emission_order() {
    let rows = rows(PY_FUNC, "python", Options::default());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.node.node_id, i as u64);
    }
}

#[test]
fn p2_exactly_one_root() {
    let rows = rows(PY_FUNC, "python", Options::default());
    let roots: Vec<_> = rows.iter().filter(|r| r.node.is_root()).collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].node.node_id, 0);
    assert_eq!(roots[0].node.depth, Some(0));
}

#[test]
fn p3_parent_precedes_child_and_depth_increments() {
    let rows = rows(PY_FUNC, "python", Options::default());
    for row in rows.iter().filter(|r| !r.node.is_root()) {
        let parent_id = row.node.parent_id.unwrap();
        let parent = rows.iter().find(|p| p.node.node_id as i64 == parent_id).expect("parent row exists");
        assert!(parent.node.node_id < row.node.node_id);
        assert_eq!(parent.node.depth.unwrap() + 1, row.node.depth.unwrap());
    }
}

#[test]
fn p4_descendant_interval_matches_actual_descendants() {
    let rows = rows(PY_FUNC, "python", Options::default());
    for row in &rows {
        let descendants = row.node.descendant_count.unwrap() as u64;
        let expected: Vec<u64> = (row.node.node_id + 1..=row.node.node_id + descendants).collect();
        let actual: Vec<u64> = rows
            .iter()
            .filter(|n| n.node.node_id > row.node.node_id)
            .take_while(|n| n.node.depth.unwrap() > row.node.depth.unwrap())
            .map(|n| n.node.node_id)
            .collect();
        assert_eq!(actual, expected, "node {} descendant interval", row.node.node_id);
    }
}

#[test]
fn p5_root_descendant_count_plus_one_equals_total() {
    let rows = rows(PY_FUNC, "python", Options::default());
    let root = rows.iter().find(|r| r.node.is_root()).unwrap();
    assert_eq!(1 + root.node.descendant_count.unwrap() as usize, rows.len());
}

#[test]
fn p6_children_descendant_counts_sum_to_parent() {
    let rows = rows(PY_FUNC, "python", Options::default());
    for parent in &rows {
        let sum: u32 = rows
            .iter()
            .filter(|c| c.node.parent_id == Some(parent.node.node_id as i64))
            .map(|c| 1 + c.node.descendant_count.unwrap())
            .sum();
        assert_eq!(sum, parent.node.descendant_count.unwrap());
    }
}

#[test]
fn p7_line_ranges_are_ordered_and_nested_in_parent() {
    let rows = rows(PY_FUNC, "python", Options::default().with_source(astrow_core::SourceLevel::Full));
    for row in &rows {
        assert!(row.node.start_line.unwrap() <= row.node.end_line.unwrap());
        if let Some(parent_id) = row.node.parent_id {
            if parent_id >= 0 {
                let parent = rows.iter().find(|p| p.node.node_id as i64 == parent_id).unwrap();
                assert!(parent.node.start_line.unwrap() <= row.node.start_line.unwrap());
                assert!(row.node.end_line.unwrap() <= parent.node.end_line.unwrap());
            }
        }
    }
}

#[test]
fn p8_is_construct_false_for_punctuation_true_for_definitions() {
    let rows = rows(PY_FUNC, "python", Options::default());
    let punctuation = rows.iter().find(|r| r.node.r#type == ":").expect("a colon token");
    assert!(!taxonomy::is_construct(punctuation.node.flags.unwrap()));

    let function = rows.iter().find(|r| r.node.r#type == "function_definition").unwrap();
    assert!(taxonomy::is_construct(function.node.flags.unwrap()));
}

#[test]
fn p9_repeated_parses_are_identical() {
    let first = rows(PY_FUNC, "python", Options::default());
    let second = rows(PY_FUNC, "python", Options::default());
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.node, b.node);
    }
}

#[test]
fn p10_detect_from_path_matches_extension() {
    let registry = astrow_languages::registry::registry();
    assert_eq!(registry.detect_from_path(std::path::Path::new("a.py")), Some("python"));
    assert_eq!(registry.detect_from_path(std::path::Path::new("a.rs")), Some("rust"));
    assert_eq!(registry.detect_from_path(std::path::Path::new("noext")), None);
}

#[test]
fn p11_is_function_definition_matches_exactly_function_rows() {
    let rows = rows(PY_FUNC, "python", Options::default());
    for row in &rows {
        let by_predicate = taxonomy::is_function_definition(row.node.semantic_type.unwrap());
        let by_type = row.node.r#type == "function_definition";
        assert_eq!(by_predicate, by_type, "row {:?}", row.node.r#type);
    }
}
