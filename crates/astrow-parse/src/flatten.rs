// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tree flattener: a depth-first pre-order walk of a
//! `tree_sitter::Tree` driven by an explicit stack of open ancestor
//! frames, using cursor navigation (`goto_first_child`/`goto_next_sibling`/
//! `goto_parent` rather than recursion, so arbitrarily deep trees don't
//! grow the Rust call stack).

use astrow_core::{NodeConfig, Options, SourceLevel};
use astrow_languages::LanguageAdapter;
use tree_sitter::Tree;

use crate::native;
use crate::node::{NativeContext, Node, ROOT_PARENT_ID};
use crate::peek;

/// Per-open-ancestor accumulator, tracked alongside (not inside) the row
/// so `children_count`/`descendant_count` are always computed, even when
/// `Options::structure` asks the projection to hide them — cheap ints,
/// and needed internally regardless to walk correctly.
struct Frame {
    row: usize,
    children: u32,
    descendants: u32,
}

/// Turn `tree` into the flat row array for one file.
/// Never fails: a malformed parse (ERROR/MISSING nodes) still produces a
/// valid flat tree with contiguous ids, a single root, and consistent
/// parent/child/descendant counts — the flattener never throws for shape
/// reasons.
#[must_use]
pub fn flatten(tree: &Tree, source: &[u8], adapter: &dyn LanguageAdapter, options: &Options) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut counts: Vec<(u32, u32)> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut cursor = tree.walk();

    push_row(&mut nodes, &mut counts, &mut stack, cursor.node(), source, adapter, options);

    loop {
        if cursor.goto_first_child() {
            push_row(&mut nodes, &mut counts, &mut stack, cursor.node(), source, adapter, options);
            continue;
        }
        close_top(&mut counts, &mut stack);
        loop {
            if cursor.goto_next_sibling() {
                push_row(&mut nodes, &mut counts, &mut stack, cursor.node(), source, adapter, options);
                break;
            }
            if cursor.goto_parent() {
                close_top(&mut counts, &mut stack);
                continue;
            }
            project_counts(&mut nodes, &counts, options);
            return nodes;
        }
    }
}

/// Build and push the row for `node`, then open a frame for it so its own
/// children (if any) can accumulate into `children`/`descendants`.
#[allow(clippy::too_many_arguments)]
fn push_row(
    nodes: &mut Vec<Node>,
    counts: &mut Vec<(u32, u32)>,
    stack: &mut Vec<Frame>,
    ts_node: tree_sitter::Node<'_>,
    source: &[u8],
    adapter: &dyn LanguageAdapter,
    options: &Options,
) {
    let row = nodes.len();
    let parent_id = stack.last().map_or(ROOT_PARENT_ID, |f| f.row as i64);
    let depth = stack.len() as u32;
    let sibling_index = stack.last().map_or(0, |f| f.children);

    if let Some(top) = stack.last_mut() {
        top.children += 1;
    }

    nodes.push(build_node(ts_node, row, parent_id, depth, sibling_index, source, adapter, options));
    counts.push((0, 0));
    stack.push(Frame { row, children: 0, descendants: 0 });
}

/// Finalize the frame on top of the stack into `counts`, then fold its
/// size into its parent's running descendant total — computed by
/// stack-accumulation during the walk rather than a second pass.
fn close_top(counts: &mut [(u32, u32)], stack: &mut Vec<Frame>) {
    let Some(finished) = stack.pop() else { return };
    counts[finished.row] = (finished.children, finished.descendants);
    if let Some(parent) = stack.last_mut() {
        parent.descendants += 1 + finished.descendants;
    }
}

/// Copy the accumulated counts into each row, respecting
/// `Options::structure`'s column-availability setting.
fn project_counts(nodes: &mut [Node], counts: &[(u32, u32)], options: &Options) {
    if !options.structure.wants_full() {
        return;
    }
    for (node, &(children, descendants)) in nodes.iter_mut().zip(counts) {
        node.children_count = Some(children);
        node.descendant_count = Some(descendants);
    }
}

#[allow(clippy::too_many_arguments)]
fn build_node(
    ts_node: tree_sitter::Node<'_>,
    row: usize,
    parent_id: i64,
    depth: u32,
    sibling_index: u32,
    source: &[u8],
    adapter: &dyn LanguageAdapter,
    options: &Options,
) -> Node {
    let structure = options.structure;
    let src_level = options.source;
    let context = options.context;

    let raw_type = ts_node.kind();
    let config = resolve_config(ts_node, adapter, raw_type);

    let (semantic_type, flags) = if context.wants_semantic_type() {
        let mut flags = config.flags;
        if astrow_core::taxonomy::is_definition(config.semantic_type)
            && astrow_languages::common::has_body(ts_node)
        {
            flags |= astrow_core::taxonomy::IS_EMBODIED;
        }
        (Some(config.semantic_type), Some(flags))
    } else {
        (None, None)
    };

    let name = if context.wants_name() {
        let extracted = adapter.extract_name(ts_node, source);
        if extracted.is_empty() { None } else { Some(extracted) }
    } else {
        None
    };

    let native = if context.wants_native() && config.native_strategy != astrow_core::NativeStrategy::None {
        native::extract(config.native_strategy, ts_node, source, name.as_deref().unwrap_or(""))
    } else {
        NativeContext::default()
    };

    let (start_line, end_line, start_column, end_column) = location(ts_node, src_level);

    let peek = peek::extract(ts_node, source, options.peek_mode, options.peek_size);

    let parent_id_out = structure.wants_parent().then_some(parent_id);
    let depth_out = structure.wants_parent().then_some(depth);
    let sibling_out = structure.wants_full().then_some(sibling_index);
    // children_count/descendant_count are filled in later by project_counts
    // once the whole subtree has been walked; None here is a placeholder
    // that project_counts overwrites row-by-row when structure == Full.
    let (children_count, descendant_count) = (None, None);

    Node {
        node_id: row as u64,
        parent_id: parent_id_out,
        r#type: raw_type.to_owned(),
        name,
        semantic_type,
        flags,
        start_line,
        end_line,
        start_column,
        end_column,
        depth: depth_out,
        sibling_index: sibling_out,
        children_count,
        descendant_count,
        peek,
        native,
    }
}

fn resolve_config(ts_node: tree_sitter::Node<'_>, adapter: &dyn LanguageAdapter, raw_type: &str) -> NodeConfig {
    if ts_node.is_error() {
        return NodeConfig::bare(astrow_core::taxonomy::PARSER_ERROR).with_flags(0);
    }
    if ts_node.is_missing() {
        return NodeConfig::bare(astrow_core::taxonomy::PARSER_MISSING).with_flags(0);
    }
    adapter.node_config(raw_type).unwrap_or_else(NodeConfig::default_syntax)
}

fn location(ts_node: tree_sitter::Node<'_>, src_level: SourceLevel) -> (Option<u32>, Option<u32>, Option<u32>, Option<u32>) {
    if !src_level.wants_lines() {
        return (None, None, None, None);
    }
    let start = ts_node.start_position();
    let end = ts_node.end_position();
    let start_line = Some(start.row as u32 + 1);
    let end_line = Some(end.row as u32 + 1);
    if src_level.wants_columns() {
        (start_line, end_line, Some(start.column as u32 + 1), Some(end.column as u32 + 1))
    } else {
        (start_line, end_line, None, None)
    }
}

#[cfg(test)]
mod tests {
    use astrow_core::{ContextLevel, SourceLevel, StructureLevel};
    use astrow_languages::adapters::python::PythonAdapter;

    use super::*;

    fn flatten_python(source: &[u8], options: &Options) -> Vec<Node> {
        let adapter = PythonAdapter;
        let tree = adapter.parse(source).expect("parse succeeds");
        flatten(&tree, source, &adapter, options)
    }

    #[test]
    fn root_has_sentinel_parent_and_depth_zero() {
        let nodes = flatten_python(b"x = 1\n", &Options::default());
        assert_eq!(nodes[0].node_id, 0);
        assert_eq!(nodes[0].parent_id, Some(ROOT_PARENT_ID));
        assert_eq!(nodes[0].depth, Some(0));
    }

    #[test]
    fn node_ids_are_contiguous_preorder() {
        let nodes = flatten_python(b"def f():\n    return 1\n", &Options::default());
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.node_id, i as u64);
        }
    }

    #[test]
    fn descendant_interval_matches_actual_descendants() {
        let nodes = flatten_python(b"def f(a, b):\n    return a + b\n", &Options::default());
        for node in &nodes {
            let descendants = u64::from(node.descendant_count.unwrap());
            let expected: Vec<u64> = (node.node_id + 1..=node.node_id + descendants).collect();

            let mut actual = Vec::new();
            for other in nodes.iter().filter(|n| n.node_id > node.node_id) {
                if other.depth.unwrap() <= node.depth.unwrap() {
                    break;
                }
                actual.push(other.node_id);
            }
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn children_count_sums_to_descendant_count() {
        let nodes = flatten_python(b"def f(a, b):\n    return a + b\n", &Options::default());
        for parent in &nodes {
            let mut sum = 0u32;
            for child in nodes.iter().filter(|n| n.parent_id == Some(parent.node_id as i64)) {
                sum += 1 + child.descendant_count.unwrap();
            }
            assert_eq!(sum, parent.descendant_count.unwrap());
        }
    }

    #[test]
    fn structure_none_hides_tree_shape_columns() {
        let options = Options::default().with_structure(StructureLevel::None);
        let nodes = flatten_python(b"x = 1\n", &options);
        assert!(nodes.iter().all(|n| n.parent_id.is_none() && n.depth.is_none()));
    }

    #[test]
    fn context_none_hides_semantic_columns() {
        let options = Options::default().with_context(ContextLevel::None);
        let nodes = flatten_python(b"def f(): return 1\n", &options);
        assert!(nodes.iter().all(|n| n.semantic_type.is_none() && n.name.is_none()));
    }

    #[test]
    fn source_lines_omits_columns() {
        let options = Options::default().with_source(SourceLevel::Lines);
        let nodes = flatten_python(b"x = 1\n", &options);
        assert!(nodes.iter().all(|n| n.start_column.is_none()));
        assert!(nodes.iter().all(|n| n.start_line.is_some()));
    }

    #[test]
    fn error_node_gets_parser_error_category() {
        let nodes = flatten_python(b"def f(:\n", &Options::default());
        assert!(nodes.iter().any(|n| {
            n.semantic_type == Some(astrow_core::taxonomy::PARSER_ERROR) || n.r#type == "ERROR"
        }));
    }

    #[test]
    fn function_definition_carries_native_context() {
        let nodes = flatten_python(b"def add(a, b):\n    return a + b\n", &Options::default());
        let func = nodes
            .iter()
            .find(|n| n.r#type == "function_definition")
            .expect("function_definition row");
        assert_eq!(func.name.as_deref(), Some("add"));
        assert_eq!(func.parameters().len(), 2);
    }

    #[test]
    fn function_with_a_suite_is_embodied() {
        let nodes = flatten_python(b"def add(a, b):\n    return a + b\n", &Options::default());
        let func = nodes.iter().find(|n| n.r#type == "function_definition").unwrap();
        assert!(astrow_core::taxonomy::is_embodied(func.flags.unwrap()));
    }
}
