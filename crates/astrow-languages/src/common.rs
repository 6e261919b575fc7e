// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared tree-walk helpers every adapter's `extract_name` builds on top
//! of. Kept free functions, not trait default methods, so each adapter
//! stays inspectable as a flat list of calls.

use tree_sitter::Node;

/// Exact source slice covered by a node, or `""` on invalid UTF-8 at a
/// byte boundary (text slicing is byte-offset based, not char-offset
/// based).
#[must_use]
pub fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// First direct child whose type is exactly `kind`.
#[must_use]
pub fn first_child_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

/// `FIND_IDENTIFIER`: text of the first `"identifier"` child, else `""`.
#[must_use]
pub fn find_identifier<'a>(node: Node<'_>, source: &'a [u8]) -> String {
    first_child_of_kind(node, "identifier")
        .map(|n| node_text(n, source).to_owned())
        .unwrap_or_default()
}

/// `FIND_PROPERTY`: text of the first `"property_identifier"` child.
#[must_use]
pub fn find_property<'a>(node: Node<'_>, source: &'a [u8]) -> String {
    first_child_of_kind(node, "property_identifier")
        .map(|n| node_text(n, source).to_owned())
        .unwrap_or_default()
}

/// `FIND_QUALIFIED_IDENTIFIER`: segments of the first child whose type
/// contains `"qualified"` or `"scoped"`, joined with `separator`; falls
/// back to [`find_identifier`] if no such child exists.
#[must_use]
pub fn find_qualified_identifier<'a>(
    node: Node<'_>,
    source: &'a [u8],
    separator: &str,
) -> String {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind().contains("qualified") || child.kind().contains("scoped") {
            let mut segments = Vec::new();
            let mut seg_cursor = child.walk();
            for seg in child.children(&mut seg_cursor) {
                if seg.kind() == "identifier" {
                    segments.push(node_text(seg, source).to_owned());
                }
            }
            if !segments.is_empty() {
                return segments.join(separator);
            }
            return node_text(child, source).replace("::", separator).replace('.', separator);
        }
    }
    find_identifier(node, source)
}

/// `FIND_CALL_TARGET`: the `"function"`/`"callee"` field of a call node;
/// member-access callees (containing `.`) return `""` so `signature_type`
/// carries the full path instead.
#[must_use]
pub fn find_call_target<'a>(node: Node<'_>, source: &'a [u8]) -> String {
    let target = node
        .child_by_field_name("function")
        .or_else(|| node.child_by_field_name("callee"));
    match target {
        Some(t) if t.kind().contains("member") || t.kind().contains("attribute") || t.kind().contains("field") => {
            String::new()
        }
        Some(t) => node_text(t, source).to_owned(),
        None => String::new(),
    }
}

/// `FIND_IN_DECLARATOR`: descend through declarator-like children (C/C++
/// style) to the innermost identifier.
#[must_use]
pub fn find_in_declarator<'a>(node: Node<'_>, source: &'a [u8]) -> String {
    let mut current = node;
    loop {
        if current.kind() == "identifier" || current.kind() == "field_identifier" {
            return node_text(current, source).to_owned();
        }
        let Some(declarator) = current
            .child_by_field_name("declarator")
            .or_else(|| first_child_of_kind(current, "identifier"))
        else {
            return String::new();
        };
        if declarator.id() == current.id() {
            return String::new();
        }
        current = declarator;
    }
}

/// Does `node` have an implementation body, as opposed to a bare
/// signature (an abstract method, an interface member, a `extern`
/// declaration)? Checked structurally rather than per-type, since the
/// same raw type (e.g. Java's `method_declaration`) can appear both
/// ways depending on the site.
#[must_use]
pub fn has_body(node: Node<'_>) -> bool {
    if node.child_by_field_name("body").is_some() {
        return true;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|c| matches!(c.kind(), "block" | "suite" | "statement_block" | "compound_statement" | "class_body" | "declaration_list"))
}

/// Generic unconfigured-type fallback: any node whose type contains
/// "declaration" or "definition" resolves its name via the first
/// identifier child.
#[must_use]
pub fn declaration_fallback<'a>(node: Node<'_>, source: &'a [u8]) -> String {
    if node.kind().contains("declaration") || node.kind().contains("definition") {
        find_identifier(node, source)
    } else {
        String::new()
    }
}

/// Collect the text of every child matching any of `kinds`, in source
/// order — used by native extractors to gather modifier keywords.
#[must_use]
pub fn collect_children_of_kinds<'a>(node: Node<'_>, source: &'a [u8], kinds: &[&str]) -> Vec<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|c| kinds.contains(&c.kind()))
        .map(|c| node_text(c, source).to_owned())
        .collect()
}
