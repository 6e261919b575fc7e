// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Native context extractors. Keyed statically by
//! [`NativeStrategy`] so the flattener invokes exactly one per node;
//! every extractor here follows the same never-throw contract as the
//! `astrow-languages::common` helpers it builds on — grammar shapes that
//! don't match the expected pattern just leave the relevant field `None`
//! or empty, never panic.

use astrow_core::NativeStrategy;
use astrow_languages::common::node_text;
use tree_sitter::Node;

use crate::node::{NativeContext, Parameter};

/// Keywords tree-sitter tokenizes as anonymous nodes whose `kind()` is
/// the keyword text itself; checked against direct children to recover
/// `modifiers` without per-grammar field names.
const MODIFIER_KEYWORDS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "async", "const", "final", "abstract",
    "override", "virtual", "readonly", "sealed", "open", "suspend", "export", "default", "native",
    "synchronized", "var", "let", "val", "mut",
];

/// Dispatch to the extractor for `strategy`. `own_name` is the node's
/// already-extracted `name` (from [`astrow_languages::LanguageAdapter::extract_name`]),
/// reused here to build `qualified_name` without re-deriving it.
#[must_use]
pub fn extract<'a>(strategy: NativeStrategy, node: Node<'a>, source: &'a [u8], own_name: &str) -> NativeContext {
    match strategy {
        NativeStrategy::None => NativeContext::default(),
        NativeStrategy::NodeText => NativeContext { signature_type: Some(node_text(node, source).to_owned()), ..Default::default() },
        NativeStrategy::FunctionWithParams
        | NativeStrategy::MethodDefinition
        | NativeStrategy::ConstructorDefinition
        | NativeStrategy::GenericFunction => function_with_params(node, source, own_name),
        NativeStrategy::FunctionWithDecorators => function_with_decorators(node, source, own_name),
        NativeStrategy::ArrowFunction | NativeStrategy::AsyncFunction => function_with_params(node, source, own_name),
        NativeStrategy::ClassWithInheritance | NativeStrategy::InterfaceDefinition | NativeStrategy::EnumDefinition => {
            class_with_inheritance(node, source, own_name)
        }
        NativeStrategy::ClassWithMethods => class_with_methods(node, source, own_name),
        NativeStrategy::VariableWithType => variable_with_type(node, source),
        NativeStrategy::ImportStatement => import_statement(node, source, own_name),
        NativeStrategy::FunctionCall => function_call(node, source, own_name),
    }
}

fn function_with_params(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    NativeContext {
        signature_type: return_type(node, source),
        parameters: parameters(node, source),
        modifiers: modifiers(node, source),
        annotations: None,
        qualified_name: qualified_name(node, source, own_name),
    }
}

fn function_with_decorators(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    let mut ctx = function_with_params(node, source, own_name);
    ctx.annotations = decorators(node, source);
    ctx
}

fn class_with_inheritance(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    NativeContext {
        signature_type: Some(class_kind(node)),
        parameters: Vec::new(),
        modifiers: inheritance_clauses(node, source),
        annotations: None,
        qualified_name: qualified_name(node, source, own_name),
    }
}

fn class_with_methods(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    let mut ctx = class_with_inheritance(node, source, own_name);
    ctx.modifiers.extend(modifiers(node, source));
    ctx
}

fn variable_with_type(node: Node<'_>, source: &[u8]) -> NativeContext {
    NativeContext {
        signature_type: node
            .child_by_field_name("type")
            .map(|n| node_text(n, source).to_owned()),
        parameters: Vec::new(),
        modifiers: modifiers(node, source),
        annotations: None,
        qualified_name: None,
    }
}

fn import_statement(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    NativeContext {
        signature_type: Some(node_text(node, source).to_owned()),
        parameters: Vec::new(),
        modifiers: Vec::new(),
        annotations: None,
        qualified_name: qualified_name(node, source, own_name),
    }
}

fn function_call(node: Node<'_>, source: &[u8], own_name: &str) -> NativeContext {
    NativeContext {
        signature_type: Some(node_text(node, source).to_owned()),
        parameters: call_arguments(node, source),
        modifiers: Vec::new(),
        annotations: None,
        qualified_name: qualified_name(node, source, own_name),
    }
}

fn find_parameter_list(node: Node<'_>) -> Option<Node<'_>> {
    node.child_by_field_name("parameters").or_else(|| {
        let mut cursor = node.walk();
        node.children(&mut cursor).find(|c| {
            matches!(
                c.kind(),
                "parameters" | "parameter_list" | "formal_parameters" | "function_value_parameters" | "class_parameters"
            )
        })
    })
}

fn first_identifier_descendant(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind().contains("identifier") {
        return Some(node);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_identifier_descendant)
}

fn parameters(node: Node<'_>, source: &[u8]) -> Vec<Parameter> {
    let Some(list) = find_parameter_list(node) else { return Vec::new() };
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|c| !c.kind().contains("comment"))
        .map(|param| {
            let name = param
                .child_by_field_name("name")
                .or_else(|| first_identifier_descendant(param))
                .map(|n| node_text(n, source).to_owned())
                .unwrap_or_else(|| node_text(param, source).to_owned());
            let type_ = param.child_by_field_name("type").map(|n| node_text(n, source).to_owned());
            Parameter { name, r#type: type_ }
        })
        .collect()
}

fn call_arguments(node: Node<'_>, source: &[u8]) -> Vec<Parameter> {
    let args = node.child_by_field_name("arguments").or_else(|| {
        let mut cursor = node.walk();
        node.children(&mut cursor).find(|c| c.kind().contains("argument"))
    });
    let Some(args) = args else { return Vec::new() };
    let mut cursor = args.walk();
    args.named_children(&mut cursor)
        .map(|arg| Parameter { name: node_text(arg, source).to_owned(), r#type: None })
        .collect()
}

fn return_type(node: Node<'_>, source: &[u8]) -> Option<String> {
    node.child_by_field_name("return_type")
        .or_else(|| node.child_by_field_name("type"))
        .map(|n| node_text(n, source).to_owned())
}

fn modifiers(node: Node<'_>, source: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if MODIFIER_KEYWORDS.contains(&child.kind()) {
            out.push(node_text(child, source).to_owned());
        } else if matches!(child.kind(), "modifiers" | "modifier") {
            out.extend(node_text(child, source).split_whitespace().map(str::to_owned));
        }
    }
    out
}

fn inheritance_clauses(node: Node<'_>, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|c| {
            matches!(
                c.kind(),
                "superclass"
                    | "extends_clause"
                    | "implements_clause"
                    | "class_heritage"
                    | "base_class_clause"
                    | "base_list"
                    | "trait_list"
            )
        })
        .map(|c| node_text(c, source).to_owned())
        .collect()
}

fn decorators(node: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let texts: Vec<String> = node
        .children(&mut cursor)
        .filter(|c| c.kind().contains("decorator") || c.kind().contains("attribute_item"))
        .map(|c| node_text(c, source).to_owned())
        .collect();
    if texts.is_empty() { None } else { Some(texts.join("\n")) }
}

fn class_kind(node: Node<'_>) -> String {
    match node.kind() {
        k if k.contains("interface") => "interface",
        k if k.contains("trait") => "trait",
        k if k.contains("enum") => "enum",
        k if k.contains("struct") => "struct",
        k if k.contains("abstract") => "abstract_class",
        _ => "class",
    }
    .to_owned()
}

const SCOPE_LIKE: &[&str] = &[
    "class_declaration",
    "class_definition",
    "class_body",
    "object_declaration",
    "object_definition",
    "interface_declaration",
    "module",
    "namespace_declaration",
    "mod_item",
    "impl_item",
    "trait_definition",
    "struct_item",
];

fn scope_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    first_identifier_descendant(node).map(|n| node_text(n, source).to_owned())
}

/// `qualified_name`, populated with `.`-joined ancestor scope names for
/// CLASS_WITH_INHERITANCE/FUNCTION_WITH_PARAMS(methods)/IMPORT_STATEMENT/
/// CALL nodes; `None` when the node has no name of its own.
fn qualified_name(node: Node<'_>, source: &[u8], own_name: &str) -> Option<String> {
    if own_name.is_empty() {
        return None;
    }
    let mut segments = vec![own_name.to_owned()];
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if SCOPE_LIKE.contains(&ancestor.kind()) {
            if let Some(name) = scope_name(ancestor, source) {
                segments.push(name);
            }
        }
        current = ancestor.parent();
    }
    segments.reverse();
    Some(segments.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_python(source: &[u8]) -> tree_sitter::Tree {
        let language = tree_sitter::Language::from(tree_sitter_python::LANGUAGE);
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&language).unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn function_with_params_extracts_positional_parameters() {
        let source = b"def add(a, b):\n    return a + b\n";
        let tree = parse_python(source);
        let func = tree
            .root_node()
            .named_child(0)
            .expect("function_definition");
        let ctx = function_with_params(func, source, "add");
        assert_eq!(ctx.parameters.len(), 2);
        assert_eq!(ctx.parameters[0].name, "a");
        assert_eq!(ctx.parameters[0].r#type, None);
    }

    #[test]
    fn function_call_captures_full_expression_text() {
        let source = b"print(1, 2)\n";
        let tree = parse_python(source);
        let call = tree
            .root_node()
            .named_child(0)
            .and_then(|n| n.named_child(0))
            .expect("call");
        let ctx = function_call(call, source, "print");
        assert_eq!(ctx.signature_type.as_deref(), Some("print(1, 2)"));
        assert_eq!(ctx.parameters.len(), 2);
    }

    #[test]
    fn qualified_name_is_none_for_empty_own_name() {
        let source = b"x = 1\n";
        let tree = parse_python(source);
        assert_eq!(qualified_name(tree.root_node(), source, ""), None);
    }
}
