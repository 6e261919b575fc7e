// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rust adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, find_qualified_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_rust::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "source_file" => Cfg::bare(tm::DEFINITION_MODULE),
        "mod_item" => Cfg::named(tm::DEFINITION_MODULE, Name::FindIdentifier),
        "function_item" | "closure_expression" => {
            Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams)
        }
        "struct_item" | "enum_item" | "trait_item" | "union_item" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance)
        }
        "impl_item" => Cfg::named(tm::DEFINITION_CLASS, Name::FindQualifiedIdentifier),
        "let_declaration" | "const_item" | "static_item" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType)
        }
        "parameters" | "closure_parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "macro_invocation" => Cfg::named(tm::CALL_MACRO, Name::FindIdentifier),
        "identifier" | "field_identifier" | "type_identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "scoped_identifier" => Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier),
        "field_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string_literal" | "raw_string_literal" => Cfg::bare(tm::LITERAL_STRING),
        "integer_literal" | "float_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean_literal" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "array_expression" | "array_type" => Cfg::bare(tm::COLLECTION_ARRAY),
        "struct_expression" => Cfg::bare(tm::COLLECTION_OBJECT),
        "tuple_expression" | "tuple_type" => Cfg::bare(tm::COLLECTION_TUPLE),
        "use_declaration" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "if_expression" | "if_let_expression" | "match_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_expression" | "while_expression" | "while_let_expression" | "loop_expression" => Cfg::bare(tm::FLOW_LOOP),
        "return_expression" => Cfg::bare(tm::FLOW_JUMP),
        "break_expression" | "continue_expression" => Cfg::bare(tm::FLOW_JUMP),
        "try_expression" => Cfg::bare(tm::EXCEPTION_TRY),
        "line_comment" | "block_comment" => Cfg::bare(tm::COMMENT_LINE),
        "attribute_item" | "inner_attribute_item" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::FindIdentifier),
        "block" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" | "compound_assignment_expr" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "assignment_expression" => Cfg::bare(tm::EXPRESSION_ASSIGNMENT),
        "generic_type" | "reference_type" | "primitive_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        "async" | "await_expression" => Cfg::bare(tm::CONCURRENCY_ASYNC),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_item" | "struct_item" | "enum_item" | "trait_item" | "union_item" | "mod_item" => {
            find_identifier(node, source)
        }
        "impl_item" => node
            .child_by_field_name("type")
            .map(|n| node_text(n, source).to_owned())
            .unwrap_or_default(),
        "scoped_identifier" => find_qualified_identifier(node, source, "::"),
        _ => declaration_fallback(node, source),
    }
}

/// `pub`, `pub(crate)`, and friends precede the item; a leading `pub`
/// keyword child marks it public.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|c| c.kind() == "visibility_modifier" && node_text(c, source).starts_with("pub"))
}

crate::macros::define_adapter! {
    RustAdapter,
    name = "rust",
    aliases = ["rs"],
    extensions = ["rs"],
    language_fn = ts_language,
    config_fn = node_config,
    name_fn = extract_name,
    visibility_fn = is_public,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::LanguageAdapter;

    #[test]
    fn public_function_item() {
        let adapter = RustAdapter;
        let source = b"pub fn add(a: i32, b: i32) -> i32 { a + b }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree.root_node().child(0).expect("function_item");
        assert_eq!(func.kind(), "function_item");
        assert_eq!(extract_name(func, source), "add");
        assert!(is_public(func, source));
    }
}
