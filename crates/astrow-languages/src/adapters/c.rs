// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, find_in_declarator, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_c::LANGUAGE)
}

pub(crate) fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "translation_unit" => Cfg::bare(tm::DEFINITION_MODULE),
        "function_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindInDeclarator, Native::FunctionWithParams),
        "declaration" | "init_declarator" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindInDeclarator, Native::VariableWithType)
        }
        "struct_specifier" | "union_specifier" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance)
        }
        "enum_specifier" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::EnumDefinition),
        "parameter_list" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "field_identifier" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::NodeText),
        "field_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string_literal" => Cfg::bare(tm::LITERAL_STRING),
        "number_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "char_literal" => Cfg::bare(tm::LITERAL_STRING),
        "compound_literal_expression" | "initializer_list" => Cfg::bare(tm::COLLECTION_ARRAY),
        "preproc_include" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "if_statement" | "conditional_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "while_statement" | "do_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" | "goto_statement" => Cfg::bare(tm::FLOW_JUMP),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "compound_statement" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" | "sizeof_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "assignment_expression" => Cfg::bare(tm::EXPRESSION_ASSIGNMENT),
        "pointer_declarator" | "array_declarator" | "primitive_type" | "type_identifier" => {
            Cfg::named(tm::TYPE_REFERENCE, Name::NodeText)
        }
        _ => return None,
    })
}

pub(crate) fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_definition" | "declaration" | "init_declarator" => find_in_declarator(node, source),
        "struct_specifier" | "union_specifier" | "enum_specifier" => find_identifier(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// C has no access keywords; `static` at file scope gives internal
/// linkage, which this adapter treats as private.
pub(crate) fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    !node_text(node, source)
        .split_whitespace()
        .next()
        .is_some_and(|w| w == "static")
}

crate::macros::define_adapter! {
    CAdapter,
    name = "c",
    aliases = [],
    extensions = ["c", "h"],
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
    fn function_definition_named() {
        let adapter = CAdapter;
        let source = b"int add(int a, int b) { return a + b; }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree.root_node().child(0).expect("function_definition");
        assert_eq!(func.kind(), "function_definition");
        assert_eq!(extract_name(func, source), "add");
        assert!(is_public(func, source));
    }

    #[test]
    fn static_function_is_private() {
        let adapter = CAdapter;
        let source = b"static int helper(void) { return 0; }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree.root_node().child(0).expect("function_definition");
        assert!(!is_public(func, source));
    }
}
