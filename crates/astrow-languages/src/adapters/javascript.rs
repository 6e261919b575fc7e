// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JavaScript adapter, including class/method extraction (e.g.
//! `class C { m() {...} }`).

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, find_property};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_javascript::LANGUAGE)
}

pub(crate) fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "program" => Cfg::bare(tm::DEFINITION_MODULE),
        "function_declaration" | "function_expression" | "generator_function_declaration" => {
            Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams)
        }
        "arrow_function" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindAssignmentTarget, Native::ArrowFunction),
        "method_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindProperty, Native::MethodDefinition),
        "class_declaration" | "class" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "variable_declarator" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType),
        "lexical_declaration" | "variable_declaration" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call_expression" | "new_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" | "shorthand_property_identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "property_identifier" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::NodeText),
        "member_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string" | "template_string" => Cfg::bare(tm::LITERAL_STRING),
        "number" => Cfg::bare(tm::LITERAL_NUMBER),
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null" | "undefined" => Cfg::bare(tm::LITERAL_OTHER),
        "array" => Cfg::bare(tm::COLLECTION_ARRAY),
        "object" => Cfg::bare(tm::COLLECTION_OBJECT),
        "import_statement" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "export_statement" => Cfg::bare(tm::IMPORT_EXPORT),
        "if_statement" | "ternary_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "for_in_statement" | "while_statement" | "do_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" | "yield_expression" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" => Cfg::bare(tm::FLOW_JUMP),
        "try_statement" => Cfg::bare(tm::EXCEPTION_TRY),
        "throw_statement" => Cfg::bare(tm::EXCEPTION_THROW),
        "catch_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "await_expression" => Cfg::bare(tm::CONCURRENCY_ASYNC),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "decorator" => Cfg::named(tm::ANNOTATION_DECORATOR, Name::FindIdentifier),
        "statement_block" | "class_body" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" | "augmented_assignment_expression" => {
            Cfg::bare(tm::OPERATOR_ARITHMETIC)
        }
        "assignment_expression" => Cfg::bare(tm::EXPRESSION_ASSIGNMENT),
        _ => return None,
    })
}

pub(crate) fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_declaration" | "class_declaration" | "variable_declarator" => find_identifier(node, source),
        "method_definition" => find_property(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// Leading `#` marks a private class field/method; everything else that
/// isn't inside a `#`-prefixed member is public (JavaScript has no other
/// visibility keywords).
pub(crate) fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    !crate::common::node_text(node, source).trim_start().starts_with('#')
}

crate::macros::define_adapter! {
    JavaScriptAdapter,
    name = "javascript",
    aliases = ["js", "mjs", "cjs", "node"],
    extensions = ["js", "mjs", "cjs", "jsx"],
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
    fn class_with_a_method() {
        let adapter = JavaScriptAdapter;
        let source = b"class C { m() { return 0; } }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let class = tree.root_node().child(0).expect("class_declaration");
        assert_eq!(class.kind(), "class_declaration");
        assert_eq!(extract_name(class, source), "C");
    }
}
