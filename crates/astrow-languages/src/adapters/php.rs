// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PHP adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_php::LANGUAGE_PHP)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "program" => Cfg::bare(tm::DEFINITION_MODULE),
        "namespace_definition" => Cfg::named(tm::DEFINITION_MODULE, Name::FindQualifiedIdentifier),
        "namespace_use_declaration" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "function_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "method_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::MethodDefinition),
        "anonymous_function_creation_expression" | "arrow_function" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "interface_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::InterfaceDefinition),
        "trait_declaration" => Cfg::named(tm::DEFINITION_CLASS, Name::FindIdentifier),
        "enum_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::EnumDefinition),
        "property_declaration" | "assignment_expression" | "const_declaration" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindAssignmentTarget, Native::VariableWithType)
        }
        "simple_parameter" | "formal_parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "function_call_expression" | "member_call_expression" | "object_creation_expression" => {
            Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall)
        }
        "name" | "variable_name" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "qualified_name" => Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier),
        "member_access_expression" | "scoped_property_access_expression" => {
            Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty)
        }
        "string" | "encapsed_string" => Cfg::bare(tm::LITERAL_STRING),
        "integer" | "float" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null" => Cfg::bare(tm::LITERAL_OTHER),
        "array_creation_expression" => Cfg::bare(tm::COLLECTION_ARRAY),
        "if_statement" | "conditional_expression" | "match_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "foreach_statement" | "while_statement" | "do_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" | "yield_expression" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" | "goto_statement" => Cfg::bare(tm::FLOW_JUMP),
        "throw_expression" => Cfg::bare(tm::EXCEPTION_THROW),
        "try_statement" => Cfg::bare(tm::EXCEPTION_TRY),
        "catch_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "attribute" | "attribute_group" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::None),
        "compound_statement" | "declaration_list" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_op_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "named_type" | "primitive_type" | "union_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_definition" | "method_declaration" | "class_declaration" | "interface_declaration"
        | "trait_declaration" | "enum_declaration" => find_identifier(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// PHP class members default to `public`; this checks for an explicit
/// `private`/`protected` modifier keyword among leading children.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    !node.children(&mut cursor).any(|c| {
        c.kind() == "visibility_modifier"
            && matches!(node_text(c, source), "private" | "protected")
    })
}

crate::macros::define_adapter! {
    PhpAdapter,
    name = "php",
    aliases = [],
    extensions = ["php", "phtml"],
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
    fn public_method_declaration() {
        let adapter = PhpAdapter;
        let source = b"<?php class C { public function add($a, $b) { return $a + $b; } }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let class = tree
            .root_node()
            .named_children(&mut tree.root_node().walk())
            .find(|n| n.kind() == "class_declaration")
            .expect("class_declaration");
        let body = class.child_by_field_name("body").expect("declaration_list");
        let method = body
            .named_children(&mut body.walk())
            .find(|n| n.kind() == "method_declaration")
            .expect("method_declaration");
        assert_eq!(extract_name(method, source), "add");
        assert!(is_public(method, source));
    }
}
