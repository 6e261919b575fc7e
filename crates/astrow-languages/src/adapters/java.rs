// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Java adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, find_qualified_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_java::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "program" => Cfg::bare(tm::DEFINITION_MODULE),
        "package_declaration" => Cfg::named(tm::DEFINITION_MODULE, Name::FindQualifiedIdentifier),
        "import_declaration" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "method_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::MethodDefinition),
        "constructor_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::ConstructorDefinition),
        "lambda_expression" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "interface_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::InterfaceDefinition),
        "enum_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::EnumDefinition),
        "record_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "field_declaration" | "local_variable_declaration" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType)
        }
        "formal_parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "method_invocation" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "object_creation_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "scoped_identifier" => Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier),
        "field_access" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string_literal" | "character_literal" | "text_block" => Cfg::bare(tm::LITERAL_STRING),
        "decimal_integer_literal" | "decimal_floating_point_literal" | "hex_integer_literal" => {
            Cfg::bare(tm::LITERAL_NUMBER)
        }
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null_literal" => Cfg::bare(tm::LITERAL_OTHER),
        "array_initializer" => Cfg::bare(tm::COLLECTION_ARRAY),
        "if_statement" | "ternary_expression" | "switch_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "enhanced_for_statement" | "while_statement" | "do_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" => Cfg::bare(tm::FLOW_JUMP),
        "throw_statement" => Cfg::bare(tm::EXCEPTION_THROW),
        "try_statement" | "try_with_resources_statement" => Cfg::bare(tm::EXCEPTION_TRY),
        "catch_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "synchronized_statement" => Cfg::bare(tm::CONCURRENCY_LOCK),
        "line_comment" | "block_comment" => Cfg::bare(tm::COMMENT_LINE),
        "annotation" | "marker_annotation" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::FindIdentifier),
        "block" | "class_body" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "assignment_expression" => Cfg::bare(tm::EXPRESSION_ASSIGNMENT),
        "generic_type" | "type_identifier" | "array_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "method_declaration" | "constructor_declaration" | "class_declaration" | "interface_declaration"
        | "enum_declaration" | "record_declaration" => find_identifier(node, source),
        "package_declaration" => find_qualified_identifier(node, source, "."),
        _ => declaration_fallback(node, source),
    }
}

/// Java visibility is an explicit `modifiers` child; absent any
/// access keyword the member is package-private, which this adapter
/// treats as non-public.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| {
        c.kind() == "modifiers" && node_text(c, source).split_whitespace().any(|w| w == "public")
    })
}

crate::macros::define_adapter! {
    JavaAdapter,
    name = "java",
    aliases = [],
    extensions = ["java"],
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
        let adapter = JavaAdapter;
        let source = b"class C { public int add(int a, int b) { return a + b; } }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let class = tree.root_node().child(0).expect("class_declaration");
        let body = class.child_by_field_name("body").expect("class_body");
        let method = body
            .named_children(&mut body.walk())
            .find(|n| n.kind() == "method_declaration")
            .expect("method_declaration");
        assert_eq!(extract_name(method, source), "add");
        assert!(is_public(method, source));
    }
}
