// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C# adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_c_sharp::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "compilation_unit" => Cfg::bare(tm::DEFINITION_MODULE),
        "namespace_declaration" | "file_scoped_namespace_declaration" => {
            Cfg::named(tm::DEFINITION_MODULE, Name::FindIdentifier)
        }
        "using_directive" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "method_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::MethodDefinition),
        "constructor_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::ConstructorDefinition),
        "local_function_statement" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "lambda_expression" | "anonymous_method_expression" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "interface_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::InterfaceDefinition),
        "enum_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::EnumDefinition),
        "struct_declaration" | "record_declaration" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance)
        }
        "property_declaration" | "field_declaration" | "variable_declarator" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType)
        }
        "parameter_list" => Cfg::syntax(tm::PARSER_SYNTAX),
        "invocation_expression" | "object_creation_expression" => {
            Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall)
        }
        "identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "qualified_name" => Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier),
        "member_access_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string_literal" | "interpolated_string_expression" => Cfg::bare(tm::LITERAL_STRING),
        "integer_literal" | "real_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean_literal" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null_literal" => Cfg::bare(tm::LITERAL_OTHER),
        "array_creation_expression" | "initializer_expression" => Cfg::bare(tm::COLLECTION_ARRAY),
        "if_statement" | "conditional_expression" | "switch_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "foreach_statement" | "while_statement" | "do_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" | "yield_statement" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" | "goto_statement" => Cfg::bare(tm::FLOW_JUMP),
        "throw_statement" | "throw_expression" => Cfg::bare(tm::EXCEPTION_THROW),
        "try_statement" => Cfg::bare(tm::EXCEPTION_TRY),
        "catch_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "lock_statement" => Cfg::bare(tm::CONCURRENCY_LOCK),
        "await_expression" => Cfg::bare(tm::CONCURRENCY_ASYNC),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "attribute" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::FindIdentifier),
        "block" | "declaration_list" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "prefix_unary_expression" | "postfix_unary_expression" => {
            Cfg::bare(tm::OPERATOR_ARITHMETIC)
        }
        "assignment_expression" => Cfg::bare(tm::EXPRESSION_ASSIGNMENT),
        "generic_name" | "predefined_type" | "nullable_type" | "array_type" => {
            Cfg::named(tm::TYPE_REFERENCE, Name::NodeText)
        }
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "method_declaration" | "constructor_declaration" | "local_function_statement"
        | "class_declaration" | "interface_declaration" | "enum_declaration" | "struct_declaration"
        | "record_declaration" | "property_declaration" | "variable_declarator"
        | "namespace_declaration" | "file_scoped_namespace_declaration" => find_identifier(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// C# members default to `private`; this checks for an explicit
/// `public` modifier token among the node's leading modifiers.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| {
        c.kind() == "modifier" && node_text(c, source) == "public"
    })
}

crate::macros::define_adapter! {
    CSharpAdapter,
    name = "c_sharp",
    aliases = ["csharp", "cs"],
    extensions = ["cs"],
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
        let adapter = CSharpAdapter;
        let source = b"class C { public int Add(int a, int b) { return a + b; } }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let class = tree.root_node().child(0).expect("class_declaration");
        let body = class.child_by_field_name("body").expect("declaration_list");
        let method = body
            .named_children(&mut body.walk())
            .find(|n| n.kind() == "method_declaration")
            .expect("method_declaration");
        assert_eq!(extract_name(method, source), "Add");
        assert!(is_public(method, source));
    }
}
