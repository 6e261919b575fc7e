// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kotlin adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_kotlin::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "source_file" => Cfg::bare(tm::DEFINITION_MODULE),
        "package_header" => Cfg::named(tm::DEFINITION_MODULE, Name::FindQualifiedIdentifier),
        "import_header" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "function_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "secondary_constructor" | "primary_constructor" => {
            Cfg::with_native(tm::DEFINITION_FUNCTION, Name::None, Native::ConstructorDefinition)
        }
        "lambda_literal" | "anonymous_function" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "object_declaration" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithMethods),
        "property_declaration" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType),
        "function_value_parameters" | "class_parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "simple_identifier" | "type_identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "navigation_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string_literal" | "line_string_literal" => Cfg::bare(tm::LITERAL_STRING),
        "integer_literal" | "real_literal" | "hex_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean_literal" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null_literal" => Cfg::bare(tm::LITERAL_OTHER),
        "collection_literal" => Cfg::bare(tm::COLLECTION_ARRAY),
        "if_expression" | "when_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "while_statement" | "do_while_statement" => Cfg::bare(tm::FLOW_LOOP),
        "jump_expression" => Cfg::bare(tm::FLOW_JUMP),
        "try_expression" => Cfg::bare(tm::EXCEPTION_TRY),
        "catch_block" => Cfg::bare(tm::EXCEPTION_CATCH),
        "comment" | "line_comment" | "multiline_comment" => Cfg::bare(tm::COMMENT_LINE),
        "annotation" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::FindIdentifier),
        "class_body" | "statements" => Cfg::syntax(tm::BLOCK_SCOPE),
        "additive_expression" | "multiplicative_expression" | "comparison_expression" | "equality_expression" => {
            Cfg::bare(tm::OPERATOR_ARITHMETIC)
        }
        "user_type" | "nullable_type" | "function_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_declaration" | "class_declaration" | "object_declaration" | "property_declaration" => {
            find_identifier(node, source)
        }
        "package_header" => {
            let mut cursor = node.walk();
            node.children(&mut cursor)
                .find(|c| c.kind() == "identifier")
                .map(|n| node_text(n, source).to_owned())
                .unwrap_or_default()
        }
        _ => declaration_fallback(node, source),
    }
}

/// Kotlin defaults to public; this looks for an explicit `private` or
/// `internal` modifier among the node's leading children.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    !node.children(&mut cursor).any(|c| {
        c.kind() == "modifiers" && {
            let text = node_text(c, source);
            text.contains("private") || text.contains("internal")
        }
    })
}

crate::macros::define_adapter! {
    KotlinAdapter,
    name = "kotlin",
    aliases = ["kt"],
    extensions = ["kt", "kts"],
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
    fn function_declaration_named() {
        let adapter = KotlinAdapter;
        let source = b"fun add(a: Int, b: Int): Int = a + b\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree
            .root_node()
            .named_children(&mut tree.root_node().walk())
            .find(|n| n.kind() == "function_declaration")
            .expect("function_declaration");
        assert_eq!(extract_name(func, source), "add");
        assert!(is_public(func, source));
    }
}
