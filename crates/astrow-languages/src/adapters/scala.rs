// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scala adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_scala::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "compilation_unit" => Cfg::bare(tm::DEFINITION_MODULE),
        "package_clause" => Cfg::named(tm::DEFINITION_MODULE, Name::FindQualifiedIdentifier),
        "import_declaration" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "function_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "lambda_expression" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class_definition" | "trait_definition" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance)
        }
        "object_definition" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithMethods),
        "val_definition" | "var_definition" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType)
        }
        "parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "field_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string" | "interpolated_string_expression" => Cfg::bare(tm::LITERAL_STRING),
        "integer_literal" | "floating_point_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean_literal" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null_literal" => Cfg::bare(tm::LITERAL_OTHER),
        "if_expression" | "match_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_expression" | "while_expression" | "do_while_expression" => Cfg::bare(tm::FLOW_LOOP),
        "throw_expression" => Cfg::bare(tm::EXCEPTION_THROW),
        "try_expression" => Cfg::bare(tm::EXCEPTION_TRY),
        "catch_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "annotation" => Cfg::named(tm::ANNOTATION_ATTRIBUTE, Name::FindIdentifier),
        "template_body" | "block" => Cfg::syntax(tm::BLOCK_SCOPE),
        "infix_expression" | "prefix_expression" | "postfix_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "generic_type" | "type_identifier" | "function_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_definition" | "class_definition" | "trait_definition" | "object_definition"
        | "val_definition" | "var_definition" => find_identifier(node, source),
        "package_clause" => {
            let mut cursor = node.walk();
            node.children(&mut cursor)
                .find(|c| c.kind().contains("identifier") || c.kind() == "package_identifier")
                .map(|n| node_text(n, source).to_owned())
                .unwrap_or_default()
        }
        _ => declaration_fallback(node, source),
    }
}

/// Scala defaults to public; this looks for an explicit `private` or
/// `protected` modifier preceding the definition.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    !node.children(&mut cursor).any(|c| {
        c.kind() == "modifiers" && {
            let text = node_text(c, source);
            text.contains("private") || text.contains("protected")
        }
    })
}

crate::macros::define_adapter! {
    ScalaAdapter,
    name = "scala",
    aliases = [],
    extensions = ["scala", "sc"],
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
        let adapter = ScalaAdapter;
        let source = b"def add(a: Int, b: Int): Int = a + b\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree
            .root_node()
            .named_children(&mut tree.root_node().walk())
            .find(|n| n.kind() == "function_definition")
            .expect("function_definition");
        assert_eq!(extract_name(func, source), "add");
        assert!(is_public(func, source));
    }
}
