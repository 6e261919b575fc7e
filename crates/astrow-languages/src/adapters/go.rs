// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Go adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_go::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "source_file" => Cfg::bare(tm::DEFINITION_MODULE),
        "function_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "method_declaration" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::MethodDefinition),
        "func_literal" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "type_spec" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "var_spec" | "const_spec" | "short_var_declaration" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindIdentifier, Native::VariableWithType)
        }
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" | "field_identifier" | "package_identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "selector_expression" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "interpreted_string_literal" | "raw_string_literal" => Cfg::bare(tm::LITERAL_STRING),
        "int_literal" | "float_literal" => Cfg::bare(tm::LITERAL_NUMBER),
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "composite_literal" | "literal_value" => Cfg::bare(tm::COLLECTION_OBJECT),
        "import_declaration" | "import_spec" => Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement),
        "if_statement" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" => Cfg::bare(tm::FLOW_LOOP),
        "switch_statement" | "type_switch_statement" | "select_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" | "goto_statement" => Cfg::bare(tm::FLOW_JUMP),
        "defer_statement" => Cfg::bare(tm::BLOCK_STATEMENT),
        "go_statement" => Cfg::bare(tm::CONCURRENCY_SPAWN),
        "send_statement" => Cfg::bare(tm::CONCURRENCY_CHANNEL),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "block" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        "struct_type" | "interface_type" | "pointer_type" | "qualified_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_declaration" | "method_declaration" | "type_spec" | "var_spec" | "const_spec" => {
            find_identifier(node, source)
        }
        _ => declaration_fallback(node, source),
    }
}

/// Go exports identifiers whose first rune is uppercase; everything else
/// is package-private.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let name = extract_name(node, source);
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

crate::macros::define_adapter! {
    GoAdapter,
    name = "go",
    aliases = ["golang"],
    extensions = ["go"],
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
    fn exported_function_declaration() {
        let adapter = GoAdapter;
        let source = b"package main\n\nfunc Add(a int, b int) int {\n\treturn a + b\n}\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree
            .root_node()
            .named_children(&mut tree.root_node().walk())
            .find(|n| n.kind() == "function_declaration")
            .expect("function_declaration");
        assert_eq!(extract_name(func, source), "Add");
        assert!(is_public(func, source));
    }

    #[test]
    fn lowercase_function_is_unexported() {
        let adapter = GoAdapter;
        let source = b"package main\n\nfunc add(a int, b int) int {\n\treturn a + b\n}\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree
            .root_node()
            .named_children(&mut tree.root_node().walk())
            .find(|n| n.kind() == "function_declaration")
            .expect("function_declaration");
        assert!(!is_public(func, source));
    }
}
