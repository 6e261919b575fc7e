// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bash/shell adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_bash::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "program" => Cfg::bare(tm::DEFINITION_MODULE),
        "function_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "variable_assignment" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindAssignmentTarget, Native::VariableWithType),
        "command" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "variable_name" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "string" | "raw_string" | "ansi_c_string" => Cfg::bare(tm::LITERAL_STRING),
        "number" => Cfg::bare(tm::LITERAL_NUMBER),
        "array" => Cfg::bare(tm::COLLECTION_ARRAY),
        "if_statement" | "test_command" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "while_statement" | "c_style_for_statement" => Cfg::bare(tm::FLOW_LOOP),
        "case_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" => Cfg::bare(tm::FLOW_JUMP),
        "break" | "continue" => Cfg::bare(tm::FLOW_JUMP),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "compound_statement" | "do_group" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_expression" | "unary_expression" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_definition" => find_identifier(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// Shell functions carry no visibility concept; every function is
/// treated as callable from any script that sources the file.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    BashAdapter,
    name = "bash",
    aliases = ["sh", "shell"],
    extensions = ["sh", "bash"],
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
        let adapter = BashAdapter;
        let source = b"greet() {\n  echo hi\n}\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree.root_node().child(0).expect("function_definition");
        assert_eq!(func.kind(), "function_definition");
        assert_eq!(extract_name(func, source), "greet");
    }
}
