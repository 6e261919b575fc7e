// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ruby adapter.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{declaration_fallback, find_identifier, find_qualified_identifier};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_ruby::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "program" => Cfg::bare(tm::DEFINITION_MODULE),
        "method" | "singleton_method" => {
            Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams)
        }
        "lambda" | "block" | "do_block" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "class" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "module" => Cfg::named(tm::DEFINITION_CLASS, Name::FindIdentifier),
        "assignment" | "operator_assignment" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindAssignmentTarget, Native::VariableWithType)
        }
        "method_parameters" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call" | "method_call" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" | "instance_variable" | "class_variable" | "global_variable" => {
            Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText)
        }
        "constant" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "scope_resolution" => Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier),
        "string" | "string_content" | "bare_string" => Cfg::bare(tm::LITERAL_STRING),
        "integer" | "float" => Cfg::bare(tm::LITERAL_NUMBER),
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "nil" => Cfg::bare(tm::LITERAL_OTHER),
        "array" => Cfg::bare(tm::COLLECTION_ARRAY),
        "hash" => Cfg::bare(tm::COLLECTION_OBJECT),
        "if" | "unless" | "ternary" | "conditional" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "while" | "until" | "for" => Cfg::bare(tm::FLOW_LOOP),
        "case" => Cfg::bare(tm::FLOW_SWITCH),
        "return" => Cfg::bare(tm::FLOW_JUMP),
        "break" | "next" | "redo" => Cfg::bare(tm::FLOW_JUMP),
        "begin" => Cfg::bare(tm::EXCEPTION_TRY),
        "rescue" => Cfg::bare(tm::EXCEPTION_CATCH),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "body_statement" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary" | "unary" => Cfg::bare(tm::OPERATOR_ARITHMETIC),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "method" | "singleton_method" | "class" | "module" => find_identifier(node, source),
        "scope_resolution" => find_qualified_identifier(node, source, "::"),
        _ => declaration_fallback(node, source),
    }
}

/// Ruby visibility is set procedurally via `private`/`protected` calls
/// rather than per-node modifiers; lacking that cross-statement state,
/// this adapter treats every method as public, matching Ruby's default.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    RubyAdapter,
    name = "ruby",
    aliases = ["rb"],
    extensions = ["rb", "rake", "gemspec"],
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
    fn method_definition_named() {
        let adapter = RubyAdapter;
        let source = b"def add(a, b)\n  a + b\nend\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let method = tree.root_node().child(0).expect("method");
        assert_eq!(method.kind(), "method");
        assert_eq!(extract_name(method, source), "add");
        assert!(is_public(method, source));
    }
}
