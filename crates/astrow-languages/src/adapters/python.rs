// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Python adapter. The reference adapter for this workspace: its
//! `node_config` table and `extract_name` fallback are the fullest
//! worked example.

use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use astrow_core::taxonomy as tm;
use crate::common::{declaration_fallback, find_identifier};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_python::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "module" => Cfg::bare(tm::DEFINITION_MODULE),
        "function_definition" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::FindIdentifier, Native::FunctionWithParams),
        "class_definition" => Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance),
        "lambda" => Cfg::with_native(tm::DEFINITION_FUNCTION, Name::None, Native::ArrowFunction),
        "decorated_definition" => Cfg::named(tm::DEFINITION_FUNCTION, Name::None),
        "assignment" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindAssignmentTarget, Native::VariableWithType),
        "parameters" | "parameter_list" => Cfg::syntax(tm::PARSER_SYNTAX),
        "call" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        "identifier" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "attribute" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::FindProperty),
        "string" | "string_content" | "concatenated_string" => Cfg::bare(tm::LITERAL_STRING),
        "integer" | "float" => Cfg::bare(tm::LITERAL_NUMBER),
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "none" => Cfg::bare(tm::LITERAL_OTHER),
        "list" | "list_comprehension" => Cfg::bare(tm::COLLECTION_ARRAY),
        "dictionary" | "dictionary_comprehension" => Cfg::bare(tm::COLLECTION_OBJECT),
        "tuple" => Cfg::bare(tm::COLLECTION_TUPLE),
        "set" | "set_comprehension" => Cfg::bare(tm::COLLECTION_SET),
        "import_statement" | "import_from_statement" => {
            Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement)
        }
        "if_statement" | "conditional_expression" => Cfg::bare(tm::FLOW_CONDITIONAL),
        "for_statement" | "while_statement" => Cfg::bare(tm::FLOW_LOOP),
        "match_statement" => Cfg::bare(tm::FLOW_SWITCH),
        "return_statement" | "yield" => Cfg::bare(tm::FLOW_JUMP),
        "break_statement" | "continue_statement" => Cfg::bare(tm::FLOW_JUMP),
        "try_statement" => Cfg::bare(tm::EXCEPTION_TRY),
        "raise_statement" => Cfg::bare(tm::EXCEPTION_THROW),
        "except_clause" => Cfg::bare(tm::EXCEPTION_CATCH),
        "with_statement" => Cfg::bare(tm::CONCURRENCY_LOCK),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        "decorator" => Cfg::named(tm::ANNOTATION_DECORATOR, Name::FindIdentifier),
        "block" => Cfg::syntax(tm::BLOCK_SCOPE),
        "binary_operator" | "boolean_operator" | "comparison_operator" | "not_operator" | "unary_operator" => {
            Cfg::bare(tm::OPERATOR_ARITHMETIC)
        }
        "type" | "generic_type" => Cfg::named(tm::TYPE_REFERENCE, Name::NodeText),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "function_definition" | "class_definition" => find_identifier(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// Python has no language-level visibility keywords; the leading-`_`
/// convention marks a name private.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let name = extract_name(node, source);
    !name.starts_with('_')
}

crate::macros::define_adapter! {
    PythonAdapter,
    name = "python",
    aliases = ["py"],
    extensions = ["py", "pyi", "pyw"],
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
    fn parses_a_function_definition() {
        let adapter = PythonAdapter;
        let source = b"def f():\n    return 1\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let root = tree.root_node();
        assert_eq!(root.kind(), "module");
        let func = root.child(0).expect("function_definition child");
        assert_eq!(func.kind(), "function_definition");
        assert_eq!(extract_name(func, source), "f");
    }

    #[test]
    fn underscore_prefixed_names_are_private() {
        let adapter = PythonAdapter;
        let source = b"def _helper():\n    pass\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let func = tree.root_node().child(0).expect("function_definition child");
        assert!(!is_public(func, source));
    }
}
