// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSS adapter. No function/class taxonomy applies; rule sets map to
//! `DEFINITION_MODULE`-ish scoping blocks and declarations to variables.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::{find_identifier, node_text};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_css::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "stylesheet" => Cfg::bare(tm::DEFINITION_MODULE),
        "rule_set" | "media_statement" | "keyframes_statement" | "supports_statement" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::NodeText, Native::ClassWithMethods)
        }
        "declaration" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::Custom, Native::VariableWithType),
        "import_statement" | "charset_statement" | "namespace_statement" => {
            Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement)
        }
        "class_selector" | "id_selector" | "tag_name" | "universal_selector" => {
            Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText)
        }
        "property_name" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::NodeText),
        "string_value" => Cfg::bare(tm::LITERAL_STRING),
        "integer_value" | "float_value" => Cfg::bare(tm::LITERAL_NUMBER),
        "color_value" | "plain_value" => Cfg::bare(tm::LITERAL_OTHER),
        "comment" => Cfg::bare(tm::COMMENT_BLOCK),
        "block" => Cfg::syntax(tm::BLOCK_SCOPE),
        "at_keyword" => Cfg::named(tm::ANNOTATION_DIRECTIVE, Name::NodeText),
        "call_expression" => Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "rule_set" | "media_statement" | "keyframes_statement" | "supports_statement" => {
            node.child(0).map(|c| node_text(c, source).to_owned()).unwrap_or_default()
        }
        "declaration" => node
            .child_by_field_name("property")
            .or_else(|| node.child(0))
            .map(|c| node_text(c, source).to_owned())
            .unwrap_or_default(),
        _ => find_identifier(node, source),
    }
}

/// CSS has no visibility model; every selector and declaration is
/// considered part of the stylesheet's public surface.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    CssAdapter,
    name = "css",
    aliases = [],
    extensions = ["css"],
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
    fn rule_set_name_is_its_selector() {
        let adapter = CssAdapter;
        let source = b".card { color: red; }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let rule = tree.root_node().child(0).expect("rule_set");
        assert_eq!(rule.kind(), "rule_set");
        assert_eq!(extract_name(rule, source), ".card");
    }
}
