// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML adapter. Elements stand in for the definition taxonomy's
//! "module" slot (a document is a tree of nested scopes, not functions).

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::node_text;

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_html::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "document" => Cfg::bare(tm::DEFINITION_MODULE),
        "element" | "script_element" | "style_element" => {
            Cfg::with_native(tm::DEFINITION_CLASS, Name::Custom, Native::ClassWithMethods)
        }
        "attribute" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::Custom, Native::VariableWithType),
        "tag_name" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "attribute_name" => Cfg::named(tm::IDENTIFIER_PROPERTY, Name::NodeText),
        "attribute_value" | "quoted_attribute_value" => Cfg::bare(tm::LITERAL_STRING),
        "text" => Cfg::bare(tm::LITERAL_OTHER),
        "comment" => Cfg::bare(tm::COMMENT_BLOCK),
        "doctype" => Cfg::named(tm::ANNOTATION_DIRECTIVE, Name::NodeText),
        "start_tag" | "end_tag" | "self_closing_tag" => Cfg::syntax(tm::PARSER_SYNTAX),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "element" | "script_element" | "style_element" => node
            .child(0)
            .and_then(|tag| tag.child_by_field_name("name").or_else(|| tag.child(1)))
            .map(|n| node_text(n, source).to_owned())
            .unwrap_or_default(),
        "attribute" => node
            .child_by_field_name("name")
            .or_else(|| node.child(0))
            .map(|n| node_text(n, source).to_owned())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// HTML has no visibility model; every element and attribute is public.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    HtmlAdapter,
    name = "html",
    aliases = ["htm"],
    extensions = ["html", "htm"],
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
    fn element_name_is_its_tag() {
        let adapter = HtmlAdapter;
        let source = b"<div class=\"a\">hi</div>";
        let tree = adapter.parse(source).expect("parse succeeds");
        let el = tree.root_node().child(0).expect("element");
        assert_eq!(el.kind(), "element");
        assert_eq!(extract_name(el, source), "div");
    }
}
