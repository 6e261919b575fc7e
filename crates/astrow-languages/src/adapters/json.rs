// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON adapter. Pure data grammar: no definitions, calls, or control
//! flow, just collections, literals, and key/value pairs.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::node_text;

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_json::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "document" => Cfg::bare(tm::DEFINITION_MODULE),
        "object" => Cfg::bare(tm::COLLECTION_OBJECT),
        "array" => Cfg::bare(tm::COLLECTION_ARRAY),
        "pair" => Cfg::with_native(tm::DEFINITION_VARIABLE, Name::Custom, Native::VariableWithType),
        "string" | "string_content" => Cfg::bare(tm::LITERAL_STRING),
        "number" => Cfg::bare(tm::LITERAL_NUMBER),
        "true" | "false" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null" => Cfg::bare(tm::LITERAL_OTHER),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    if node.kind() == "pair" {
        node.child_by_field_name("key")
            .or_else(|| node.child(0))
            .map(|n| node_text(n, source).trim_matches('"').to_owned())
            .unwrap_or_default()
    } else {
        String::new()
    }
}

/// JSON has no visibility model; every key is part of the document's
/// public structure.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    JsonAdapter,
    name = "json",
    aliases = [],
    extensions = ["json", "jsonc"],
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
    fn pair_name_is_its_key() {
        let adapter = JsonAdapter;
        let source = br#"{"name": "astrow"}"#;
        let tree = adapter.parse(source).expect("parse succeeds");
        let object = tree.root_node().child(0).expect("object");
        let pair = object.named_child(0).expect("pair");
        assert_eq!(pair.kind(), "pair");
        assert_eq!(extract_name(pair, source), "name");
    }
}
