// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML adapter. Like JSON, a pure data grammar; the block/flow mapping
//! split in the grammar collapses to the same taxonomy either way.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::common::node_text;

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_yaml::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    Some(match raw_type {
        "stream" | "document" => Cfg::bare(tm::DEFINITION_MODULE),
        "block_mapping" | "flow_mapping" => Cfg::bare(tm::COLLECTION_OBJECT),
        "block_sequence" | "flow_sequence" => Cfg::bare(tm::COLLECTION_ARRAY),
        "block_mapping_pair" | "flow_pair" => {
            Cfg::with_native(tm::DEFINITION_VARIABLE, Name::Custom, Native::VariableWithType)
        }
        "anchor" | "alias" => Cfg::named(tm::IDENTIFIER_NAME, Name::NodeText),
        "tag" => Cfg::named(tm::ANNOTATION_DIRECTIVE, Name::NodeText),
        "single_quote_scalar" | "double_quote_scalar" | "string_scalar" => Cfg::bare(tm::LITERAL_STRING),
        "integer_scalar" | "float_scalar" => Cfg::bare(tm::LITERAL_NUMBER),
        "boolean_scalar" => Cfg::bare(tm::LITERAL_BOOLEAN),
        "null_scalar" => Cfg::bare(tm::LITERAL_OTHER),
        "comment" => Cfg::bare(tm::COMMENT_LINE),
        _ => return None,
    })
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    if node.kind() == "block_mapping_pair" || node.kind() == "flow_pair" {
        node.child_by_field_name("key")
            .or_else(|| node.child(0))
            .map(|n| node_text(n, source).trim_matches(['"', '\'']).to_owned())
            .unwrap_or_default()
    } else {
        String::new()
    }
}

/// YAML has no visibility model; every key is public.
fn is_public(_node: Node<'_>, _source: &[u8]) -> bool {
    true
}

crate::macros::define_adapter! {
    YamlAdapter,
    name = "yaml",
    aliases = ["yml"],
    extensions = ["yaml", "yml"],
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
    fn mapping_pair_name_is_its_key() {
        let adapter = YamlAdapter;
        let source = b"name: astrow\n";
        let tree = adapter.parse(source).expect("parse succeeds");
        let doc = tree.root_node().named_child(0).expect("document");
        let mapping = doc.named_child(0).expect("block_mapping");
        assert_eq!(mapping.kind(), "block_mapping");
        let pair = mapping.named_child(0).expect("block_mapping_pair");
        assert_eq!(extract_name(pair, source), "name");
    }
}
