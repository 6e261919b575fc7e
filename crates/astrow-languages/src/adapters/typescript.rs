// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TypeScript and TSX adapters. Both grammars share one node-type table;
//! TSX only adds JSX node kinds the flattener treats as opaque syntax,
//! so the two adapters differ solely in which grammar they bind.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::adapters::javascript;
use crate::common::find_identifier;

fn node_config(raw_type: &str) -> Option<Cfg> {
    match raw_type {
        "interface_declaration" => Some(Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::InterfaceDefinition)),
        "enum_declaration" => Some(Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::EnumDefinition)),
        "type_alias_declaration" => Some(Cfg::with_native(tm::TYPE_REFERENCE, Name::FindIdentifier, Native::VariableWithType)),
        "public_field_definition" => Some(Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindProperty, Native::VariableWithType)),
        "ambient_declaration" | "module_declaration" => Some(Cfg::bare(tm::DEFINITION_MODULE)),
        "type_annotation" | "predefined_type" | "union_type" | "generic_type" => Some(Cfg::named(tm::TYPE_REFERENCE, Name::NodeText)),
        _ => javascript::node_config(raw_type),
    }
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "interface_declaration" | "enum_declaration" | "type_alias_declaration" => find_identifier(node, source),
        _ => javascript::extract_name(node, source),
    }
}

fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    !crate::common::node_text(node, source).contains("private")
        && javascript::is_public(node, source)
}

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_typescript::LANGUAGE_TYPESCRIPT)
}

crate::macros::define_adapter! {
    TypeScriptAdapter,
    name = "typescript",
    aliases = ["ts"],
    extensions = ["ts", "mts", "cts"],
    language_fn = ts_language,
    config_fn = node_config,
    name_fn = extract_name,
    visibility_fn = is_public,
}

fn tsx_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_typescript::LANGUAGE_TSX)
}

/// TSX shares `node_config`/`extract_name`/`is_public` with TypeScript;
/// the grammar differs only in accepting JSX syntax.
mod tsx {
    use super::{extract_name, is_public, node_config, tsx_language};

    crate::macros::define_adapter! {
        TsxAdapter,
        name = "tsx",
        aliases = [],
        extensions = ["tsx"],
        language_fn = tsx_language,
        config_fn = node_config,
        name_fn = extract_name,
        visibility_fn = is_public,
    }
}

pub use tsx::{adapter as tsx_adapter, TsxAdapter};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::LanguageAdapter;

    #[test]
    fn interface_declaration_named() {
        let adapter = TypeScriptAdapter;
        let source = b"interface Shape { area(): number; }";
        let tree = adapter.parse(source).expect("parse succeeds");
        let iface = tree.root_node().child(0).expect("interface_declaration");
        assert_eq!(iface.kind(), "interface_declaration");
        assert_eq!(extract_name(iface, source), "Shape");
    }
}
