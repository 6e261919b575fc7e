// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! C++ adapter. Builds on the C adapter's declarator walking and adds
//! classes, namespaces, templates, and exception handling.

use astrow_core::taxonomy as tm;
use astrow_core::{NameStrategy as Name, NativeStrategy as Native, NodeConfig as Cfg};
use tree_sitter::Node;

use crate::adapters::c;
use crate::common::{declaration_fallback, find_identifier, find_in_declarator, find_qualified_identifier};

fn ts_language() -> tree_sitter::Language {
    tree_sitter::Language::from(tree_sitter_cpp::LANGUAGE)
}

fn node_config(raw_type: &str) -> Option<Cfg> {
    match raw_type {
        "class_specifier" => Some(Cfg::with_native(tm::DEFINITION_CLASS, Name::FindIdentifier, Native::ClassWithInheritance)),
        "namespace_definition" => Some(Cfg::named(tm::DEFINITION_MODULE, Name::FindIdentifier)),
        "template_declaration" => Some(Cfg::syntax(tm::PARSER_SYNTAX)),
        "field_declaration" => Some(Cfg::with_native(tm::DEFINITION_VARIABLE, Name::FindInDeclarator, Native::VariableWithType)),
        "lambda_expression" => Some(Cfg::named(tm::DEFINITION_FUNCTION, Name::None)),
        "new_expression" | "delete_expression" => Some(Cfg::with_native(tm::CALL_FUNCTION, Name::FindCallTarget, Native::FunctionCall)),
        "qualified_identifier" => Some(Cfg::named(tm::IDENTIFIER_QUALIFIED, Name::FindQualifiedIdentifier)),
        "try_statement" => Some(Cfg::bare(tm::EXCEPTION_TRY)),
        "catch_clause" => Some(Cfg::bare(tm::EXCEPTION_CATCH)),
        "throw_statement" => Some(Cfg::bare(tm::EXCEPTION_THROW)),
        "using_declaration" | "namespace_alias_definition" => {
            Some(Cfg::with_native(tm::IMPORT_MODULE, Name::None, Native::ImportStatement))
        }
        "access_specifier" => Some(Cfg::bare(tm::ANNOTATION_ATTRIBUTE)),
        _ => c::node_config(raw_type),
    }
}

fn extract_name<'a>(node: Node<'a>, source: &'a [u8]) -> String {
    match node.kind() {
        "class_specifier" | "namespace_definition" => find_identifier(node, source),
        "field_declaration" => find_in_declarator(node, source),
        "qualified_identifier" => find_qualified_identifier(node, source, "::"),
        _ if c::node_config(node.kind()).is_some() => c::extract_name(node, source),
        _ => declaration_fallback(node, source),
    }
}

/// Class members are private by default (public for structs); an
/// explicit `access_specifier` sibling that precedes a member overrides
/// the default. This adapter checks the nearest preceding sibling.
fn is_public(node: Node<'_>, source: &[u8]) -> bool {
    let Some(parent) = node.parent() else {
        return c::is_public(node, source);
    };
    if parent.kind() != "field_declaration_list" {
        return c::is_public(node, source);
    }
    let container_is_struct = parent
        .parent()
        .is_some_and(|class_node| class_node.kind() == "struct_specifier");

    let mut cursor = parent.walk();
    let mut current_access = if container_is_struct { "public" } else { "private" };
    for child in parent.children(&mut cursor) {
        if child.kind() == "access_specifier" {
            current_access = match crate::common::node_text(child, source) {
                "public" => "public",
                "protected" => "protected",
                _ => "private",
            };
        }
        if child.id() == node.id() {
            break;
        }
    }
    current_access == "public"
}

crate::macros::define_adapter! {
    CppAdapter,
    name = "cpp",
    aliases = ["c++", "cplusplus"],
    extensions = ["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
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
    fn class_specifier_named() {
        let adapter = CppAdapter;
        let source = b"class Widget { public: int area(); };";
        let tree = adapter.parse(source).expect("parse succeeds");
        let class = tree.root_node().child(0).expect("class_specifier");
        assert_eq!(class.kind(), "class_specifier");
        assert_eq!(extract_name(class, source), "Widget");
    }
}
