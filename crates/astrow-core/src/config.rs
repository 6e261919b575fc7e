// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`NodeConfig`]: the per-raw-type data each language adapter keeps in its
//! `node_configs()` table.

use crate::taxonomy::IS_CONSTRUCT;

/// How an adapter derives a node's `name` column from its raw grammar
/// shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameStrategy {
    /// No name; always `""`.
    #[default]
    None,
    /// The exact source slice covered by the node.
    NodeText,
    /// The text of the first child of type `"identifier"`.
    FindIdentifier,
    /// The first child of type `"property_identifier"`.
    FindProperty,
    /// Segments of the first dotted/scoped name child, joined by the
    /// language's scope separator.
    FindQualifiedIdentifier,
    /// The `"function"`/`"callee"` field of a call node.
    FindCallTarget,
    /// The left operand of the enclosing assignment (arrow/lambda
    /// definitions bound to a name via assignment).
    FindAssignmentTarget,
    /// Descend through declarator-like children to the innermost
    /// identifier (C/C++ style).
    FindInDeclarator,
    /// Adapter-defined extraction, dispatched by raw type string.
    Custom,
}

/// Which [native context extractor](crate) an adapter invokes for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NativeStrategy {
    #[default]
    None,
    NodeText,
    FunctionWithParams,
    FunctionWithDecorators,
    ArrowFunction,
    AsyncFunction,
    ClassWithInheritance,
    ClassWithMethods,
    VariableWithType,
    GenericFunction,
    MethodDefinition,
    ConstructorDefinition,
    InterfaceDefinition,
    EnumDefinition,
    ImportStatement,
    FunctionCall,
}

/// Immutable per-raw-node-type configuration. One of these exists per
/// distinct tree-sitter node kind a language adapter cares about; types
/// absent from the table fall back to [`NodeConfig::default_syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeConfig {
    pub semantic_type: u8,
    pub name_strategy: NameStrategy,
    pub native_strategy: NativeStrategy,
    pub flags: u8,
}

impl NodeConfig {
    /// A construct with no name and no native context, e.g. a literal or
    /// a bare punctuation/keyword token promoted to a semantic category.
    #[must_use]
    pub const fn bare(semantic_type: u8) -> Self {
        Self {
            semantic_type,
            name_strategy: NameStrategy::None,
            native_strategy: NativeStrategy::None,
            flags: IS_CONSTRUCT,
        }
    }

    /// A pure-syntax token (punctuation, delimiters): `IS_CONSTRUCT` is
    /// unset, since semantic category assignment never flips a pure-syntax
    /// node into a construct.
    #[must_use]
    pub const fn syntax(semantic_type: u8) -> Self {
        Self {
            semantic_type,
            name_strategy: NameStrategy::None,
            native_strategy: NativeStrategy::None,
            flags: 0,
        }
    }

    #[must_use]
    pub const fn named(semantic_type: u8, name_strategy: NameStrategy) -> Self {
        Self {
            semantic_type,
            name_strategy,
            native_strategy: NativeStrategy::None,
            flags: IS_CONSTRUCT,
        }
    }

    #[must_use]
    pub const fn with_native(
        semantic_type: u8,
        name_strategy: NameStrategy,
        native_strategy: NativeStrategy,
    ) -> Self {
        Self {
            semantic_type,
            name_strategy,
            native_strategy,
            flags: IS_CONSTRUCT,
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// The fallback applied by the flattener to any raw type string not
    /// present in an adapter's table: `PARSER_SYNTAX`, not a construct.
    #[must_use]
    pub const fn default_syntax() -> Self {
        Self::syntax(crate::taxonomy::PARSER_SYNTAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{self, IS_CONSTRUCT};

    #[test]
    fn default_syntax_is_not_a_construct() {
        let cfg = NodeConfig::default_syntax();
        assert_eq!(cfg.semantic_type, taxonomy::PARSER_SYNTAX);
        assert_eq!(cfg.flags & IS_CONSTRUCT, 0);
    }

    #[test]
    fn bare_is_a_construct_with_no_name() {
        let cfg = NodeConfig::bare(taxonomy::LITERAL_NUMBER);
        assert_eq!(cfg.name_strategy, NameStrategy::None);
        assert_ne!(cfg.flags & IS_CONSTRUCT, 0);
    }
}
