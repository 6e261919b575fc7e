// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `define_adapter!` stamps out the repetitive [`LanguageAdapter`]
//! boilerplate, keeping per-language behavior in a handful of overridable
//! functions and a data table rather than a deep inheritance hierarchy.
//! Each language module supplies only its grammar accessor, its
//! `node_config`/`extract_name`/`is_public` free functions, and its
//! name/alias/extension lists.
//!
//! [`LanguageAdapter`]: crate::adapter::LanguageAdapter

macro_rules! define_adapter {
    (
        $struct_name:ident,
        name = $name:expr,
        aliases = [$($alias:expr),* $(,)?],
        extensions = [$($ext:expr),* $(,)?],
        language_fn = $language_fn:path,
        config_fn = $config_fn:path,
        name_fn = $name_fn:path,
        visibility_fn = $vis_fn:path $(,)?
    ) => {
        /// Adapter wiring this grammar into the registry. See the
        /// module-level `node_config`/`extract_name`/`is_public`
        /// functions for the actual per-language policy.
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $struct_name;

        impl $struct_name {
            pub const NAME: &'static str = $name;
            pub const ALIASES: &'static [&'static str] = &[$($alias),*];
            pub const EXTENSIONS: &'static [&'static str] = &[$($ext),*];
        }

        impl $crate::adapter::LanguageAdapter for $struct_name {
            fn language_name(&self) -> &'static str {
                Self::NAME
            }

            fn aliases(&self) -> &'static [&'static str] {
                Self::ALIASES
            }

            fn extensions(&self) -> &'static [&'static str] {
                Self::EXTENSIONS
            }

            fn parse(&self, source: &[u8]) -> Result<tree_sitter::Tree, astrow_core::CoreError> {
                $crate::adapter::parse_with(&$language_fn(), source)
            }

            fn node_config(&self, raw_type: &str) -> Option<astrow_core::NodeConfig> {
                $config_fn(raw_type)
            }

            fn extract_name<'a>(&self, node: tree_sitter::Node<'a>, source: &'a [u8]) -> String {
                $name_fn(node, source)
            }

            fn is_public(&self, node: tree_sitter::Node<'_>, source: &[u8]) -> bool {
                $vis_fn(node, source)
            }
        }

        /// Factory registered with the process-wide registry.
        pub fn adapter() -> Result<std::sync::Arc<dyn $crate::adapter::LanguageAdapter>, astrow_core::CoreError> {
            Ok(std::sync::Arc::new($struct_name))
        }
    };
}

pub(crate) use define_adapter;
