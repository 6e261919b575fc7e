// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The language adapter layer: the [`LanguageAdapter`] trait, one
//! concrete adapter per grammar (behind a Cargo feature each), and the
//! process-wide [`registry::Registry`] that resolves names/aliases/
//! extensions to adapter instances.

pub mod adapter;
pub mod adapters;
pub mod common;
mod macros;
pub mod registry;

pub use adapter::{LanguageAdapter, LanguageInfo};
pub use registry::{registry, Registry};

/// Table-function surface:
/// `ast_supported_languages() → rows of (language, aliases[], extensions[])`.
#[must_use]
pub fn supported_languages() -> Vec<LanguageInfo> {
    registry().supported_languages()
}
