// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tree flattener and native context extractors: turns one
//! `tree_sitter::Tree` plus its source bytes into the flat,
//! invariant-satisfying [`Node`] array the streaming driver emits as rows.

mod flatten;
mod native;
mod node;
mod peek;

pub use flatten::flatten;
pub use node::{NativeContext, Node, Parameter, ROOT_PARENT_ID};
