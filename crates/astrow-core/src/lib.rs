// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leaf crate of the astrow workspace: the semantic taxonomy, node
//! configuration value types, the error enum, and the `Options` config
//! surface. Everything above this crate (`astrow-languages`,
//! `astrow-parse`, `astrow-fs`, `astrow-engine`) depends on it; it depends
//! on nothing else in the workspace.

pub mod config;
pub mod error;
pub mod options;
pub mod taxonomy;

pub use config::{NameStrategy, NativeStrategy, NodeConfig};
pub use error::{CoreError, CoreResult};
pub use options::{ContextLevel, Options, PeekMode, SourceLevel, StructureLevel};
