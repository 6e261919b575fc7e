// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One module per grammar, each gated behind its own Cargo feature. Every
//! module exposes `adapter()` (the registry factory), an `$Adapter`
//! struct, and `$Adapter::{NAME,ALIASES,EXTENSIONS}` via
//! [`crate::macros::define_adapter`].

#[cfg(feature = "bash")]
pub mod bash;
#[cfg(feature = "c")]
pub mod c;
#[cfg(feature = "c-sharp")]
pub mod c_sharp;
#[cfg(feature = "cpp")]
pub mod cpp;
#[cfg(feature = "css")]
pub mod css;
#[cfg(feature = "go")]
pub mod go;
#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "java")]
pub mod java;
#[cfg(feature = "javascript")]
pub mod javascript;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "kotlin")]
pub mod kotlin;
#[cfg(feature = "php")]
pub mod php;
#[cfg(feature = "python")]
pub mod python;
#[cfg(feature = "ruby")]
pub mod ruby;
#[cfg(feature = "rust")]
pub mod rust;
#[cfg(feature = "scala")]
pub mod scala;
#[cfg(any(feature = "typescript", feature = "tsx"))]
pub mod typescript;
#[cfg(feature = "yaml")]
pub mod yaml;

use std::sync::Arc;

use astrow_core::CoreError;

use crate::adapter::LanguageAdapter;

type Factory = fn() -> Result<Arc<dyn LanguageAdapter>, CoreError>;

/// `(canonical_name, aliases, extensions, factory)` for every grammar
/// compiled into this build, keyed off the same Cargo features that
/// gate the grammar crates themselves. Consumed once by
/// [`crate::registry::Registry::new`] at process start.
#[must_use]
pub fn built_in_factories() -> Vec<(&'static str, &'static [&'static str], &'static [&'static str], Factory)> {
    #[allow(unused_mut)]
    let mut factories: Vec<(&'static str, &'static [&'static str], &'static [&'static str], Factory)> =
        Vec::new();

    #[cfg(feature = "bash")]
    factories.push((bash::BashAdapter::NAME, bash::BashAdapter::ALIASES, bash::BashAdapter::EXTENSIONS, bash::adapter));
    #[cfg(feature = "c")]
    factories.push((c::CAdapter::NAME, c::CAdapter::ALIASES, c::CAdapter::EXTENSIONS, c::adapter));
    #[cfg(feature = "c-sharp")]
    factories.push((
        c_sharp::CSharpAdapter::NAME,
        c_sharp::CSharpAdapter::ALIASES,
        c_sharp::CSharpAdapter::EXTENSIONS,
        c_sharp::adapter,
    ));
    #[cfg(feature = "cpp")]
    factories.push((cpp::CppAdapter::NAME, cpp::CppAdapter::ALIASES, cpp::CppAdapter::EXTENSIONS, cpp::adapter));
    #[cfg(feature = "css")]
    factories.push((css::CssAdapter::NAME, css::CssAdapter::ALIASES, css::CssAdapter::EXTENSIONS, css::adapter));
    #[cfg(feature = "go")]
    factories.push((go::GoAdapter::NAME, go::GoAdapter::ALIASES, go::GoAdapter::EXTENSIONS, go::adapter));
    #[cfg(feature = "html")]
    factories.push((html::HtmlAdapter::NAME, html::HtmlAdapter::ALIASES, html::HtmlAdapter::EXTENSIONS, html::adapter));
    #[cfg(feature = "java")]
    factories.push((java::JavaAdapter::NAME, java::JavaAdapter::ALIASES, java::JavaAdapter::EXTENSIONS, java::adapter));
    #[cfg(feature = "javascript")]
    factories.push((
        javascript::JavaScriptAdapter::NAME,
        javascript::JavaScriptAdapter::ALIASES,
        javascript::JavaScriptAdapter::EXTENSIONS,
        javascript::adapter,
    ));
    #[cfg(feature = "json")]
    factories.push((json::JsonAdapter::NAME, json::JsonAdapter::ALIASES, json::JsonAdapter::EXTENSIONS, json::adapter));
    #[cfg(feature = "kotlin")]
    factories.push((
        kotlin::KotlinAdapter::NAME,
        kotlin::KotlinAdapter::ALIASES,
        kotlin::KotlinAdapter::EXTENSIONS,
        kotlin::adapter,
    ));
    #[cfg(feature = "php")]
    factories.push((php::PhpAdapter::NAME, php::PhpAdapter::ALIASES, php::PhpAdapter::EXTENSIONS, php::adapter));
    #[cfg(feature = "python")]
    factories.push((
        python::PythonAdapter::NAME,
        python::PythonAdapter::ALIASES,
        python::PythonAdapter::EXTENSIONS,
        python::adapter,
    ));
    #[cfg(feature = "ruby")]
    factories.push((ruby::RubyAdapter::NAME, ruby::RubyAdapter::ALIASES, ruby::RubyAdapter::EXTENSIONS, ruby::adapter));
    #[cfg(feature = "rust")]
    factories.push((rust::RustAdapter::NAME, rust::RustAdapter::ALIASES, rust::RustAdapter::EXTENSIONS, rust::adapter));
    #[cfg(feature = "scala")]
    factories.push((
        scala::ScalaAdapter::NAME,
        scala::ScalaAdapter::ALIASES,
        scala::ScalaAdapter::EXTENSIONS,
        scala::adapter,
    ));
    #[cfg(feature = "typescript")]
    factories.push((
        typescript::TypeScriptAdapter::NAME,
        typescript::TypeScriptAdapter::ALIASES,
        typescript::TypeScriptAdapter::EXTENSIONS,
        typescript::adapter,
    ));
    #[cfg(feature = "tsx")]
    factories.push((
        typescript::TsxAdapter::NAME,
        typescript::TsxAdapter::ALIASES,
        typescript::TsxAdapter::EXTENSIONS,
        typescript::tsx_adapter,
    ));
    #[cfg(feature = "yaml")]
    factories.push((yaml::YamlAdapter::NAME, yaml::YamlAdapter::ALIASES, yaml::YamlAdapter::EXTENSIONS, yaml::adapter));

    factories
}
