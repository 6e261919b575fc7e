// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide [`Registry`] mapping language names, aliases, and
//! file extensions to adapter instances.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use astrow_core::CoreError;
use dashmap::DashMap;

use crate::adapter::{LanguageAdapter, LanguageInfo};

type Factory = fn() -> Result<Arc<dyn LanguageAdapter>, CoreError>;

/// Process-wide registry of language adapter factories and their
/// lazily-constructed instances. Reads are lock-free after an adapter's
/// first construction (`DashMap`'s sharded locking only contends on the
/// shard being written).
pub struct Registry {
    factories: DashMap<&'static str, Factory>,
    instances: DashMap<&'static str, Arc<dyn LanguageAdapter>>,
    // Keys are the adapter-declared alias/extension strings, which are
    // static literals already lowercased by convention; `detect_from_path`
    // and `adapter_for` lowercase their *query* string before looking up.
    aliases: DashMap<&'static str, &'static str>,
    extensions: DashMap<&'static str, &'static str>,
}

impl Registry {
    fn new() -> Self {
        let registry = Self {
            factories: DashMap::new(),
            instances: DashMap::new(),
            aliases: DashMap::new(),
            extensions: DashMap::new(),
        };
        for (name, aliases, extensions, factory) in crate::adapters::built_in_factories() {
            registry.register_factory(name, aliases, extensions, factory);
        }
        registry
    }

    /// Register a factory for a language. Registration order doesn't
    /// matter; on an exact name collision the last call wins.
    pub fn register_factory(
        &self,
        name: &'static str,
        aliases: &'static [&'static str],
        extensions: &'static [&'static str],
        factory: Factory,
    ) {
        self.factories.insert(name, factory);
        self.instances.remove(name);
        self.aliases.insert(name, name);
        for alias in aliases {
            self.aliases.insert(alias, name);
        }
        for ext in extensions {
            self.extensions.insert(ext, name);
            self.aliases.insert(ext, name);
        }
    }

    fn canonicalize(&self, name: &str) -> Option<&'static str> {
        let lower = name.to_ascii_lowercase();
        self.aliases.get(lower.as_str()).map(|r| *r)
    }

    /// Resolve a language name or alias to its adapter, constructing it
    /// on first use and retaining it for the process lifetime.
    pub fn adapter_for(&self, name: &str) -> Result<Arc<dyn LanguageAdapter>, CoreError> {
        let canonical = self
            .canonicalize(name)
            .ok_or_else(|| CoreError::UnknownLanguage(name.to_owned()))?;

        if let Some(existing) = self.instances.get(canonical) {
            return Ok(Arc::clone(&existing));
        }

        tracing::debug!(language = canonical, "constructing language adapter");
        let factory = *self
            .factories
            .get(canonical)
            .ok_or_else(|| CoreError::UnknownLanguage(name.to_owned()))?;
        let adapter = factory()?;
        self.instances.insert(canonical, Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Detect a language from a file's lowercased extension. Returns
    /// `None` for extensionless files or unrecognized extensions.
    #[must_use]
    pub fn detect_from_path(&self, path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        self.extensions.get(ext.as_str()).map(|r| *r)
    }

    /// Every built-in language, with its declared aliases and
    /// extensions, for `ast_supported_languages()`.
    #[must_use]
    pub fn supported_languages(&self) -> Vec<LanguageInfo> {
        let mut by_language: std::collections::BTreeMap<&'static str, LanguageInfo> =
            std::collections::BTreeMap::new();
        for entry in &self.factories {
            by_language.entry(*entry.key()).or_insert(LanguageInfo {
                language: entry.key(),
                aliases: Vec::new(),
                extensions: Vec::new(),
            });
        }
        for entry in &self.aliases {
            if let Some(info) = by_language.get_mut(entry.value()) {
                if info.language != *entry.key() {
                    info.aliases.push(entry.key());
                }
            }
        }
        for entry in &self.extensions {
            if let Some(info) = by_language.get_mut(entry.value()) {
                info.extensions.push(entry.key());
            }
        }
        by_language.into_values().collect()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, initialized with all built-in adapters on
/// first access.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}
