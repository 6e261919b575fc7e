// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern classification: literal vs. glob, and the
//! non-glob ancestor directory a glob pattern is walked from.

use std::path::{Path, PathBuf};

const GLOB_CHARS: [char; 4] = ['*', '?', '[', '{'];

pub(crate) enum Kind {
    Literal,
    Glob,
}

/// A pattern is a glob iff it contains any of `* ? [ {`.
pub(crate) fn classify(pattern: &str) -> Kind {
    if pattern.chars().any(|c| GLOB_CHARS.contains(&c)) {
        Kind::Glob
    } else {
        Kind::Literal
    }
}

/// The longest path prefix of `pattern` containing no glob metacharacter,
/// i.e. the directory a glob's matches are walked from. Empty for a
/// pattern that is all-glob from its first component (e.g. `"*.py"`),
/// meaning "walk from the current directory".
pub(crate) fn glob_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    for component in Path::new(pattern).components() {
        if component.as_os_str().to_string_lossy().chars().any(|c| GLOB_CHARS.contains(&c)) {
            break;
        }
        base.push(component);
    }
    base
}

/// Input accepted by [`crate::resolve`]: a single pattern string, or a
/// non-empty ordered list of them.
#[derive(Debug, Clone, Default)]
pub struct Patterns(Vec<String>);

impl Patterns {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self(vec![pattern.to_owned()])
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self(vec![pattern])
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

impl From<Vec<&str>> for Patterns {
    fn from(patterns: Vec<&str>) -> Self {
        Self(patterns.into_iter().map(str::to_owned).collect())
    }
}

impl<'a> From<&'a [&'a str]> for Patterns {
    fn from(patterns: &'a [&'a str]) -> Self {
        Self(patterns.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_is_literal() {
        assert!(matches!(classify("src/main.rs"), Kind::Literal));
    }

    #[test]
    fn star_question_bracket_brace_are_glob() {
        assert!(matches!(classify("src/*.rs"), Kind::Glob));
        assert!(matches!(classify("src/f?o.rs"), Kind::Glob));
        assert!(matches!(classify("src/[ab].rs"), Kind::Glob));
        assert!(matches!(classify("src/{a,b}.rs"), Kind::Glob));
    }

    #[test]
    fn glob_base_stops_before_first_glob_component() {
        assert_eq!(glob_base("src/pkg/**/*.py"), PathBuf::from("src/pkg"));
    }

    #[test]
    fn glob_base_is_empty_when_first_component_is_glob() {
        assert_eq!(glob_base("*.py"), PathBuf::new());
    }
}
