// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The file resolver: turns a single pattern or an
//! ordered list of patterns into a deterministic, deduplicated, sorted
//! sequence of files, each tagged with its detected or overridden
//! language.
//!
//! A pattern is a glob iff it contains any of `* ? [ {`; globs are
//! expanded by walking their nearest non-glob ancestor directory with
//! [`ignore::WalkBuilder`] (gitignore handling disabled, so the walk is
//! independent of any `.gitignore`/`.ignore` present in the tree being
//! queried) and matching each entry against a [`globset::Glob`] compiled
//! from the full pattern.

mod pattern;
mod resolved;

use std::path::{Path, PathBuf};

use astrow_core::CoreError;
use astrow_languages::registry::Registry;

pub use pattern::Patterns;
pub use resolved::ResolvedFile;

/// Resolve `patterns` into a sorted, deduplicated list of files, each
/// tagged with a language.
///
/// `language_override`, if given, is applied to every resolved file
/// instead of detecting it from the extension. `ignore_errors` downgrades
/// per-file [`CoreError::FileNotFound`]/[`CoreError::ReadError`]/
/// [`CoreError::UnknownLanguage`] failures to a dropped entry rather than
/// a call-aborting error.
pub fn resolve(
    patterns: &Patterns,
    language_override: Option<&str>,
    ignore_errors: bool,
    registry: &Registry,
) -> Result<Vec<ResolvedFile>, CoreError> {
    let raw = patterns.as_slice();
    if raw.is_empty() {
        return Err(CoreError::InvalidInput(
            "pattern list must be non-empty".to_owned(),
        ));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for pattern in raw {
        match pattern::classify(pattern) {
            pattern::Kind::Literal => {
                paths.extend(resolve_literal(pattern, ignore_errors)?);
            }
            pattern::Kind::Glob => {
                paths.extend(resolve_glob(pattern, ignore_errors)?);
            }
        }
    }

    dedup_sorted(&mut paths);

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match tag_language(&path, language_override, registry) {
            Ok(language) => files.push(ResolvedFile { path, language }),
            Err(err) if ignore_errors => {
                tracing::debug!(path = %path.display(), error = %err, "dropping file: language detection failed");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(files)
}

fn resolve_literal(pattern: &str, ignore_errors: bool) -> Result<Vec<PathBuf>, CoreError> {
    let path = PathBuf::from(pattern);
    match path.metadata() {
        Ok(meta) if meta.is_file() => Ok(vec![path]),
        Ok(_) if ignore_errors => Ok(Vec::new()),
        Ok(_) => Err(CoreError::FileNotFound(path)),
        Err(_) if ignore_errors => Ok(Vec::new()),
        Err(_) => Err(CoreError::FileNotFound(path)),
    }
}

fn resolve_glob(pattern: &str, ignore_errors: bool) -> Result<Vec<PathBuf>, CoreError> {
    let glob = globset::GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| CoreError::InvalidInput(format!("invalid glob {pattern:?}: {e}")))?
        .compile_matcher();

    let base = pattern::glob_base(pattern);
    let base_exists = base.as_os_str().is_empty() || base.is_dir();
    if !base_exists {
        return if ignore_errors { Ok(Vec::new()) } else { Err(CoreError::FileNotFound(base)) };
    }
    let walk_root: &Path = if base.as_os_str().is_empty() { Path::new(".") } else { &base };

    let mut matches = Vec::new();
    let mut builder = ignore::WalkBuilder::new(walk_root);
    builder.git_ignore(false).ignore(false).parents(false).hidden(false);
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if ignore_errors {
                    tracing::debug!(%err, "skipping unreadable directory entry");
                    continue;
                }
                return Err(CoreError::ReadError {
                    path: walk_root.to_path_buf(),
                    source: std::io::Error::other(err.to_string()),
                });
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if glob.is_match(&path) || glob.is_match(path.strip_prefix(".").unwrap_or(&path)) {
            matches.push(path);
        }
    }
    Ok(matches)
}

fn dedup_sorted(paths: &mut Vec<PathBuf>) {
    let mut canonical: Vec<(PathBuf, PathBuf)> = paths
        .drain(..)
        .map(|p| {
            let key = p.canonicalize().unwrap_or_else(|_| p.clone());
            (key, p)
        })
        .collect();
    canonical.sort_by(|a, b| a.0.cmp(&b.0));
    canonical.dedup_by(|a, b| a.0 == b.0);
    paths.extend(canonical.into_iter().map(|(_, original)| original));
}

fn tag_language(
    path: &Path,
    language_override: Option<&str>,
    registry: &Registry,
) -> Result<&'static str, CoreError> {
    if let Some(lang) = language_override {
        return registry.adapter_for(lang).map(|a| a.language_name());
    }
    registry
        .detect_from_path(path)
        .ok_or_else(|| CoreError::UnknownLanguage(format!("{}", path.display())))
}

/// Read one file's bytes, mapping I/O failure to [`CoreError::ReadError`].
pub fn read_file(path: &Path) -> Result<Vec<u8>, CoreError> {
    std::fs::read(path).map_err(|source| CoreError::ReadError { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrow_languages::registry;
    use std::io::Write;

    fn write(dir: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn empty_pattern_list_is_invalid_input() {
        let patterns: Patterns = Vec::<String>::new().into();
        let err = resolve(&patterns, None, false, registry()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn missing_literal_fails_without_ignore_errors() {
        let patterns: Patterns = "definitely-missing-file.py".into();
        let err = resolve(&patterns, None, false, registry()).unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }

    #[test]
    fn missing_literal_ignored_when_requested() {
        let patterns: Patterns = "definitely-missing-file.py".into();
        let files = resolve(&patterns, None, true, registry()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn literal_path_resolves_with_detected_language() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "a.py", "x = 1\n");
        let patterns: Patterns = file.to_string_lossy().into_owned().into();
        let files = resolve(&patterns, None, false, registry()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].language, "python");
    }

    #[test]
    fn glob_expands_and_sorts_matches() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.py", "pass\n");
        write(dir.path(), "a.py", "pass\n");
        write(dir.path(), "c.txt", "not python\n");
        let pattern = format!("{}/*.py", dir.path().display());
        let patterns: Patterns = pattern.into();
        let files = resolve(&patterns, None, false, registry()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].path <= files[1].path);
    }

    #[test]
    fn pattern_list_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "a.py", "x = 1\n");
        let one: Patterns = vec![file.to_string_lossy().into_owned()].into();
        let two: Patterns = vec![file.to_string_lossy().into_owned(), file.to_string_lossy().into_owned()].into();
        let one_files = resolve(&one, None, false, registry()).unwrap();
        let two_files = resolve(&two, None, false, registry()).unwrap();
        assert_eq!(one_files.len(), two_files.len());
    }

    #[test]
    fn language_override_applies_to_every_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.py", "x = 1\n");
        let pattern = format!("{}/*.py", dir.path().display());
        let patterns: Patterns = pattern.into();
        let files = resolve(&patterns, Some("python"), false, registry()).unwrap();
        assert_eq!(files[0].language, "python");
    }

    #[test]
    fn recursive_glob_descends_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/pkg/mod.py", "pass\n");
        let pattern = format!("{}/**/*.py", dir.path().display());
        let patterns: Patterns = pattern.into();
        let files = resolve(&patterns, None, false, registry()).unwrap();
        assert_eq!(files.len(), 1);
    }
}
