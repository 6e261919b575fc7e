// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `read_ast`: the streaming, multi-file driver. Resolves
//! patterns once up front, then lazily parses and
//! flattens one file at a time as the caller pulls batches, so memory is
//! bounded by at most two files' node arrays (the one being drained and,
//! when prefetching, the one already parsing in the background) plus one
//! in-progress batch.
//!
//! Prefetch: when `Options::source` isn't `Full`, peek/column derivation
//! is cheap enough that the next file's parse is kicked off on the
//! `rayon` global pool while the current file's rows drain, then joined
//! via a bounded channel when needed. Emission order is unaffected — the
//! channel is always drained in resolver order, never raced against.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver};
use std::sync::Arc;

use astrow_core::{CoreError, Options, SourceLevel};
use astrow_fs::{Patterns, ResolvedFile};
use astrow_languages::adapter::LanguageAdapter;
use astrow_languages::registry::{registry, Registry};
use astrow_parse::{flatten, Node};

use crate::batch::{Row, RowBatch};

/// A handle another thread can use to stop an in-flight [`AstReader`]
/// between batches or files.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

struct ParsedFile {
    resolved: ResolvedFile,
    nodes: Vec<Node>,
}

type FileResult = Result<ParsedFile, CoreError>;

struct CurrentFile {
    parsed: ParsedFile,
    file_path: Arc<str>,
    language: &'static str,
    index: usize,
}

/// Parse `source` with `adapter` and flatten it, stamping any
/// [`CoreError::ParseError`] with the file's real path (the adapter
/// itself doesn't know which file it's parsing).
fn parse_one(resolved: ResolvedFile, adapter: Arc<dyn LanguageAdapter>, options: Options) -> FileResult {
    let source = astrow_fs::read_file(&resolved.path)?;
    let tree = adapter.parse(&source).map_err(|err| match err {
        CoreError::ParseError { reason, .. } => CoreError::ParseError { path: resolved.path.clone(), reason },
        other => other,
    })?;
    let nodes = flatten(&tree, &source, adapter.as_ref(), &options);
    Ok(ParsedFile { resolved, nodes })
}

fn parse_sync(registry: &'static Registry, resolved: ResolvedFile, options: Options) -> FileResult {
    let adapter = registry.adapter_for(resolved.language)?;
    parse_one(resolved, adapter, options)
}

fn spawn_prefetch(registry: &'static Registry, resolved: ResolvedFile, options: Options) -> Receiver<FileResult> {
    let (tx, rx) = sync_channel(1);
    rayon::spawn(move || {
        let result = parse_sync(registry, resolved, options);
        // The receiver only goes away if the reader was dropped mid-flight
        // (e.g. the caller stopped iterating); a failed send is fine to drop.
        let _ = tx.send(result);
    });
    rx
}

/// Parsing ahead is only worth it when the per-node work the flattener
/// does is cheap relative to parse time — i.e. when full-fidelity source
/// columns aren't requested.
fn prefetch_worthwhile(options: &Options) -> bool {
    !matches!(options.source, SourceLevel::Full)
}

/// The streaming driver behind `read_ast`. Implements
/// [`Iterator`] over [`RowBatch`]es; batches are emitted in resolver
/// order, rows within a file in `node_id` order, and the iterator never
/// looks ahead past the file currently being prefetched.
pub struct AstReader {
    registry: &'static Registry,
    options: Options,
    files: std::vec::IntoIter<ResolvedFile>,
    pending: Option<Receiver<FileResult>>,
    current: Option<CurrentFile>,
    cancel: CancelToken,
    done: bool,
}

impl AstReader {
    fn from_files(files: Vec<ResolvedFile>, registry: &'static Registry, options: Options) -> Self {
        let mut files = files.into_iter();
        let pending = if prefetch_worthwhile(&options) {
            files.next().map(|first| spawn_prefetch(registry, first, options))
        } else {
            None
        };
        Self { registry, options, files, pending, current: None, cancel: CancelToken::new(), done: false }
    }

    /// A cancellation handle for this reader; cloning it and calling
    /// [`CancelToken::cancel`] from another thread stops iteration at the
    /// next batch or file boundary.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Pull the next file into `self.current`, kicking off a prefetch for
    /// the file after it. `Ok(false)` means the file list is exhausted.
    fn advance_file(&mut self) -> Result<bool, CoreError> {
        let result = if let Some(rx) = self.pending.take() {
            match rx.recv() {
                Ok(result) => result,
                Err(err) => {
                    return Err(CoreError::AdapterInitError(format!(
                        "prefetch worker dropped its sender: {err}"
                    )))
                }
            }
        } else if let Some(resolved) = self.files.next() {
            parse_sync(self.registry, resolved, self.options)
        } else {
            return Ok(false);
        };

        if prefetch_worthwhile(&self.options) {
            if let Some(next_resolved) = self.files.next() {
                self.pending = Some(spawn_prefetch(self.registry, next_resolved, self.options));
            }
        }

        let parsed = result?;
        let file_path: Arc<str> = Arc::from(parsed.resolved.path.to_string_lossy().into_owned());
        let language = parsed.resolved.language;
        self.current = Some(CurrentFile { parsed, file_path, language, index: 0 });
        Ok(true)
    }
}

impl Iterator for AstReader {
    type Item = Result<RowBatch, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut batch = RowBatch::with_capacity(self.options.batch_size.max(1));
        loop {
            if self.cancel.is_cancelled() {
                self.done = true;
                break;
            }

            if self.current.is_none() {
                match self.advance_file() {
                    Ok(true) => {}
                    Ok(false) => {
                        self.done = true;
                        break;
                    }
                    Err(err) => {
                        if self.options.ignore_errors {
                            tracing::warn!(error = %err, "skipping file after error");
                            continue;
                        }
                        self.done = true;
                        return Some(Err(err));
                    }
                }
            }

            let Some(current) = &mut self.current else { break };
            let Some(node) = current.parsed.nodes.get(current.index).cloned() else {
                self.current = None;
                continue;
            };
            let file_path = Arc::clone(&current.file_path);
            let language = current.language;
            current.index += 1;
            if current.index >= current.parsed.nodes.len() {
                self.current = None;
            }

            if batch.push(Row { node, file_path, language }) {
                break;
            }
        }

        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

/// `read_ast(patterns, language, options)`: resolve
/// `patterns` and return a lazily-parsing, bounded-memory iterator of
/// [`RowBatch`]es.
pub fn read_ast(
    patterns: impl Into<Patterns>,
    language: Option<&str>,
    options: Options,
) -> Result<AstReader, CoreError> {
    let registry = registry();
    let patterns = patterns.into();
    let files = astrow_fs::resolve(&patterns, language, options.ignore_errors, registry)?;
    Ok(AstReader::from_files(files, registry, options))
}

/// Synthetic `file_path` used by [`crate::parse_ast`].
pub const INLINE_PATH: &str = "<inline>";
