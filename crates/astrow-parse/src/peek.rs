// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `peek` derivation, driven by `Options::peek_mode`/`peek_size`.

use astrow_core::PeekMode;
use tree_sitter::Node;

/// A bounded snippet of the source text covered by `node`, per `mode` and
/// `peek_size`. Returns `None` for `PeekMode::None`, an empty node, or
/// source that isn't valid UTF-8 at the node's byte boundaries — never
/// panics.
#[must_use]
pub fn extract<'a>(node: Node<'a>, source: &'a [u8], mode: PeekMode, peek_size: usize) -> Option<String> {
    if matches!(mode, PeekMode::None) {
        return None;
    }
    let text = node.utf8_text(source).ok()?;
    if text.is_empty() {
        return None;
    }
    let resolved = match mode {
        PeekMode::Auto if text.contains('\n') => PeekMode::Lines,
        PeekMode::Auto => PeekMode::Chars,
        other => other,
    };
    match resolved {
        PeekMode::Chars => Some(truncate_chars(text, peek_size)),
        PeekMode::Lines => Some(truncate_lines(text, peek_size)),
        PeekMode::None | PeekMode::Auto => None,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Whole leading lines (each including its trailing `\n`) up to
/// `max_chars` characters total; the last line kept may itself be
/// truncated if a single line already exceeds the budget.
fn truncate_lines(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for line in text.split_inclusive('\n') {
        let projected = out.chars().count() + line.chars().count();
        if projected > max_chars {
            if out.is_empty() {
                return truncate_chars(line, max_chars);
            }
            break;
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &[u8]) -> tree_sitter::Tree {
        let language = tree_sitter::Language::from(tree_sitter_python::LANGUAGE);
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&language).unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn none_mode_yields_nothing() {
        let source = b"x = 1\n";
        let tree = parse(source);
        assert_eq!(extract(tree.root_node(), source, PeekMode::None, 120), None);
    }

    #[test]
    fn auto_picks_chars_for_single_line() {
        let source = b"x = 1\n";
        let tree = parse(source);
        let node = tree.root_node().named_child(0).unwrap();
        let peek = extract(node, source, PeekMode::Auto, 120).unwrap();
        assert_eq!(peek, "x = 1");
    }

    #[test]
    fn chars_mode_truncates() {
        let source = b"x = 12345\n";
        let tree = parse(source);
        let node = tree.root_node().named_child(0).unwrap();
        let peek = extract(node, source, PeekMode::Chars, 3).unwrap();
        assert_eq!(peek, "x =");
    }

    #[test]
    fn lines_mode_keeps_whole_lines_within_budget() {
        let source = b"def f():\n    return 1\n";
        let tree = parse(source);
        let node = tree.root_node().named_child(0).unwrap();
        let peek = extract(node, source, PeekMode::Lines, 12).unwrap();
        assert_eq!(peek, "def f():\n");
    }
}
