// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic parsing demo: parses a small Rust snippet with `parse_ast` and
//! prints the flattened rows, then resolves a glob against this repo's
//! own source with `read_ast`.

use astrow::{parse_ast, read_ast, taxonomy, ContextLevel, Options, RowBatch};

fn main() {
    println!("astrow basic parsing demo");
    println!("=========================\n");

    let source = r#"
use std::collections::HashMap;

fn add_numbers(a: i32, b: i32) -> i32 {
    a + b
}

pub struct Calculator {
    history: Vec<i32>,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    pub fn add(&mut self, a: i32, b: i32) -> i32 {
        let result = a + b;
        self.history.push(result);
        result
    }
}
"#;

    println!("Parsing {} bytes of Rust source via parse_ast...\n", source.len());

    let batches = match parse_ast(source, "rust", Options::default()) {
        Ok(batches) => batches,
        Err(err) => {
            eprintln!("parse failed: {err}");
            std::process::exit(1);
        }
    };

    let rows: Vec<_> = batches.into_iter().flat_map(RowBatch::into_rows).collect();
    println!("{} rows\n", rows.len());

    println!("Definitions found:");
    for row in &rows {
        let Some(semantic_type) = row.node.semantic_type else { continue };
        if !taxonomy::is_definition(semantic_type) {
            continue;
        }
        let name = row.node.name.as_deref().unwrap_or("<anonymous>");
        println!(
            "  {:<28} {} (depth {}, lines {}-{})",
            taxonomy::semantic_type_to_string(semantic_type),
            name,
            row.node.depth.unwrap_or(0),
            row.node.start_line.unwrap_or(0),
            row.node.end_line.unwrap_or(0),
        );
    }

    println!("\nFunction parameters:");
    for row in &rows {
        if row.node.semantic_type != Some(taxonomy::DEFINITION_FUNCTION) {
            continue;
        }
        let name = row.node.name.as_deref().unwrap_or("<anonymous>");
        let params: Vec<&str> = row.node.parameters().iter().map(|p| p.name.as_str()).collect();
        println!("  {name}({})", params.join(", "));
    }

    println!("\nSupported languages: {}", astrow::ast_supported_languages().len());

    println!("\nResolving *.rs under src/ via read_ast (node-types-only, no per-file source columns)...");
    let options = Options::default().with_context(ContextLevel::NodeTypesOnly);
    match read_ast("src/*.rs", None, options) {
        Ok(reader) => {
            let mut total = 0usize;
            for batch in reader {
                match batch {
                    Ok(batch) => total += batch.len(),
                    Err(err) => {
                        eprintln!("read_ast error: {err}");
                        break;
                    }
                }
            }
            println!("  {total} rows total");
        }
        Err(err) => eprintln!("read_ast failed: {err}"),
    }
}
