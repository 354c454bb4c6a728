/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Thin command-line driver for the Quill front-end.
 *
 * Author:   Quill Contributors
 *
 * License:
 * This file is part of the Quill language front-end project.
 *
 * Quill is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use quill::diagnostics::DiagnosticPrinter;
use std::env;
use std::process;

/// Demo input used when no source argument is supplied.
const DEMO_SOURCE: &str =
    "a.b.c.d.e.f.g[h].i.j.k.invoke()()()()()()(a, b, c)";

/// Parses the source given on the command line (or the demo input) and
/// prints the resulting tree's canonical text. With `--ast`, also dumps
/// the tree as pretty-printed JSON.
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let dump_ast = args.iter().any(|arg| arg == "--ast");
    let source = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .unwrap_or(DEMO_SOURCE);

    match quill::parse(source) {
        Ok(program) => {
            println!("{}", program);

            if dump_ast {
                match serde_json::to_string_pretty(&program) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("error: failed to serialize AST: {}", error);
                        process::exit(1);
                    }
                }
            }
        }
        Err(error) => {
            DiagnosticPrinter::new("<argv>").print(&error);
            process::exit(1);
        }
    }
}
