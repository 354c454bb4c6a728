/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Human-friendly rendering of front-end failures.
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

use crate::error::ParseError;

/// Renders compiler-style diagnostics for Quill parse errors.
///
/// Output is intentionally inspired by `rustc` diagnostics, simplified
/// for Quill: a stable error code, the message, the source name, and an
/// optional follow-up hint. The front-end does not track source
/// positions, so there is no line/caret rendering.
pub struct DiagnosticPrinter {
    /// Name of the source being parsed (e.g. `main.ql`, `<argv>`).
    ///
    /// Used only for display purposes in diagnostics.
    source_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[Q0002]: unexpected token: end of input, expected: ')'
    ///   --> <argv>
    /// help: the source ends mid-expression; check for an unclosed delimiter
    /// ```
    pub fn print(&self, error: &ParseError) {
        eprintln!("error[{}]: {}", error.code(), error);
        eprintln!("  --> {}", self.source_name);

        if let Some(help) = error.help() {
            eprintln!("help: {}", help);
        }
    }
}
