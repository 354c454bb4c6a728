/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver function used to transform Quill source text into a
 * full Abstract Syntax Tree (AST).
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token consumption and lookahead utilities
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Program;
use crate::error::ParseError;
use crate::lexer::{Lexer, Token};

/// The core Quill recursive-descent parser.
///
/// The parser owns the lexer and drives it pull-by-pull: it holds
/// exactly one not-yet-consumed token (the lookahead) and requests the
/// next one only when that token is eaten. It never re-reads the source
/// text directly.
///
/// The grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional
/// `impl Parser` blocks.
pub struct Parser {
    /// The tokenizer this parser exclusively owns and drives.
    pub(crate) lexer: Lexer,

    /// The single next token, fetched but not yet consumed.
    pub(crate) lookahead: Token,
}

/// Public entry point for the Quill parsing phase.
///
/// Tokenizes and parses `source` in one blocking call, returning either
/// the full program tree or the first failure encountered.
///
/// # Example
/// ```
/// let program = quill::parser::parse("1+2*3").unwrap();
/// assert_eq!(program.to_string(), "(1+(2*3))");
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse()
}

impl Parser {
    /// Creates a parser over `source` and primes the lookahead with the
    /// first significant token.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token();
        Self { lexer, lookahead }
    }

    /// Parses the entire source into a [`Program`].
    ///
    /// This is the **main driver** of the recursive-descent parser: it
    /// consumes statements until the end-of-input token is observed.
    /// A source yielding zero statements is valid and produces an empty
    /// program.
    ///
    /// # Errors
    /// Returns the first lexical or syntactic failure; the parse is
    /// abandoned immediately with no partial result.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.program()
    }
}
