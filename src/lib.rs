/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Library root for the Quill language front-end.
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

//! The Quill language front-end: a pull-model tokenizer, a
//! recursive-descent parser with one-token lookahead, and a closed AST
//! node model with canonical textual rendering.
//!
//! ```
//! let program = quill::parse("a = 1 + 2 * 3").unwrap();
//! assert_eq!(program.to_string(), "a = (1+(2*3))");
//! ```
//!
//! The front-end stops at the tree: no name resolution, no type
//! checking, no evaluation. Failures are explicit values, never panics:
//! the first lexical or syntactic error aborts the parse and surfaces
//! as a [`ParseError`].

/// Abstract syntax tree: closed node model + canonical rendering.
pub mod ast;

/// Compiler-style rendering of parse failures.
pub mod diagnostics;

/// The shared front-end error model.
pub mod error;

/// Lexical analysis: token model, rule table, pull-model lexer.
pub mod lexer;

/// Syntactic analysis: the recursive-descent parser.
pub mod parser;

pub use ast::{Expr, NodeKind, Program, Stmt};
pub use error::ParseError;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
