/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Quill tokenizer.
 *
 * This module wires together the lexical analysis sub-modules:
 *   - Token model (categories + lexemes)
 *   - The ordered lexical rule table
 *   - The pull-model lexer itself
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

/// Token model:
/// - `TokenKind` closed category enumeration
/// - `Token` (kind + lexeme)
pub mod token;

/// The ordered, precompiled lexical rule table.
/// First-match priority order is a correctness contract.
pub(crate) mod rules;

/// The pull-model lexer:
/// - Owns `(source, cursor)` state
/// - Exposes `next_token()` for the parser to drive
pub mod lexer;

/// Re-exports so callers can use `crate::lexer::{Lexer, Token, TokenKind}`.
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
