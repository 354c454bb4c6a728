/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  The parse error model shared by the lexer and parser.
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

use crate::lexer::TokenKind;
use std::fmt;

/// A fatal front-end failure.
///
/// Parsing either produces a full `Program` or exactly one of these:
/// the first failure aborts the parse, with no recovery and no partial
/// result. The enum is closed so tests and callers can match on the
/// precise failure and on the offending/expected categories it carries.
///
/// Every variant has a stable error code (see [`ParseError::code`]) used
/// by the diagnostic printer.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The tokenizer could not match any lexical rule against the
    /// remaining input. Lexical failure, code `Q0001`.
    UnrecognizedInput,

    /// The current grammar rule required one token category but the
    /// lookahead carried another. Code `Q0002`.
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
    },

    /// Input ended where the grammar still required a token. Code
    /// `Q0003`.
    UnexpectedEndOfInput { expected: TokenKind },

    /// A primary-expression position was reached with no applicable
    /// production for the lookahead. Code `Q0004`.
    UnexpectedPrimary { found: TokenKind },

    /// A digit run matched the numeric literal rule but does not fit in
    /// a 64-bit integer. Code `Q0005`.
    InvalidNumericLiteral(String),
}

impl ParseError {
    /// Stable error code for this failure (Q0001, Q0002, ...).
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnrecognizedInput => "Q0001",
            ParseError::UnexpectedToken { .. } => "Q0002",
            ParseError::UnexpectedEndOfInput { .. } => "Q0003",
            ParseError::UnexpectedPrimary { .. } => "Q0004",
            ParseError::InvalidNumericLiteral(_) => "Q0005",
        }
    }

    /// Optional follow-up hint for the diagnostic printer.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::UnrecognizedInput => {
                Some("the source contains a character outside the Quill lexical grammar")
            }
            ParseError::UnexpectedEndOfInput { .. } => {
                Some("the source ends mid-expression; check for an unclosed delimiter")
            }
            ParseError::InvalidNumericLiteral(_) => {
                Some("numeric literals must fit in a signed 64-bit integer")
            }
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedInput => {
                write!(f, "unrecognized input: no lexical rule matches")
            }
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token: {}, expected: {}", found, expected)
            }
            ParseError::UnexpectedEndOfInput { expected } => {
                write!(f, "unexpected end of input, expected: {}", expected)
            }
            ParseError::UnexpectedPrimary { found } => {
                write!(f, "unexpected {} in primary expression position", found)
            }
            ParseError::InvalidNumericLiteral(text) => {
                write!(f, "numeric literal out of range: {}", text)
            }
        }
    }
}

impl std::error::Error for ParseError {}
