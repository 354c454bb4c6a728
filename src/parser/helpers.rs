/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
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
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Consumes the lookahead token, requiring it to carry `expected`.
    ///
    /// On success the consumed token is returned and the lookahead slot
    /// is refilled with the next token pulled from the lexer. This is
    /// the parser's **only** consumption point; every grammar rule
    /// advances through it.
    ///
    /// # Errors
    /// - [`ParseError::UnrecognizedInput`] if the lookahead is the
    ///   lexer's error sentinel: lexical failure is fatal wherever it
    ///   is observed.
    /// - [`ParseError::UnexpectedEndOfInput`] if the input ended while
    ///   a token was still required.
    /// - [`ParseError::UnexpectedToken`] on any other category
    ///   mismatch, naming both the found and the expected categories.
    pub(crate) fn eat(
        &mut self,
        expected: TokenKind,
    ) -> Result<Token, ParseError> {
        match self.lookahead.kind {
            TokenKind::Error => return Err(ParseError::UnrecognizedInput),
            TokenKind::Eof => {
                return Err(ParseError::UnexpectedEndOfInput { expected })
            }
            found if found != expected => {
                return Err(ParseError::UnexpectedToken { found, expected })
            }
            _ => {}
        }

        let next = self.lexer.next_token();
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Whether `kind` is a simple or compound assignment operator.
    pub(crate) fn is_assignment_operator(&self, kind: TokenKind) -> bool {
        kind == TokenKind::SimpleAssign || kind == TokenKind::ComplexAssign
    }

    /// Whether `kind` begins a literal production.
    pub(crate) fn is_literal(&self, kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Number
                | TokenKind::Str
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}
