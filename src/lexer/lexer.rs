/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   The pull-model tokenizer: hands the parser one significant
 *            token at a time, on demand.
 *
 * Author:    Quill Contributors
 *
 * License:
 * This file is part of the Quill language front-end project.
 *
 * Quill is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::lexer::rules::rules;
use crate::lexer::token::{Token, TokenKind};

/// The Quill tokenizer.
///
/// The lexer owns the full source text and a cursor into it. It performs
/// **no work up front**: each call to [`Lexer::next_token`] scans just far
/// enough to classify the next significant token and advances the cursor
/// past it. The parser pulls tokens one at a time through this interface
/// and never re-reads the source directly.
pub struct Lexer {
    /// The complete source text being tokenized.
    source: String,

    /// Byte offset of the first unconsumed character.
    cursor: usize,
}

impl Lexer {
    /// Creates a new lexer over the given source text.
    ///
    /// The cursor starts at offset `0`; no token is scanned until the
    /// first [`Lexer::next_token`] call.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            cursor: 0,
        }
    }

    /// Whether unconsumed input remains.
    fn has_more(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Scans and returns the next significant token.
    ///
    /// # Behavior
    /// - Returns [`Token::eof`] once the cursor reaches the end of the
    ///   source.
    /// - Otherwise tries the lexical rule table strictly in order against
    ///   the unconsumed remainder; the first rule matching a non-empty
    ///   prefix wins.
    /// - Spans matched by an `Ignore` rule (whitespace, comments) are
    ///   consumed and scanning restarts, so insignificant input never
    ///   becomes a token.
    /// - If no rule matches, returns a token of kind [`TokenKind::Error`]
    ///   with an empty lexeme. The parser treats that as a fatal lexical
    ///   failure.
    ///
    /// The cursor always advances by exactly the matched span's length,
    /// so repeated calls walk the source left to right without
    /// backtracking.
    pub fn next_token(&mut self) -> Token {
        'scan: loop {
            if !self.has_more() {
                return Token::eof();
            }

            let rest = &self.source[self.cursor..];

            for (pattern, kind) in rules() {
                let Some(matched) = pattern.find(rest) else {
                    // This rule didn't match; try the next one in order.
                    continue;
                };

                self.cursor += matched.end();

                if *kind == TokenKind::Ignore {
                    // Whitespace or a comment: swallow it and rescan.
                    continue 'scan;
                }

                return Token {
                    kind: *kind,
                    lexeme: matched.as_str().to_string(),
                };
            }

            // Nothing in the rule table matched the remaining input.
            return Token {
                kind: TokenKind::Error,
                lexeme: String::new(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drains the lexer into a vector, including the final EOF token.
    fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = matches!(token.kind, TokenKind::Eof | TokenKind::Error);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_yields_eof_immediately() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn keywords_respect_word_boundaries() {
        let tokens = tokenize("let letter = 5");

        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[0].lexeme, "let");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "letter");
        assert_eq!(tokens[2].kind, TokenKind::SimpleAssign);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn keyword_prefix_lexes_as_single_identifier() {
        let tokens = tokenize("lettuce");

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "lettuce");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn comments_and_whitespace_never_become_tokens() {
        assert_eq!(
            kinds("1 /* c */ + // c\n 2"),
            vec![
                TokenKind::Number,
                TokenKind::Additive,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn block_comment_is_non_greedy() {
        // The first */ must close the comment.
        assert_eq!(
            kinds("/* a */ x /* b */"),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn two_character_operators_win_over_single() {
        let tokens = tokenize("<= >= == != && || < > !");

        let expected = [
            (TokenKind::Relational, "<="),
            (TokenKind::Relational, ">="),
            (TokenKind::Equality, "=="),
            (TokenKind::Equality, "!="),
            (TokenKind::LogicalAnd, "&&"),
            (TokenKind::LogicalOr, "||"),
            (TokenKind::Relational, "<"),
            (TokenKind::Relational, ">"),
            (TokenKind::LogicalNot, "!"),
        ];

        for (token, (kind, lexeme)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.lexeme, lexeme);
        }
    }

    #[test]
    fn simple_and_compound_assignment_are_distinct() {
        let tokens = tokenize("= += -= *= /=");

        assert_eq!(tokens[0].kind, TokenKind::SimpleAssign);
        for token in &tokens[1..5] {
            assert_eq!(token.kind, TokenKind::ComplexAssign);
        }
        assert_eq!(tokens[1].lexeme, "+=");
        assert_eq!(tokens[4].lexeme, "/=");
    }

    #[test]
    fn string_literals_keep_both_quote_styles() {
        let tokens = tokenize(r#""double" 'single'"#);

        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].lexeme, "\"double\"");
        assert_eq!(tokens[1].kind, TokenKind::Str);
        assert_eq!(tokens[1].lexeme, "'single'");
    }

    #[test]
    fn delimiters_and_member_chain_tokens() {
        assert_eq!(
            kinds("a.b[c]();"),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::LBracket,
                TokenKind::Identifier,
                TokenKind::RBracket,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unmatched_input_yields_error_token() {
        let tokens = tokenize("1 @ 2");

        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].lexeme, "");
    }

    #[test]
    fn all_keywords_are_recognized() {
        let source = "let if else true false null def return \
                      while do for class this extends super new";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Let,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Def,
                TokenKind::Return,
                TokenKind::While,
                TokenKind::Do,
                TokenKind::For,
                TokenKind::Class,
                TokenKind::This,
                TokenKind::Extends,
                TokenKind::Super,
                TokenKind::New,
                TokenKind::Eof,
            ]
        );
    }
}
