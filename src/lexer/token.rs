/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types produced by the
 *            Quill tokenizer and consumed by the parser.
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

use std::fmt;

/// Represents the **category of a lexical token** in the Quill language.
///
/// `TokenKind` is a closed enumeration: every unit of source text the
/// tokenizer emits belongs to exactly one of these categories, and the
/// parser drives its entire grammar off this tag.
///
/// # Front-End Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
///
/// Two categories are sentinels rather than real tokens:
/// - [`TokenKind::Eof`] marks exhausted input.
/// - [`TokenKind::Error`] marks input no lexical rule could match.
///
/// A third, [`TokenKind::Ignore`], tags whitespace and comments inside the
/// rule table; the lexer consumes such spans silently and they never reach
/// the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Symbols and delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Dot,

    // Keywords
    Let,
    If,
    Else,
    True,
    False,
    Null,
    Def,
    Return,

    // Iterator keywords
    While,
    Do,
    For,

    // OOP keywords
    Class,
    This,
    Extends,
    Super,
    New,

    // Literals
    Number,
    Str,
    Identifier,

    // Operators
    SimpleAssign,
    ComplexAssign,
    Relational,
    Equality,
    Additive,
    Multiplicative,
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    /// Whitespace and comments. Consumed by the lexer, never emitted.
    Ignore,

    /// End of input sentinel.
    Eof,

    /// No lexical rule matched. Fatal for any parse in progress.
    Error,
}

impl fmt::Display for TokenKind {
    /// Formats a token category for **user-facing error messages**.
    ///
    /// Punctuation and keywords print as their quoted source spelling
    /// (`')'`, `'let'`), while open classes print as a short description
    /// (`identifier`, `number literal`). Parse errors interpolate these
    /// names directly, so they are written to read well after
    /// `expected:` / `found:`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Let => "'let'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Def => "'def'",
            TokenKind::Return => "'return'",
            TokenKind::While => "'while'",
            TokenKind::Do => "'do'",
            TokenKind::For => "'for'",
            TokenKind::Class => "'class'",
            TokenKind::This => "'this'",
            TokenKind::Extends => "'extends'",
            TokenKind::Super => "'super'",
            TokenKind::New => "'new'",
            TokenKind::Number => "number literal",
            TokenKind::Str => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::SimpleAssign => "'='",
            TokenKind::ComplexAssign => "compound assignment operator",
            TokenKind::Relational => "relational operator",
            TokenKind::Equality => "equality operator",
            TokenKind::Additive => "additive operator",
            TokenKind::Multiplicative => "multiplicative operator",
            TokenKind::LogicalAnd => "'&&'",
            TokenKind::LogicalOr => "'||'",
            TokenKind::LogicalNot => "'!'",
            TokenKind::Ignore => "insignificant input",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "unrecognized input",
        };
        write!(f, "{}", name)
    }
}

/// Represents a **single lexical token** produced by the Quill lexer.
///
/// A token pairs its category with the exact source text that matched:
/// ```text
/// let      →  { kind: Let,        lexeme: "let" }
/// letter   →  { kind: Identifier, lexeme: "letter" }
/// 42       →  { kind: Number,     lexeme: "42" }
/// ```
///
/// Tokens are produced fresh on each pull from the lexer and live only in
/// the parser's one-token lookahead slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Preserved verbatim; the parser reads operator spellings and
    /// literal values out of this field. Empty for the `Eof` and
    /// `Error` sentinels.
    pub lexeme: String,
}

impl Token {
    /// Builds the end-of-input sentinel token.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
        }
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, the text the user actually wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
