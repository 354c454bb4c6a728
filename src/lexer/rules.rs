/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:      rules.rs
 * Purpose:   The ordered lexical rule table that drives the Quill
 *            tokenizer.
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

use crate::lexer::token::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// The lexical grammar of Quill as an ordered list of `(pattern, kind)`
/// pairs.
///
/// Every pattern is anchored with `^` so it can only match a prefix of
/// the unconsumed input. The lexer scans this table top to bottom and
/// takes the **first** rule that matches a non-empty prefix. That makes
/// the ordering itself part of the lexical grammar:
///
/// - Two-character operators (`<=`, `==`, `+=`, `&&`, ...) are listed
///   before any one-character rule they overlap with, so `!=` never
///   lexes as `!` followed by `=`.
/// - Keyword rules carry `\b` word-boundary anchors and come before the
///   generic identifier rule, so `lettuce` is a single identifier and
///   never `let` plus a remainder.
/// - The identifier rule is the deliberate catch-all for word
///   characters and must stay last among the word-shaped rules.
///
/// First-match priority, not longest match. Reorder at your peril.
const RULE_TABLE: [(&str, TokenKind); 41] = [
    // Whitespace
    (r"^\s+", TokenKind::Ignore),
    // Single-line comment
    (r"^//.*", TokenKind::Ignore),
    // Block comment
    (r"^/\*[\s\S]*?\*/", TokenKind::Ignore),
    // Symbols and delimiters
    (r"^\{", TokenKind::LBrace),
    (r"^\}", TokenKind::RBrace),
    (r"^\(", TokenKind::LParen),
    (r"^\)", TokenKind::RParen),
    (r"^\[", TokenKind::LBracket),
    (r"^\]", TokenKind::RBracket),
    (r"^,", TokenKind::Comma),
    (r"^;", TokenKind::Semicolon),
    (r"^\.", TokenKind::Dot),
    // Relational operators
    (r"^[<>]=?", TokenKind::Relational),
    (r"^[!=]=", TokenKind::Equality),
    // Logical operators
    (r"^&&", TokenKind::LogicalAnd),
    (r"^\|\|", TokenKind::LogicalOr),
    (r"^!", TokenKind::LogicalNot),
    // Assignment operators
    (r"^=", TokenKind::SimpleAssign),
    (r"^[+\-*/]=", TokenKind::ComplexAssign),
    // Math operators: +, -, *, /
    (r"^[+\-]", TokenKind::Additive),
    (r"^[*/]", TokenKind::Multiplicative),
    // Keywords
    (r"^\blet\b", TokenKind::Let),
    (r"^\bif\b", TokenKind::If),
    (r"^\belse\b", TokenKind::Else),
    (r"^\btrue\b", TokenKind::True),
    (r"^\bfalse\b", TokenKind::False),
    (r"^\bnull\b", TokenKind::Null),
    (r"^\bdef\b", TokenKind::Def),
    (r"^\breturn\b", TokenKind::Return),
    // OOP keywords
    (r"^\bclass\b", TokenKind::Class),
    (r"^\bthis\b", TokenKind::This),
    (r"^\bextends\b", TokenKind::Extends),
    (r"^\bsuper\b", TokenKind::Super),
    (r"^\bnew\b", TokenKind::New),
    // Iterator keywords
    (r"^\bwhile\b", TokenKind::While),
    (r"^\bdo\b", TokenKind::Do),
    (r"^\bfor\b", TokenKind::For),
    // Literals
    (r"^\d+", TokenKind::Number),
    (r#"^"[^"]*""#, TokenKind::Str),
    (r"^'[^']*'", TokenKind::Str),
    (r"^\w+", TokenKind::Identifier),
];

static RULES: OnceLock<Vec<(Regex, TokenKind)>> = OnceLock::new();

/// Returns the compiled rule set, compiling it on first use.
///
/// Compilation happens exactly once per process; every `Lexer` instance
/// shares the same compiled table. Scanning stays a plain linear pass so
/// the priority order above is preserved exactly.
pub(crate) fn rules() -> &'static [(Regex, TokenKind)] {
    RULES.get_or_init(|| {
        RULE_TABLE
            .iter()
            .map(|&(pattern, kind)| {
                let regex = Regex::new(pattern)
                    .expect("lexical rule table patterns are all valid");
                (regex, kind)
            })
            .collect()
    })
}
