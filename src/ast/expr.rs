/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  The closed expression node model and its canonical textual
 *           rendering.
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

use crate::ast::NodeKind;
use serde::Serialize;
use std::fmt;

/// An expression node in the Quill AST.
///
/// `Expr` is a closed sum type with one variant per expression form the
/// grammar can produce. Children are owned exclusively by their parent
/// (`Box`/`Vec`), so a parse result is a pure ownership tree rooted at
/// [`crate::ast::Program`] with no sharing and no back-edges. Nodes are
/// built once during parsing and never mutated afterwards.
///
/// Operator-bearing variants store the operator's source spelling
/// (`"+"`, `"+="`, `"&&"`, ...) rather than a token category, since one
/// category can cover several spellings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// A 64-bit integer literal, e.g. `123`.
    Number(i64),

    /// A string literal with its quotes stripped, e.g. `"foo"`, 'bar'.
    Str(String),

    /// `true` or `false`.
    Boolean(bool),

    /// The `null` literal.
    Null,

    /// A user-defined name, e.g. `foo`.
    Identifier(String),

    /// The `this` keyword.
    This,

    /// The `super` keyword. Only ever appears as a call callee; the
    /// grammar requires `super` to be immediately called.
    Super,

    /// An assignment, simple or compound: `foo = bar`, `foo += bar`.
    ///
    /// The grammar accepts any expression on the left; restricting the
    /// target to identifier/member forms is left to a later semantic
    /// pass.
    Assign {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// A logical operation: `a || b`, `a && b`. Equality (`==`, `!=`)
    /// also folds into this variant, intentionally: equality results
    /// are treated as logical values downstream.
    Logical {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// An arithmetic or relational operation: `a + b`, `a < b`.
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// A prefix operation: `-foo`, `+bar`, `!baz`.
    Unary {
        operator: String,
        operand: Box<Expr>,
    },

    /// A property access: `foo.bar` (non-computed, property is an
    /// identifier) or `foo[expr]` (computed, property is any
    /// expression).
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
    },

    /// A call: `foo()`, `bar(a, b)`, `f()()`.
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },

    /// A constructor call: `new Point(1, 2)`.
    New {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    /// Returns this node's category tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Number(_) => NodeKind::NumericLiteral,
            Expr::Str(_) => NodeKind::StringLiteral,
            Expr::Boolean(_) => NodeKind::BooleanLiteral,
            Expr::Null => NodeKind::NullLiteral,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::This => NodeKind::This,
            Expr::Super => NodeKind::Super,
            Expr::Assign { .. } => NodeKind::Assignment,
            Expr::Logical { .. } => NodeKind::Logical,
            Expr::Binary { .. } => NodeKind::Binary,
            Expr::Unary { .. } => NodeKind::Unary,
            Expr::Member { .. } => NodeKind::Member,
            Expr::Call { .. } => NodeKind::Call,
            Expr::New { .. } => NodeKind::New,
        }
    }
}

/// Renders a call argument list as `a, b, c`.
fn render_arguments(arguments: &[Expr]) -> String {
    arguments
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Expr {
    /// Renders the canonical textual form of this expression.
    ///
    /// The output makes grouping explicit rather than reproducing the
    /// original source: binary and logical operations are always
    /// parenthesized (`(1+(2*3))`), assignments are spaced
    /// (`x = (1+2)`), and original whitespace and comments are gone.
    /// It is a debugging and inspection artifact, not a formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Str(value) => write!(f, "\"{}\"", value),
            Expr::Boolean(true) => write!(f, "true"),
            Expr::Boolean(false) => write!(f, "false"),
            Expr::Null => write!(f, "null"),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::This => write!(f, "this"),
            Expr::Super => write!(f, "super"),
            Expr::Assign {
                operator,
                left,
                right,
            } => write!(f, "{} {} {}", left, operator, right),
            Expr::Logical {
                operator,
                left,
                right,
            }
            | Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({}{}{})", left, operator, right),
            Expr::Unary { operator, operand } => {
                write!(f, "({}{})", operator, operand)
            }
            Expr::Member {
                object,
                property,
                computed: false,
            } => write!(f, "{}.{}", object, property),
            Expr::Member {
                object,
                property,
                computed: true,
            } => write!(f, "{}[{}]", object, property),
            Expr::Call { callee, arguments } => {
                write!(f, "{}({})", callee, render_arguments(arguments))
            }
            Expr::New { callee, arguments } => {
                write!(f, "new {}({})", callee, render_arguments(arguments))
            }
        }
    }
}
