/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Quill abstract syntax tree.
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

/// Expression nodes and their canonical rendering.
pub mod expr;

/// Statement nodes and the `Program` parse root.
pub mod stmt;

pub use expr::Expr;
pub use stmt::{Program, Stmt};

/// The category tag of an AST node.
///
/// Every node in the tree reports exactly one of these kinds through its
/// `kind()` method. The set is closed: a downstream pass (evaluator,
/// checker, printer) can match on it exhaustively and the compiler will
/// flag any variant it forgot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    Identifier,
    This,
    Super,
    Assignment,
    Logical,
    Binary,
    Unary,
    Member,
    Call,
    New,
}
