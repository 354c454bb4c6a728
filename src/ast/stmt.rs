/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes and the `Program` parse root.
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

use crate::ast::{Expr, NodeKind};
use serde::Serialize;
use std::fmt;

/// A statement node in the Quill AST.
///
/// The statement grammar currently has a single production: a bare
/// expression used as a statement. The enum stays closed so further
/// statement forms slot in as new variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// A statement wrapping a bare expression.
    Expression(Expr),
}

impl Stmt {
    /// Returns this node's category tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Expression(_) => NodeKind::ExpressionStatement,
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expression) => write!(f, "{}", expression),
        }
    }
}

/// The root of every parse: an ordered list of statements.
///
/// Statements appear in source order. A source yielding zero statements
/// is valid and produces an empty program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Returns this node's category tag.
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

impl fmt::Display for Program {
    /// Renders the program as the concatenation of its statements'
    /// canonical text, with no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
