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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Statement-level grammar. Quill currently has a single statement form,
 * the expression statement; semicolons are tokenized but the grammar
 * does not require them between statements.
 * ==========================================================================
 */

use crate::ast::{Program, Stmt};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// program ::= statementList
    pub(crate) fn program(&mut self) -> Result<Program, ParseError> {
        Ok(Program {
            statements: self.statement_list(TokenKind::Eof)?,
        })
    }

    /// statementList ::= (statement)*
    ///
    /// Collects statements in source order until the stop category is
    /// the lookahead.
    fn statement_list(
        &mut self,
        stop: TokenKind,
    ) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while self.lookahead.kind != stop {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// statement ::= expressionStatement
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        self.expression_statement()
    }

    /// expressionStatement ::= expression
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        Ok(Stmt::Expression(self.expression()?))
    }
}
