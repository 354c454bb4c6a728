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
 * This module contains the **entire Quill expression grammar**.
 *
 * Parsing order follows strict descending precedence:
 *
 *   assignment → logical or → logical and → equality → comparison
 *     → term → factor → unary → call/member → primary
 *
 * Each level parses the next-higher level first and then folds or
 * recurses on its own operator class. That ordering is what defines
 * operator precedence and associativity, so it must not be rearranged:
 *
 *  - assignment and unary are right-associative via right recursion
 *  - every binary/logical level is left-associative via a fold loop
 *  - equality folds into Logical nodes rather than Binary ones, on
 *    purpose: equality results are logical values downstream
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// expression ::= assignmentExpression
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// assignment ::= logicalOr ( ('=' | '+=' | '-=' | '*=' | '/=') assignment )?
    ///
    /// Right-associative: the right side recurses back into assignment,
    /// so `a = b = c` nests as `a = (b = c)`.
    ///
    /// The left side is whatever expression the lower levels produced;
    /// the grammar does not reject non-assignable targets like `5 = x`.
    /// That check belongs to a later semantic pass.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.logical_or()?;

        if !self.is_assignment_operator(self.lookahead.kind) {
            return Ok(left);
        }

        let operator = self.assignment_operator()?.lexeme;
        let right = self.assignment()?;

        Ok(Expr::Assign {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Consumes the pending simple or compound assignment operator.
    fn assignment_operator(&mut self) -> Result<Token, ParseError> {
        if self.lookahead.kind == TokenKind::SimpleAssign {
            self.eat(TokenKind::SimpleAssign)
        } else {
            self.eat(TokenKind::ComplexAssign)
        }
    }

    /// logicalOr ::= logicalAnd ( '||' logicalAnd )*
    fn logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logical_and()?;

        while self.lookahead.kind == TokenKind::LogicalOr {
            let operator = self.eat(TokenKind::LogicalOr)?.lexeme;
            let right = self.logical_and()?;
            left = Expr::Logical {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// logicalAnd ::= equality ( '&&' equality )*
    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;

        while self.lookahead.kind == TokenKind::LogicalAnd {
            let operator = self.eat(TokenKind::LogicalAnd)?.lexeme;
            let right = self.equality()?;
            left = Expr::Logical {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// equality ::= comparison ( ('==' | '!=') comparison )*
    ///
    /// Folds into `Expr::Logical`, not `Expr::Binary`.
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.comparison()?;

        while self.lookahead.kind == TokenKind::Equality {
            let operator = self.eat(TokenKind::Equality)?.lexeme;
            let right = self.comparison()?;
            left = Expr::Logical {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// comparison ::= term ( ('<' | '>' | '<=' | '>=') term )*
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;

        while self.lookahead.kind == TokenKind::Relational {
            let operator = self.eat(TokenKind::Relational)?.lexeme;
            let right = self.term()?;
            left = Expr::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// term ::= factor ( ('+' | '-') factor )*
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;

        while self.lookahead.kind == TokenKind::Additive {
            let operator = self.eat(TokenKind::Additive)?.lexeme;
            let right = self.factor()?;
            left = Expr::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// factor ::= unary ( ('*' | '/') unary )*
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;

        while self.lookahead.kind == TokenKind::Multiplicative {
            let operator = self.eat(TokenKind::Multiplicative)?.lexeme;
            let right = self.unary()?;
            left = Expr::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// unary ::= ('+' | '-' | '!') unary | leftHandSide
    ///
    /// Right recursion supports stacked prefixes such as `-+!foo`.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        let operator = match self.lookahead.kind {
            TokenKind::Additive => {
                Some(self.eat(TokenKind::Additive)?.lexeme)
            }
            TokenKind::LogicalNot => {
                Some(self.eat(TokenKind::LogicalNot)?.lexeme)
            }
            _ => None,
        };

        if let Some(operator) = operator {
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.left_hand_side()
    }

    /// leftHandSide ::= callMemberExpression
    fn left_hand_side(&mut self) -> Result<Expr, ParseError> {
        self.call_member_expression()
    }

    /// callMemberExpression ::= 'super' arguments | memberExpression | call
    ///
    /// `super` is always called, never referenced bare, so a call
    /// argument list is required immediately after it.
    fn call_member_expression(&mut self) -> Result<Expr, ParseError> {
        if self.lookahead.kind == TokenKind::Super {
            let callee = self.super_expression()?;
            return self.call_expression(callee);
        }

        let member = self.member_expression()?;

        // A member followed by '(' is a call, e.g. person.age()
        if self.lookahead.kind == TokenKind::LParen {
            return self.call_expression(member);
        }

        Ok(member)
    }

    /// memberExpression ::= primary ( '.' identifier | '[' expression ']' )*
    ///
    /// Left-associative postfix chaining: each iteration wraps the
    /// running object, so `a.b[c]` is `Member(Member(a, b), c)`.
    fn member_expression(&mut self) -> Result<Expr, ParseError> {
        let mut object = self.primary()?;

        loop {
            match self.lookahead.kind {
                TokenKind::Dot => {
                    self.eat(TokenKind::Dot)?;
                    let property = self.identifier()?;
                    object = Expr::Member {
                        object: Box::new(object),
                        property: Box::new(property),
                        computed: false,
                    };
                }
                TokenKind::LBracket => {
                    self.eat(TokenKind::LBracket)?;
                    let property = self.expression()?;
                    self.eat(TokenKind::RBracket)?;
                    object = Expr::Member {
                        object: Box::new(object),
                        property: Box::new(property),
                        computed: true,
                    };
                }
                _ => break,
            }
        }

        Ok(object)
    }

    /// superExpression ::= 'super'
    fn super_expression(&mut self) -> Result<Expr, ParseError> {
        self.eat(TokenKind::Super)?;
        Ok(Expr::Super)
    }

    /// callExpression ::= callee arguments
    ///
    /// A finished call is itself eligible as a callee, so chained calls
    /// like `f()()()` wrap recursively.
    fn call_expression(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut call = Expr::Call {
            callee: Box::new(callee),
            arguments: self.arguments()?,
        };

        if self.lookahead.kind == TokenKind::LParen {
            call = self.call_expression(call)?;
        }

        Ok(call)
    }

    /// arguments ::= '(' argumentList? ')'
    ///
    /// An empty argument list is valid and yields an empty sequence.
    /// Input ending right after the '(' reports the unmatched ')'
    /// rather than a missing expression.
    fn arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.eat(TokenKind::LParen)?;

        let arguments = if self.lookahead.kind == TokenKind::Eof {
            return Err(ParseError::UnexpectedEndOfInput {
                expected: TokenKind::RParen,
            });
        } else if self.lookahead.kind != TokenKind::RParen {
            self.argument_list()?
        } else {
            Vec::new()
        };

        self.eat(TokenKind::RParen)?;

        Ok(arguments)
    }

    /// argumentList ::= assignment ( ',' assignment )*
    fn argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = vec![self.assignment()?];

        while self.lookahead.kind == TokenKind::Comma {
            self.eat(TokenKind::Comma)?;
            arguments.push(self.assignment()?);
        }

        Ok(arguments)
    }

    /// primary ::= literal | '(' expression ')' | identifier | 'this' | 'new'
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.is_literal(self.lookahead.kind) {
            return self.literal();
        }

        match self.lookahead.kind {
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let expression = self.expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(expression)
            }
            TokenKind::Identifier => self.identifier(),
            TokenKind::This => {
                self.eat(TokenKind::This)?;
                Ok(Expr::This)
            }
            TokenKind::New => {
                self.eat(TokenKind::New)?;
                let callee = self.member_expression()?;
                let arguments = self.arguments()?;
                Ok(Expr::New {
                    callee: Box::new(callee),
                    arguments,
                })
            }
            TokenKind::Error => Err(ParseError::UnrecognizedInput),
            found => Err(ParseError::UnexpectedPrimary { found }),
        }
    }

    /// identifier ::= IDENTIFIER
    fn identifier(&mut self) -> Result<Expr, ParseError> {
        let name = self.eat(TokenKind::Identifier)?.lexeme;
        Ok(Expr::Identifier(name))
    }

    /// literal ::= NUMBER | STRING | 'true' | 'false' | 'null'
    fn literal(&mut self) -> Result<Expr, ParseError> {
        match self.lookahead.kind {
            TokenKind::Number => {
                let lexeme = self.eat(TokenKind::Number)?.lexeme;
                match lexeme.parse::<i64>() {
                    Ok(value) => Ok(Expr::Number(value)),
                    Err(_) => Err(ParseError::InvalidNumericLiteral(lexeme)),
                }
            }
            TokenKind::Str => {
                let lexeme = self.eat(TokenKind::Str)?.lexeme;
                // Strip the delimiting quotes; no escape processing.
                let value = lexeme[1..lexeme.len() - 1].to_string();
                Ok(Expr::Str(value))
            }
            TokenKind::True => {
                self.eat(TokenKind::True)?;
                Ok(Expr::Boolean(true))
            }
            TokenKind::False => {
                self.eat(TokenKind::False)?;
                Ok(Expr::Boolean(false))
            }
            TokenKind::Null => {
                self.eat(TokenKind::Null)?;
                Ok(Expr::Null)
            }
            found => Err(ParseError::UnexpectedPrimary { found }),
        }
    }
}
