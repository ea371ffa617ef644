// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The main parser implementation.
//!
//! Every statement production leaves the cursor on the last token it
//! consumed; the caller steps past it.

use tracing::{debug, trace};

use super::Cursor;
use crate::ast::*;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

/// A single-lookahead recursive descent parser.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Creates a parser over an already tokenized program.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parses statements until the end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_statement()?);
            self.cursor.advance();
        }

        debug!(statements = body.len(), "parsed program");
        Ok(body)
    }

    /// Parses a single statement, dispatching on the current token.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let kind = self.cursor.current().kind;
        trace!(line = self.cursor.current().line, ?kind, "statement");

        match kind {
            TokenKind::Var => self.parse_var_declaration(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Plus => self.parse_addition_statement(),
            _ => Err(ParseError::unexpected(self.cursor.current())),
        }
    }

    fn parse_var_declaration(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance(); // consume 'var'

        let name = self.current_identifier()?;
        let init = if self.cursor.next().kind == TokenKind::Equal {
            self.cursor.advance(); // onto '='
            self.cursor.advance(); // past '='
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(Statement::VarDeclaration(VarDeclaration { name, init }))
    }

    fn parse_assignment(&mut self) -> Result<Statement, ParseError> {
        let name = self.current_identifier()?;
        self.cursor.advance();

        self.expect(TokenKind::Equal, "=")?;
        let value = self.parse_expression()?;

        Ok(Statement::Assignment(Assignment { name, value }))
    }

    fn parse_function_declaration(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance(); // consume 'function'

        let name = self.current_identifier()?;
        self.cursor.advance();

        let params = self.parse_parameters()?;
        self.cursor.advance(); // past ')'

        let body = self.parse_function_body()?;

        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            name,
            params,
            body,
        }))
    }

    /// Parses `( a, b, ... )`, stopping on the closing parenthesis.
    fn parse_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.expect(TokenKind::LeftParen, "(")?;

        let mut params = Vec::new();
        loop {
            match self.cursor.current().kind {
                TokenKind::RightParen => break,
                TokenKind::Eof => return Err(ParseError::expected(")", self.cursor.current())),
                _ => {
                    params.push(self.current_identifier()?);
                    self.cursor.advance();
                    if self.cursor.current().kind == TokenKind::Comma {
                        self.cursor.advance();
                    }
                }
            }
        }

        Ok(params)
    }

    /// Parses `{ statements }`, stopping on the closing brace.
    fn parse_function_body(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.expect(TokenKind::LeftBrace, "{")?;

        let mut body = Vec::new();
        loop {
            match self.cursor.current().kind {
                TokenKind::RightBrace => break,
                TokenKind::Eof => return Err(ParseError::expected("}", self.cursor.current())),
                _ => {
                    body.push(self.parse_statement()?);
                    self.cursor.advance();
                }
            }
        }

        Ok(body)
    }

    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance(); // consume 'return'
        let value = self.parse_expression()?;
        Ok(Statement::Return(ReturnStatement { value }))
    }

    /// A statement that opens with `+` adds onto whatever token preceded it.
    fn parse_addition_statement(&mut self) -> Result<Statement, ParseError> {
        let left = self.previous_as_identifier()?;
        self.cursor.advance(); // consume '+'
        let right = self.parse_expression()?;
        Ok(Statement::Expression(Expression::add(left, right)))
    }

    /// Parses `operand (+ operand)*`, nesting the chain to the right.
    ///
    /// Left operands are collected in a loop and folded from the right, so
    /// the depth of the chain never reaches the call stack.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut lefts = Vec::new();

        let last = loop {
            let kind = self.cursor.current().kind;
            let next = self.cursor.next().kind;

            match kind {
                // The identifier is rebuilt from `previous` once '+' is current.
                TokenKind::Identifier if next == TokenKind::Plus => self.cursor.advance(),
                TokenKind::Identifier => {
                    break Expression::identifier(self.cursor.current().lexeme.clone());
                }
                TokenKind::Number => {
                    let token = self.cursor.current();
                    break token
                        .as_number()
                        .map(Expression::Number)
                        .ok_or_else(|| ParseError::unexpected(token))?;
                }
                TokenKind::Plus if matches!(next, TokenKind::Identifier | TokenKind::Number) => {
                    lefts.push(self.previous_as_identifier()?);
                    self.cursor.advance(); // consume '+'
                }
                _ => return Err(ParseError::unexpected(self.cursor.current())),
            }
        };

        if !lefts.is_empty() {
            trace!(operands = lefts.len() + 1, "addition chain");
        }
        Ok(lefts
            .into_iter()
            .rev()
            .fold(last, |right, left| Expression::add(left, right)))
    }

    /// The previous token's raw text as an identifier, whatever its kind.
    fn previous_as_identifier(&self) -> Result<Expression, ParseError> {
        match self.cursor.previous() {
            Some(prev) if !prev.is_eof() => Ok(Expression::identifier(prev.lexeme.clone())),
            _ => Err(ParseError::unexpected(self.cursor.current())),
        }
    }

    fn current_identifier(&self) -> Result<Identifier, ParseError> {
        let token = self.cursor.current();
        if token.kind == TokenKind::Identifier {
            Ok(Identifier::new(token.lexeme.clone()))
        } else {
            Err(ParseError::unexpected(token))
        }
    }

    fn expect(&mut self, kind: TokenKind, text: &'static str) -> Result<(), ParseError> {
        if self.cursor.current().kind == kind {
            self.cursor.advance();
            Ok(())
        } else {
            Err(ParseError::expected(text, self.cursor.current()))
        }
    }

    fn is_at_end(&self) -> bool {
        self.cursor.current().is_eof()
    }
}
