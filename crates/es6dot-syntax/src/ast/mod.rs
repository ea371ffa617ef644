// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Abstract Syntax Tree (AST) definitions.
//!
//! Every node is fully built before the parser hands it out. `Display`
//! renders nodes back as source text, one statement per line.

use serde::Serialize;
use std::fmt;

/// A parsed program: the top-level statements in source order.
pub type Program = Vec<Statement>;

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    /// The name of the identifier
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `var name` or `var name = init`
    VarDeclaration(VarDeclaration),
    /// `name = value`
    Assignment(Assignment),
    /// `function name(params) { body }`
    FunctionDeclaration(FunctionDeclaration),
    /// `return value`
    Return(ReturnStatement),
    /// A statement that starts with `+`
    Expression(Expression),
}

/// A variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDeclaration {
    /// The declared name
    pub name: Identifier,
    /// Optional initializer expression
    pub init: Option<Expression>,
}

/// An assignment to a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// The assigned name
    pub name: Identifier,
    /// The assigned value
    pub value: Expression,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    /// The function name
    pub name: Identifier,
    /// The parameters
    pub params: Vec<Identifier>,
    /// The function body
    pub body: Vec<Statement>,
}

/// A return statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    /// The returned value
    pub value: Expression,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// A name reference
    Identifier(Identifier),
    /// A numeric literal
    Number(f64),
    /// A binary operation
    Binary(BinaryExpression),
}

impl Expression {
    /// Shorthand for an identifier expression.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Shorthand for an addition.
    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            operator: BinaryOperator::Add,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    /// The operator
    pub operator: BinaryOperator,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

impl Drop for BinaryExpression {
    fn drop(&mut self) {
        // Unlink the right spine iteratively instead of recursing through `Box`.
        let mut right = std::mem::replace(self.right.as_mut(), Expression::Number(0.0));
        while let Expression::Binary(mut bin) = right {
            right = std::mem::replace(bin.right.as_mut(), Expression::Number(0.0));
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// +
    Add,
}

impl BinaryOperator {
    /// The source symbol for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(id) => write!(f, "{id}"),
            Expression::Number(n) => write!(f, "{n}"),
            Expression::Binary(bin) => {
                // Walk the right spine in a loop; chains can be arbitrarily long.
                let mut bin = bin;
                loop {
                    write!(f, "{} {} ", bin.left, bin.operator.as_str())?;
                    match bin.right.as_ref() {
                        Expression::Binary(inner) => bin = inner,
                        right => return write!(f, "{right}"),
                    }
                }
            }
        }
    }
}

impl Statement {
    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        match self {
            Statement::VarDeclaration(decl) => match &decl.init {
                Some(init) => write!(f, "{indent}var {} = {init}", decl.name),
                None => write!(f, "{indent}var {}", decl.name),
            },
            Statement::Assignment(assign) => {
                write!(f, "{indent}{} = {}", assign.name, assign.value)
            }
            Statement::FunctionDeclaration(func) => {
                let params: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
                write!(f, "{indent}function {}({}) {{", func.name, params.join(", "))?;
                if func.body.is_empty() {
                    return f.write_str("}");
                }
                for stmt in &func.body {
                    writeln!(f)?;
                    stmt.write_indented(f, depth + 1)?;
                }
                write!(f, "\n{indent}}}")
            }
            Statement::Return(ret) => write!(f, "{indent}return {}", ret.value),
            Statement::Expression(expr) => write!(f, "{indent}{expr}"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
