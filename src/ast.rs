use std::{collections::VecDeque, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::Number};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an operator symbol to its operator.
    ///
    /// # Errors
    /// `UnknownOperator` for anything outside `+ - * /`, reported on `line`.
    ///
    /// # Example
    /// ```
    /// use spl::{ast::BinaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*', 1), Ok(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('%', 4),
    ///            Err(RuntimeError::UnknownOperator { operator: '%',
    ///                                                line:     4, }));
    /// ```
    pub const fn from_symbol(symbol: char, line: usize) -> Result<Self, RuntimeError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            operator => Err(RuntimeError::UnknownOperator { operator, line }),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer or float literal.
    Literal {
        /// The constant value.
        value: Number,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `avg(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in call order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use spl::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }

    /// The node's kind tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal { value: Number::Integer(_),
                            .. } => "INT",
            Self::Literal { value: Number::Float(_), .. } => "FLOAT",
            Self::Variable { .. } => "IDENT",
            Self::BinaryOp { .. } => "BinaryOp",
            Self::FunctionCall { .. } => "FunctionCall",
        }
    }
}

/// The body of a user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody {
    /// `f(x): x * 2`; the expression is the result.
    Expression(Expr),
    /// `f(x): { ...; return x * 2; }`; runs until a `return`.
    Block(VecDeque<Statement>),
}

/// A user-defined function, as registered in a scope's function table.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name.
    pub name:   String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Function body.
    pub body:   FunctionBody,
    /// Line of the definition.
    pub line:   usize,
}

/// A statement in a program or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`
    Assignment {
        /// Variable being bound.
        name:  String,
        /// Value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expression` or bare `print`.
    Print {
        /// The expression to print; `None` dumps the current scope.
        expr: Option<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// `name(params): body`. Shared with the function table on execution.
    FunctionDefinition(Rc<FunctionDef>),
    /// `{ statements }`, executed in its own scope.
    Block {
        /// Pending statements, consumed front to back.
        statements: VecDeque<Self>,
        /// Line of the opening brace.
        line:       usize,
    },
    /// `return expression`, only inside a function body.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// The node's kind tag. Expression statements report their expression's
    /// tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Assignment { .. } => "AssignmentStatement",
            Self::Print { .. } => "PrintStatement",
            Self::FunctionDefinition(_) => "FunctionDefinition",
            Self::Block { .. } => "Block",
            Self::Return { .. } => "ReturnStatement",
            Self::Expression { expr, .. } => expr.kind(),
        }
    }

    /// Returns `true` if the statement's last token is a closing `}`, which
    /// makes a following `;` optional.
    #[must_use]
    pub fn ends_with_block(&self) -> bool {
        match self {
            Self::Block { .. } => true,
            Self::FunctionDefinition(def) => matches!(def.body, FunctionBody::Block(_)),
            _ => false,
        }
    }
}

/// A parsed program: the top-level statement queue.
///
/// Executing a program pops statements off the front, so a program that ran
/// to completion is empty afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Pending top-level statements.
    pub statements: VecDeque<Statement>,
}

impl Program {
    /// Number of statements still pending.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` when no statements are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
