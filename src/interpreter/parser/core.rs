use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{block::parse_statement_list, utils::parse_arguments},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Program`].
///
/// The sequence must end with `Token::EndOfInput`, as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). Top-level statements
/// are collected until end of input; `return` is rejected at this level.
///
/// # Errors
/// Returns the first grammar violation; parsing never recovers.
///
/// # Example
/// ```
/// use spl::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 3; print x;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program.statements[0].kind(), "AssignmentStatement");
/// assert_eq!(program.statements[1].kind(), "PrintStatement");
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let statements = parse_statement_list(&mut iter, &Token::EndOfInput, false, 1)?;

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_term(tokens)?;
    parse_additive_from(tokens, first)
}

/// Continues parsing an expression whose first factor has already been
/// consumed.
///
/// Used for statements that start with a function call, so that
/// `f(1) + 2` still parses as one expression.
pub fn parse_expression_from<'a, I>(tokens: &mut Peekable<I>, first: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_multiplicative_from(tokens, first)?;
    parse_additive_from(tokens, first)
}

/// Parses a term.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_factor(tokens)?;
    parse_multiplicative_from(tokens, first)
}

fn parse_additive_from<'a, I>(tokens: &mut Peekable<I>, mut left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = *line;
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

fn parse_multiplicative_from<'a, I>(tokens: &mut Peekable<I>, mut left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let line = *line;
        tokens.next();
        let right = parse_factor(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses a factor.
///
/// Grammar: `factor := INT | FLOAT | IDENT | call | "(" expression ")"`
///
/// # Errors
/// - `UnmatchedParen` if a parenthesized expression is not closed.
/// - `ExpectedFactor` if the current token cannot start a factor.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::Literal { value: *value,
                                                                 line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::Function(name), line)) => {
            let arguments = parse_arguments(tokens, *line)?;
            Ok(Expr::FunctionCall { name: name.clone(),
                                    arguments,
                                    line: *line })
        },
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::UnmatchedParen { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::ExpectedFactor { found: tok.to_string(),
                                                              line:  *line, }),
        None => Err(ParseError::ExpectedFactor { found: Token::EndOfInput.to_string(),
                                                 line:  0, }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use spl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::core::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
