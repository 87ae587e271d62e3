use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionBody, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::{parse_block, parse_statement_list},
            core::{ParseResult, parse_expression, parse_expression_from},
            utils::parse_arguments,
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`x = 1 + 2`),
/// - a function definition (`f(a, b): a + b`) or call (`f(1, 2)`),
/// - a print statement (`print x`, or bare `print`),
/// - a block (`{ ... }`),
/// - a return statement, only when `in_function` is set,
/// - an expression used as a statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `in_function`: Whether the statement sits inside a function body.
///
/// # Errors
/// - `ReturnOutsideFunction` for `return` outside a function body.
/// - `ExpectedStatement` when no statement can start with the current token.
/// - Any error raised while parsing the statement's parts.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, in_function: bool) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let Some((token, line)) = tokens.peek().copied() else {
        return Err(ParseError::ExpectedStatement { found: Token::EndOfInput.to_string(),
                                                   line:  0, });
    };
    let line = *line;

    match token {
        Token::Function(name) => {
            tokens.next();
            parse_function_statement(tokens, name.clone(), line)
        },
        Token::Print => {
            tokens.next();
            parse_print(tokens, line)
        },
        Token::LBrace => {
            tokens.next();
            parse_block(tokens, line, in_function)
        },
        Token::Return => {
            if !in_function {
                return Err(ParseError::ReturnOutsideFunction { line });
            }
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Statement::Return { value, line })
        },
        Token::Identifier(_) | Token::Number(_) | Token::LParen => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
        tok => Err(ParseError::ExpectedStatement { found: tok.to_string(),
                                                   line }),
    }
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// Looks one token past the identifier on a cloned iterator. If that token
/// is not `=`, nothing is consumed and `Ok(None)` is returned, leaving the
/// identifier to be parsed as the start of an expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), line)) = tokens.peek() {
        let (name, line) = (name.clone(), *line);
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, _)) = lookahead.peek() {
            tokens.next();
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses what follows a function identifier at statement level.
///
/// The parenthesized list is read as call arguments first. If a `:` follows,
/// the statement is a definition and every argument must be a plain
/// identifier; the body is either a braced block or a single expression.
/// Otherwise the call becomes the first factor of an expression statement.
///
/// # Errors
/// - `NonIdentifierParameter` if a definition lists anything but names.
/// - Errors from argument, block or expression parsing.
fn parse_function_statement<'a, I>(tokens: &mut Peekable<I>,
                                   name: String,
                                   line: usize)
                                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let arguments = parse_arguments(tokens, line)?;

    if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();

        let params = arguments.into_iter()
                              .map(|argument| match argument {
                                  Expr::Variable { name, .. } => Ok(name),
                                  other => Err(ParseError::NonIdentifierParameter {
                                      function: name.clone(),
                                      line:     other.line_number(),
                                  }),
                              })
                              .collect::<ParseResult<Vec<_>>>()?;

        let body = if let Some((Token::LBrace, brace_line)) = tokens.peek() {
            let brace_line = *brace_line;
            tokens.next();
            FunctionBody::Block(parse_statement_list(tokens, &Token::RBrace, true, brace_line)?)
        } else {
            FunctionBody::Expression(parse_expression(tokens)?)
        };

        return Ok(Statement::FunctionDefinition(Rc::new(FunctionDef { name,
                                                                      params,
                                                                      body,
                                                                      line })));
    }

    let call = Expr::FunctionCall { name,
                                    arguments,
                                    line };
    let expr = parse_expression_from(tokens, call)?;
    Ok(Statement::Expression { expr, line })
}

/// Parses `print` with an optional expression.
///
/// Nothing but `;`, `}` or end of input after the keyword means the bare
/// form, which dumps the current scope.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Semicolon | Token::RBrace | Token::EndOfInput, _)) | None => {
            Ok(Statement::Print { expr: None, line })
        },
        Some(_) => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr: Some(expr),
                                  line })
        },
    }
}
