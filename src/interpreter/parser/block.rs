use std::{collections::VecDeque, iter::Peekable};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses statements until `closing` is reached.
///
/// After every statement a `;` is required, except when the next token is
/// the `}` closing the current block or when the statement itself ended with
/// a `}`. A `;` in those positions is still accepted.
///
/// A closing `}` is consumed; `EndOfInput` is left in place.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
/// - `closing`: `Token::RBrace` inside a block, `Token::EndOfInput` at the
///   top level.
/// - `in_function`: Whether `return` is allowed.
/// - `open_line`: Line of the opening brace, for `UnclosedBlock`.
///
/// # Errors
/// - `MissingTerminator` when a statement is not followed by `;`.
/// - `UnclosedBlock` when the input ends before `closing`.
/// - Any error from [`parse_statement`].
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>,
                                   closing: &Token,
                                   in_function: bool,
                                   open_line: usize)
                                   -> ParseResult<VecDeque<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = VecDeque::new();

    loop {
        match tokens.peek() {
            Some((tok, _)) if tok == closing => {
                if *closing != Token::EndOfInput {
                    tokens.next();
                }
                return Ok(statements);
            },
            Some((Token::EndOfInput, _)) | None => {
                return Err(ParseError::UnclosedBlock { line: open_line });
            },
            Some(_) => {},
        }

        let statement = parse_statement(tokens, in_function)?;

        match tokens.peek() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) if *closing == Token::RBrace => {},
            _ if statement.ends_with_block() => {},
            Some((tok, line)) => {
                return Err(ParseError::MissingTerminator { statement: statement.kind(),
                                                           found:     tok.to_string(),
                                                           line:      *line, });
            },
            None => return Err(ParseError::UnclosedBlock { line: open_line }),
        }

        statements.push_back(statement);
    }
}

/// Parses a block delimited by braces.
///
/// Grammar: `block := "{" (statement ";"?)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
/// - `in_function`: Whether the block is part of a function body.
///
/// # Returns
/// A `Statement::Block` holding the parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          line: usize,
                          in_function: bool)
                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statements = parse_statement_list(tokens, &Token::RBrace, in_function, line)?;

    Ok(Statement::Block { statements, line })
}
