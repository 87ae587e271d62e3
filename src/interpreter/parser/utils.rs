use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a parenthesized, comma-separated argument list.
///
/// The same list serves as call arguments and, once a `:` follows, as a
/// definition's parameter list. An immediate `)` produces an empty list.
///
/// Grammar: `arguments := "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `line`: Line of the function identifier, reported for unclosed lists.
///
/// # Returns
/// The argument expressions in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the list does not start with `(`,
/// - an argument fails to parse,
/// - a token other than `,` or `)` follows an argument,
/// - the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             line: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(', found {tok}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnmatchedParen { line }),
    }

    let mut items = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, _)) | None => return Err(ParseError::UnmatchedParen { line }),
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or ')', found {tok}"),
                                                         line:  *line, });
            },
        }
    }
    Ok(items)
}
