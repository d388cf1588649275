use crate::error::{CalcError, Result};
use crate::lexer::tokenize;
use crate::token::Token;

/// Evaluates a token list with the usual two-stack precedence algorithm.
///
/// A `-` at the start, after an operator or after `(` is a sign: it pushes
/// `-1` and a plain `*`, so the negation binds like a multiplication. Division
/// by zero follows IEEE 754 and yields an infinity or NaN.
///
/// # Errors
///
/// Returns [`CalcError::InvalidNumber`] for the first token that is neither an
/// operator nor a decimal number, and [`CalcError::InvalidExpression`] when the
/// operands do not reduce to exactly one value.
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<f64> {
    let mut operators: Vec<Token> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut previous: Option<Token> = None;

    for raw in tokens {
        let token = Token::classify(raw.as_ref())?;

        match token {
            Token::Number(n) => values.push(n),
            Token::LeftParen => operators.push(token),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => apply(top, &mut values)?,
                    None => return Err(CalcError::InvalidExpression),
                }
            },
            Token::Minus if is_sign_position(previous) => {
                values.push(-1.0);
                operators.push(Token::Multiply);
            }
            _ => {
                while let Some(&top) = operators.last() {
                    if top.precedence() < token.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(top, &mut values)?;
                }
                operators.push(token);
            }
        }

        previous = Some(token);
    }

    while let Some(op) = operators.pop() {
        if op != Token::LeftParen {
            apply(op, &mut values)?;
        }
    }

    match values.as_slice() {
        [result] => {
            log::debug!("Evaluated {} tokens to {result}", tokens.len());
            Ok(*result)
        }
        _ => Err(CalcError::InvalidExpression),
    }
}

/// Tokenizes and evaluates a raw expression string.
///
/// # Errors
///
/// See [`evaluate`].
pub fn evaluate_expression(raw: &str) -> Result<f64> {
    evaluate(&tokenize(raw))
}

fn is_sign_position(previous: Option<Token>) -> bool {
    previous.is_none_or(|token| token.is_operator() || token == Token::LeftParen)
}

fn apply(operator: Token, values: &mut Vec<f64>) -> Result<()> {
    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
        return Err(CalcError::InvalidExpression);
    };

    let result = match operator {
        Token::Plus => lhs + rhs,
        Token::Minus => lhs - rhs,
        Token::Multiply => lhs * rhs,
        Token::Divide => lhs / rhs,
        Token::MultiplyNegative => lhs * (rhs * -1.0),
        Token::Number(_) | Token::LeftParen | Token::RightParen => {
            return Err(CalcError::InvalidExpression);
        }
    };

    values.push(result);
    Ok(())
}
