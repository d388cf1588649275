use crate::constants::CoreConstants;
use crate::error::{CalcError, Result};
use crate::evaluator::{evaluate, evaluate_expression};
use crate::lexer::tokenize;
use crate::state::{CalculatorState, DisplayFlags, ResultDisplayed, TokenSequence};
use crate::value::format_number;

/// Rewrites the trailing operand as a percentage and evaluates the result.
///
/// After `+` or `-` the percentage is taken of the left-hand side, so
/// `100 + 10%` is `110`. After `*`, `/` or a parenthesis it is a plain ratio,
/// and a pending `*`,`-` pair turns into the composite `*-` so the ratio is
/// negated in the same step. Without any operator the whole input is divided
/// by 100.
///
/// # Errors
///
/// Returns [`CalcError::EmptySequence`] for an empty sequence,
/// [`CalcError::InvalidNumber`] when an operand does not parse, and any
/// evaluation error of the rewritten expression.
pub fn apply_percent(state: &CalculatorState) -> Result<CalculatorState> {
    let sequence = &state.sequence;
    if sequence.is_empty() {
        return Err(CalcError::EmptySequence);
    }

    let tokens = sequence.tokens();
    let value = match percent_position(sequence) {
        None => parse_operand(tokens)? / CoreConstants::PERCENT_DIVISOR,
        Some(pos) => {
            let ratio = parse_operand(&tokens[pos + 1..])? / CoreConstants::PERCENT_DIVISOR;
            let negative_multiplicand =
                state.flags.multiply_then_minus || sequence.ends_with_negative_multiplicand();

            let operand = if !negative_multiplicand && matches!(tokens[pos].as_str(), "+" | "-") {
                let base = evaluate(&tokenize(&tokens[..pos].concat()))?;
                base * ratio
            } else {
                ratio
            };

            let rewritten = format!("{}{}", tokens[..=pos].concat(), format_number(operand));
            log::debug!("Percent rewrite: {} -> {rewritten}", sequence.render());
            evaluate_expression(&rewritten)?
        }
    };

    Ok(CalculatorState::new(
        TokenSequence::single(format_number(value)),
        DisplayFlags {
            result_displayed: ResultDisplayed::Yes,
            multiply_then_minus: false,
            ..state.flags
        },
    ))
}

/// Position of the operator preceding the percent operand. A lone leading
/// `-` is the sign of the first operand, not an operator.
fn percent_position(sequence: &TokenSequence) -> Option<usize> {
    match sequence.last_operator_position() {
        Some(0) if sequence.get(0) == Some("-") => None,
        position => position,
    }
}

fn parse_operand(tokens: &[String]) -> Result<f64> {
    let joined = tokens.concat();
    joined
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(joined))
}
