use crate::button::ButtonKind;
use crate::constants::CoreConstants;
use crate::diagnostics::{LogEntry, LogLevel, LogOutput};
use crate::error::CalcError;
use crate::evaluator::evaluate_expression;
use crate::percent::apply_percent;
use crate::state::{CalculatorState, ResultDisplayed, TokenSequence};
use crate::token::{is_binary_operator, is_operator_token};
use crate::value::format_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CalculatorState,
    /// The caller should redisplay from scratch; set when a percent press failed.
    pub redirect: bool,
}

/// Applies one button press to the calculator state.
///
/// Never fails: evaluation problems are reported to `log`. A failed `equals`
/// leaves the sequence as it was, a failed `modulus` replaces it with the
/// `Error` sentinel and asks for a redirect.
pub fn on_event(
    kind: ButtonKind,
    value: &str,
    state: &CalculatorState,
    log: &mut dyn LogOutput,
) -> Transition {
    let mut next = state.clone();
    next.flags.pending_operator_after_result = false;

    if is_error_sentinel(&next.sequence) {
        next.sequence.clear();
        next.flags.result_displayed = ResultDisplayed::Unset;
    }

    if kind.is_arithmetic() && next.flags.result_displayed == ResultDisplayed::Yes {
        next.flags.pending_operator_after_result = true;
        next.flags.result_displayed = ResultDisplayed::No;
    }

    let redirect = match kind {
        ButtonKind::Clear => {
            next.sequence.clear();
            false
        }
        ButtonKind::Delete => {
            next.sequence.pop();
            false
        }
        ButtonKind::Equals => {
            equals(&mut next, log);
            false
        }
        ButtonKind::Modulus => percent(&mut next, log),
        ButtonKind::Add
        | ButtonKind::Minus
        | ButtonKind::Multiply
        | ButtonKind::Divide
        | ButtonKind::Period
        | ButtonKind::Input => {
            append(kind, value, &mut next);
            false
        }
    };

    next.flags.multiply_then_minus = next.sequence.has_negative_multiplicand();

    log::debug!(
        "{} {value:?}: {:?} -> {:?}",
        kind.as_str(),
        state.sequence.tokens(),
        next.sequence.tokens()
    );

    Transition {
        state: next,
        redirect,
    }
}

/// Entry point for a submitted form: `event_key` names the button family and
/// `event_values` the literal text to append. Keys with a natural literal
/// (`add`, `period`, ...) fall back to it when no value is supplied.
pub fn handle_button_event<S: AsRef<str>>(
    event_key: &str,
    event_values: &[S],
    state: &CalculatorState,
    log: &mut dyn LogOutput,
) -> Transition {
    let kind = ButtonKind::from_key(event_key);
    let value = if event_values.is_empty() {
        kind.default_value()
            .map_or_else(|| event_key.to_string(), str::to_string)
    } else {
        event_values.iter().map(|v| v.as_ref()).collect()
    };

    on_event(kind, &value, state, log)
}

#[must_use]
pub fn render_sequence(sequence: &TokenSequence) -> String {
    sequence.render()
}

fn is_error_sentinel(sequence: &TokenSequence) -> bool {
    sequence.len() == 1 && sequence.last() == Some(CoreConstants::ERROR_TOKEN)
}

fn report(log: &mut dyn LogOutput, level: LogLevel, kind: ButtonKind, error: &CalcError) {
    log::warn!("{} failed: {error}", kind.as_str());
    log.log(LogEntry::new(level, kind, error.to_string()));
}

fn equals(state: &mut CalculatorState, log: &mut dyn LogOutput) {
    if state.sequence.is_empty() {
        report(log, LogLevel::Warning, ButtonKind::Equals, &CalcError::EmptySequence);
        return;
    }

    match evaluate_expression(&state.sequence.render()) {
        Ok(result) => {
            let formatted = format_number(result);
            log.log(LogEntry::new(
                LogLevel::Info,
                ButtonKind::Equals,
                format!("Result: {formatted}"),
            ));
            state.sequence = TokenSequence::single(formatted);
            state.flags.result_displayed = ResultDisplayed::Yes;
        }
        Err(e) => report(log, LogLevel::Warning, ButtonKind::Equals, &e),
    }
}

fn percent(state: &mut CalculatorState, log: &mut dyn LogOutput) -> bool {
    match apply_percent(state) {
        Ok(next) => {
            log.log(LogEntry::new(
                LogLevel::Info,
                ButtonKind::Modulus,
                format!("Result: {}", next.render()),
            ));
            *state = next;
            false
        }
        Err(e) => {
            report(log, LogLevel::Error, ButtonKind::Modulus, &e);
            state.sequence = TokenSequence::single(CoreConstants::ERROR_TOKEN);
            state.flags.multiply_then_minus = false;
            true
        }
    }
}

fn append(kind: ButtonKind, value: &str, state: &mut CalculatorState) {
    let sequence = &mut state.sequence;
    let flags = &mut state.flags;
    let value_is_operator = is_binary_operator(value);
    let is_period = kind == ButtonKind::Period || value == CoreConstants::DECIMAL_POINT;
    let len = sequence.len();
    let last = sequence.last();
    let last_is_operator = last.is_some_and(is_binary_operator);

    if sequence.is_empty() && value_is_operator && value != "-" {
        // Only a sign may open the sequence.
    } else if last == Some("*") && value == "-" {
        sequence.push(value);
        flags.multiply_then_minus = true;
    } else if len >= 2
        && sequence.get(len - 2) == Some("*")
        && last == Some("-")
        && value_is_operator
    {
        sequence.truncate(len - 2);
        sequence.push(value);
        flags.multiply_then_minus = false;
    } else if value_is_operator && last_is_operator {
        if len > 1 || value == "-" {
            sequence.pop();
            sequence.push(value);
        }
    } else if flags.pending_operator_after_result {
        sequence.push(value);
    } else if flags.result_displayed == ResultDisplayed::Yes && !value_is_operator {
        sequence.clear();
        flags.result_displayed = ResultDisplayed::No;
        push_operand(sequence, value, is_period);
    } else if is_period && sequence.has_decimal_in_current_operand() {
        // One decimal point per operand.
    } else {
        push_operand(sequence, value, is_period);
    }
}

fn push_operand(sequence: &mut TokenSequence, value: &str, is_period: bool) {
    if is_period && sequence.last().is_none_or(is_operator_token) {
        sequence.push(CoreConstants::LEADING_ZERO);
    }
    sequence.push(value);
}
