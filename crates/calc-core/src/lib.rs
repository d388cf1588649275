mod button;
mod constants;
mod diagnostics;
mod error;
mod evaluator;
mod lexer;
mod machine;
mod percent;
mod state;
mod token;
mod value;

pub use button::ButtonKind;
pub use constants::CoreConstants;
pub use diagnostics::{LogEntry, LogLevel, LogOutput, NullLog};
pub use error::{CalcError, Result};
pub use evaluator::{evaluate, evaluate_expression};
pub use lexer::{Lexer, tokenize, tokenize_to_string};
pub use machine::{Transition, handle_button_event, on_event, render_sequence};
pub use percent::apply_percent;
pub use state::{CalculatorState, DisplayFlags, ResultDisplayed, TokenSequence};
pub use token::{Token, is_binary_operator, is_operator_token};
pub use value::format_number;

#[cfg(test)]
mod tests {
    use super::*;

    fn run(presses: &[&str]) -> CalculatorState {
        let mut state = CalculatorState::default();
        for press in presses {
            let (key, values) = match *press {
                "+" => ("add", vec![]),
                "-" => ("minus", vec![]),
                "*" => ("multiply", vec![]),
                "/" => ("divide", vec![]),
                "%" => ("modulus", vec![]),
                "=" => ("equals", vec![]),
                "." => ("period", vec![]),
                "C" => ("c", vec![]),
                "DEL" => ("delete", vec![]),
                digit => ("number", vec![digit]),
            };
            state = handle_button_event(key, &values, &state, &mut NullLog).state;
        }
        state
    }

    #[test]
    fn test_typed_expression() {
        let state = run(&["1", "2", "+", "3", "*", "2", "="]);
        assert_eq!(state.render(), "18");
        assert_eq!(state.flags.result_displayed, ResultDisplayed::Yes);
    }

    #[test]
    fn test_chained_results() {
        let state = run(&["9", "/", "2", "=", "*", "4", "="]);
        assert_eq!(state.render(), "18");

        let state = run(&["9", "/", "2", "=", "-", "5", "="]);
        assert_eq!(state.render(), "-0.5");
    }

    #[test]
    fn test_negative_first_operand() {
        let state = run(&["-", "5", "+", "3", "="]);
        assert_eq!(state.render(), "-2");
    }

    #[test]
    fn test_negative_result_is_an_operand() {
        let state = run(&["2", "-", "7", "=", "+", "1", "0", "="]);
        assert_eq!(state.render(), "5");
    }

    #[test]
    fn test_negative_multiplicand_percent() {
        let state = run(&["5", "0", "*", "-", "1", "0", "%"]);
        assert_eq!(state.render(), "-5");
        assert!(!state.flags.multiply_then_minus);
    }

    #[test]
    fn test_percent_after_operator_following_negative_multiplicand() {
        let state = run(&["5", "*", "-", "2", "+", "1", "0", "%"]);
        assert_eq!(state.render(), "-9.9");
    }

    #[test]
    fn test_percent_then_continue() {
        let state = run(&["2", "0", "0", "-", "1", "0", "%", "+", "5", "="]);
        assert_eq!(state.render(), "185");
    }

    #[test]
    fn test_division_by_zero_shows_infinity() {
        let state = run(&["5", "/", "0", "="]);
        assert_eq!(state.render(), "inf");
    }

    #[test]
    fn test_decimal_after_delete() {
        let state = run(&["1", ".", "DEL", ".", "5", "="]);
        assert_eq!(state.render(), "1.5");
    }

    #[test]
    fn test_error_then_clear() {
        let state = run(&["5", "+", "%"]);
        assert_eq!(state.render(), CoreConstants::ERROR_TOKEN);

        let state = run(&["5", "+", "%", "C", "7"]);
        assert_eq!(state.render(), "7");
    }

    #[test]
    fn test_no_adjacent_binary_operators() {
        let presses = [
            "1", "+", "*", "-", "/", "2", "*", "-", "+", "-", "*", "3", "*", "-", "4", "+", "7",
            "*", "-", "2", "/", "=", "+", "-",
        ];
        for end in 1..=presses.len() {
            let state = run(&presses[..end]);
            for pair in state.sequence.tokens().windows(2) {
                let both_operators =
                    is_binary_operator(&pair[0]) && is_binary_operator(&pair[1]);
                let sanctioned =
                    pair[0] == "*" && pair[1] == "-" && state.flags.multiply_then_minus;
                assert!(!both_operators || sanctioned, "{:?}", state.sequence);
            }
        }
    }
}
