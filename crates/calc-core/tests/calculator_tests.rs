use calc_core::*;

fn press(state: &CalculatorState, key: &str) -> CalculatorState {
    let no_values: [&str; 0] = [];
    handle_button_event(key, &no_values, state, &mut NullLog).state
}

fn digits(state: &CalculatorState, value: &str) -> CalculatorState {
    handle_button_event("number", &[value], state, &mut NullLog).state
}

#[test]
fn test_evaluator_examples() {
    assert_eq!(evaluate(&tokenize("3 + 4 * 2")).unwrap(), 11.0);
    assert_eq!(evaluate(&tokenize("(1+2)*3")).unwrap(), 9.0);
    assert_eq!(evaluate(&tokenize("-5+3")).unwrap(), -2.0);
    assert!(evaluate(&tokenize("5/0")).unwrap().is_infinite());
    assert!(matches!(
        evaluate(&tokenize("3 + + 4")),
        Err(CalcError::InvalidExpression | CalcError::InvalidNumber(_))
    ));
}

#[test]
fn test_precedence_for_operand_pairs() {
    for a in [1.0_f64, 2.5, 7.0] {
        for b in [3.0_f64, 0.5, 4.0] {
            let raw = format!("{a}+{b}*{a}-{b}/{a}");
            let expected = a + b * a - b / a;
            assert_eq!(evaluate_expression(&raw).unwrap(), expected, "{raw}");

            let raw = format!("{a}*{b}*-{a}");
            assert_eq!(evaluate_expression(&raw).unwrap(), a * (b * -a), "{raw}");
        }
    }
}

#[test]
fn test_result_reuse_through_persisted_state() {
    // Every event goes through a JSON round trip, like a session store would do.
    let steps: [fn(&CalculatorState) -> CalculatorState; 5] = [
        |s| digits(s, "5"),
        |s| press(s, "equals"),
        |s| press(s, "add"),
        |s| digits(s, "3"),
        |s| press(s, "equals"),
    ];

    let mut state = CalculatorState::default();
    let mut renders = Vec::new();
    for step in steps {
        let stored = serde_json::to_string(&step(&state)).unwrap();
        state = serde_json::from_str(&stored).unwrap();
        renders.push(render_sequence(&state.sequence));
    }

    assert_eq!(renders, ["5", "5", "5+", "5+3", "8"]);
    assert_eq!(state.flags.result_displayed, ResultDisplayed::Yes);
}

#[test]
fn test_single_decimal_invariant() {
    let mut state = digits(&CalculatorState::default(), "4");
    for _ in 0..5 {
        state = press(&state, "period");
    }
    state = digits(&state, "2");
    state = press(&state, "period");
    assert_eq!(state.render().matches('.').count(), 1);
    assert_eq!(state.render(), "4.2");
}

#[test]
fn test_percent_scenario() {
    let state = CalculatorState::new(
        ["100", "+", "10"].into_iter().collect(),
        DisplayFlags::default(),
    );
    let transition = on_event(ButtonKind::Modulus, "", &state, &mut NullLog);
    assert_eq!(transition.state.render(), "110");
}

#[test]
fn test_diagnostics_are_collected() {
    let mut log: Vec<LogEntry> = Vec::new();
    let state = digits(&CalculatorState::default(), "7");
    let state = press(&state, "divide");

    let after_equals = on_event(ButtonKind::Equals, "", &state, &mut log).state;
    assert_eq!(after_equals.render(), "7/");

    let after_percent = on_event(ButtonKind::Modulus, "", &state, &mut log);
    assert_eq!(after_percent.state.render(), "Error");
    assert!(after_percent.redirect);

    let levels: Vec<LogLevel> = log.iter().map(|e| e.level).collect();
    assert_eq!(levels, [LogLevel::Warning, LogLevel::Error]);
    assert_eq!(log[1].event, ButtonKind::Modulus);
}
