use super::*;
use proptest::prelude::*;

fn keypad_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "-", "×", "÷", ".",
    ])
}

// Property: digits alone never commit and the preview equals the typed number
proptest! {
    #[test]
    fn prop_digits_only_preview(digits in prop::collection::vec("[0-9]", 1..16)) {
        let mut model = CalculatorModel::new();
        for digit in &digits {
            model.process_token(digit).unwrap();
        }

        let typed = digits.concat();
        prop_assert_eq!(model.result(), 0.0);
        prop_assert_eq!(model.pending_total(), typed.parse::<f64>().unwrap());
        prop_assert_eq!(model.display_text(), typed.as_str());
    }
}

// Property: display text is exactly the accepted tokens, in order
proptest! {
    #[test]
    fn prop_display_is_accepted_tokens(tokens in prop::collection::vec(keypad_token(), 0..40)) {
        let mut model = CalculatorModel::new();
        let mut expected = String::new();

        for token in tokens {
            if model.state().accepts(token) {
                expected.push_str(token);
            }
            model.process_token(token).unwrap();

            let state = model.state();
            prop_assert_eq!(
                state.has_decimal,
                state.current_number.matches('.').count() == 1
            );
            prop_assert!(state.current_number.matches('.').count() <= 1);
        }

        prop_assert_eq!(model.display_text(), expected.as_str());
    }
}

// Property: clear always returns to the initial state
proptest! {
    #[test]
    fn prop_clear_resets(tokens in prop::collection::vec(keypad_token(), 0..40)) {
        let mut model = CalculatorModel::new();
        for token in tokens {
            model.process_token(token).unwrap();
        }
        model.clear();

        prop_assert_eq!(model.state(), &CalculatorState::default());
        prop_assert_eq!(model.display_text(), "");
    }
}
