//! Read-only view of the calculator for rendering.

use serde::Serialize;

use super::format::with_separators;
use super::model::CalculatorModel;
use super::token::Operator;

/// Everything a front end needs to draw the calculator readout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Every accepted token, in order.
    pub display_text: String,
    /// The number being typed.
    pub current_number: String,
    /// The operator waiting for its right-hand side.
    pub last_operator: Option<Operator>,
    /// Live preview of the calculation.
    pub pending_total: f64,
    /// `pending_total` as shown on the readout.
    pub pending_display: String,
    /// Last committed total.
    pub result: f64,
}

impl Snapshot {
    pub fn from_model(model: &CalculatorModel) -> Self {
        Self {
            display_text: model.display_text().to_string(),
            current_number: model.current_number().to_string(),
            last_operator: model.last_operator(),
            pending_total: model.pending_total(),
            pending_display: model.pending_total_display(),
            result: model.result(),
        }
    }

    /// Text to put on the clipboard.
    pub fn text_for_clipboard(&self) -> &str {
        &self.pending_display
    }

    /// Two-line human readout: the tape, then `= total`.
    pub fn render(&self, separators: bool) -> String {
        let total = if separators {
            with_separators(self.pending_total)
        } else {
            self.pending_display.clone()
        };
        format!("{}\n= {}", self.display_text, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(tokens: &[&str]) -> CalculatorModel {
        let mut model = CalculatorModel::new();
        for token in tokens {
            model.process_token(token).unwrap();
        }
        model
    }

    #[test]
    fn test_snapshot_fields() {
        let snapshot = model_with(&["1", "2", "×", "3"]).snapshot();
        assert_eq!(snapshot.display_text, "12×3");
        assert_eq!(snapshot.current_number, "3");
        assert_eq!(snapshot.last_operator, Some(Operator::Multiply));
        assert_eq!(snapshot.pending_total, 36.0);
        assert_eq!(snapshot.result, 12.0);
        assert_eq!(snapshot.text_for_clipboard(), "36.0");
    }

    #[test]
    fn test_render() {
        let snapshot = model_with(&["1", "0", "0", "0", "×", "5"]).snapshot();
        assert_eq!(snapshot.render(false), "1000×5\n= 5000.0");
        assert_eq!(snapshot.render(true), "1000×5\n= 5,000");
    }

    #[test]
    fn test_json_shape() {
        let snapshot = model_with(&["4", "÷", "2"]).snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["display_text"], "4÷2");
        assert_eq!(json["last_operator"], "divide");
        assert_eq!(json["pending_total"], 2.0);
        assert_eq!(json["result"], 4.0);
    }

    #[test]
    fn test_json_first_number_has_no_operator() {
        let json = serde_json::to_value(model_with(&["7"]).snapshot()).unwrap();
        assert!(json["last_operator"].is_null());
    }
}
