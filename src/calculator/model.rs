//! Token-driven accumulator behind the keypad.
//!
//! The model works two operands at a time. Digits build up the number being
//! typed, and every digit refreshes a live preview of the pending operator
//! applied to the committed total. An operator key folds that preview into
//! the committed total ("capture") and starts the next number. There is no
//! precedence: `2 + 3 × 4` is `(2 + 3) × 4`.

use tracing::{debug, trace};

use super::error::CalcError;
use super::format::plain;
use super::snapshot::Snapshot;
use super::token::{DECIMAL, Operator, Token, is_digits};

/// Complete state of the calculator between two tokens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    /// Digits (and at most one `.`) of the number being typed.
    pub current_number: String,
    /// Every accepted token, concatenated in order.
    pub display_text: String,
    /// Most recently accepted operator; `None` while typing the first number.
    pub last_operator: Option<Operator>,
    /// Last committed total.
    pub running_total: f64,
    /// Live preview of `last_operator` applied to the committed total and
    /// the number being typed.
    pub pending_total: f64,
    /// Whether `current_number` already holds a decimal point.
    pub has_decimal: bool,
    /// Whether the number before the latest operator has been folded into
    /// `running_total`.
    pub captured: bool,
}

impl CalculatorState {
    /// True while nothing has been typed or committed yet.
    pub fn awaiting_first_number(&self) -> bool {
        self.current_number.is_empty() && self.running_total == 0.0
    }

    /// Whether a token with the given text would be accepted.
    ///
    /// Rejects non-digit input before any number exists and a second
    /// decimal point in the same number.
    pub fn accepts(&self, text: &str) -> bool {
        let leading = !is_digits(text) && self.awaiting_first_number();
        let duplicate_decimal = text == DECIMAL && self.has_decimal;
        !leading && !duplicate_decimal
    }

    /// Apply one token and return the resulting state.
    ///
    /// Tokens that fail validation return an unchanged copy.
    pub fn apply(&self, token: &Token) -> Result<Self, CalcError> {
        let mut next = self.clone();
        if !self.accepts(token.as_str()) {
            trace!(token = %token, "token ignored");
            return Ok(next);
        }

        next.display_text.push_str(token.as_str());

        match token {
            Token::Digits(digits) => next.push_digits(digits)?,
            Token::Decimal => next.push_decimal(),
            Token::Operator(op) => {
                next.last_operator = Some(*op);
                next.capture();
            }
        }

        Ok(next)
    }

    fn push_digits(&mut self, digits: &str) -> Result<(), CalcError> {
        self.captured = false;
        self.current_number.push_str(digits);
        self.evaluate()
    }

    fn push_decimal(&mut self) {
        // preview catches up on the next digit
        if !self.has_decimal {
            self.current_number.push_str(DECIMAL);
            self.has_decimal = true;
        }
    }

    fn evaluate(&mut self) -> Result<(), CalcError> {
        if self.current_number.is_empty() {
            return Ok(());
        }

        let n = parse_number(&self.current_number)?;
        self.pending_total = match self.last_operator {
            Some(op) => op.apply(self.running_total, n),
            None => n,
        };
        Ok(())
    }

    fn capture(&mut self) {
        if self.awaiting_first_number() || self.captured {
            return;
        }

        debug!(
            total = self.pending_total,
            number = %self.current_number,
            "captured number before operator"
        );
        self.running_total = self.pending_total;
        self.captured = true;
        self.current_number.clear();
        self.has_decimal = false;
    }
}

fn parse_number(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .map_err(|source| CalcError::InvalidNumber {
            text: text.to_string(),
            source,
        })
}

/// Backing model for a keypad calculator.
///
/// Owns a [`CalculatorState`] and advances it one token at a time.
#[derive(Clone, Debug, Default)]
pub struct CalculatorModel {
    state: CalculatorState,
}

impl CalculatorModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one token of keypad input.
    ///
    /// Leading operators and duplicate decimal points are ignored without
    /// error. Text outside the keypad alphabet is ignored the same way while
    /// no number exists yet. Afterwards it passes validation, lands in the
    /// display text and is then rejected with [`CalcError::InvalidToken`].
    pub fn process_token(&mut self, token: &str) -> Result<(), CalcError> {
        let token = match token.parse::<Token>() {
            Ok(token) => token,
            Err(_) if !self.state.accepts(token) => {
                trace!(token, "unknown token ignored");
                return Ok(());
            }
            Err(err) => {
                self.state.display_text.push_str(token);
                return Err(err);
            }
        };

        self.state = self.state.apply(&token)?;
        Ok(())
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        debug!("calculator cleared");
        self.state = CalculatorState::default();
    }

    /// Every accepted token so far.
    pub fn display_text(&self) -> &str {
        &self.state.display_text
    }

    /// Pending total rendered for the readout.
    pub fn pending_total_display(&self) -> String {
        plain(self.state.pending_total)
    }

    /// Live preview of the calculation in progress.
    pub fn pending_total(&self) -> f64 {
        self.state.pending_total
    }

    /// Last committed total.
    pub fn result(&self) -> f64 {
        self.state.running_total
    }

    /// The number currently being typed.
    pub fn current_number(&self) -> &str {
        &self.state.current_number
    }

    pub fn last_operator(&self) -> Option<Operator> {
        self.state.last_operator
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Read-only view of the model for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_model(self)
    }
}
