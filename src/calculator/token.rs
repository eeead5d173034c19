//! Keypad tokens understood by the calculator model.
//!
//! A token is one unit of input: a run of digits, the decimal point, or one
//! of the four arithmetic operators. The operator glyphs are the ones shown
//! on the keypad (`×` and `÷`), not their ASCII stand-ins.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::CalcError;

/// Literal text of the decimal point token.
pub const DECIMAL: &str = ".";

/// An arithmetic operator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown on the keypad and appended to the display text.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its keypad glyph.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to a committed total and the number being typed.
    ///
    /// Division by zero is left to IEEE-754: `x ÷ 0` yields an infinity,
    /// `0 ÷ 0` yields NaN.
    pub fn apply(self, total: f64, n: f64) -> f64 {
        match self {
            Self::Add => total + n,
            Self::Subtract => total - n,
            Self::Multiply => total * n,
            Self::Divide => total / n,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A single unit of calculator input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// One or more ASCII digits.
    Digits(String),
    /// The decimal point.
    Decimal,
    /// An arithmetic operator.
    Operator(Operator),
}

impl Token {
    /// Literal text of the token as it appears in the display text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Digits(digits) => digits,
            Self::Decimal => DECIMAL,
            Self::Operator(op) => op.glyph(),
        }
    }
}

/// Returns true if `text` is a non-empty run of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_digits(s) {
            return Ok(Self::Digits(s.to_string()));
        }
        if s == DECIMAL {
            return Ok(Self::Decimal);
        }
        Operator::from_glyph(s)
            .map(Self::Operator)
            .ok_or_else(|| CalcError::InvalidToken(s.to_string()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
