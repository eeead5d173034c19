//! Errors raised by the calculator model.

use std::num::ParseFloatError;

use thiserror::Error;

/// An error produced while feeding tokens to the calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The token is not part of the keypad alphabet.
    #[error("invalid token: [{0}]")]
    InvalidToken(String),

    /// The number buffer could not be read as a float.
    #[error("invalid number {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// The system clipboard could not be reached or written.
    #[error("clipboard: {0}")]
    Clipboard(String),
}
