//! Keypad calculator model.
//!
//! This module provides:
//! - The token alphabet and operator policy
//! - The accumulating model that consumes tokens
//! - Readout formatting and a serializable snapshot
//! - Keyboard-to-keypad mapping and clipboard copy for front ends

mod clipboard;
mod error;
mod format;
mod keys;
mod model;
mod snapshot;
mod token;

#[cfg(test)]
mod proptests;

pub use clipboard::copy_to_clipboard;
pub use error::CalcError;
pub use format::{plain, with_separators};
pub use keys::{is_keypad_input, map_key, tokenize};
pub use model::{CalculatorModel, CalculatorState};
pub use snapshot::Snapshot;
pub use token::{DECIMAL, Operator, Token};
