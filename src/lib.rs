//! A keypad calculator that accumulates a running total one token at a time.
//!
//! ```
//! use tally::calculator::CalculatorModel;
//!
//! let mut model = CalculatorModel::new();
//! for token in ["5", "+", "3"] {
//!     model.process_token(token).unwrap();
//! }
//! assert_eq!(model.pending_total(), 8.0);
//! assert_eq!(model.result(), 5.0);
//! ```

pub mod calculator;
pub mod config;
