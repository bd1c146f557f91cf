//! rpnc - RPN calculator
//!
//! # Overview
//!
//! rpnc evaluates Reverse Polish Notation one line at a time. Numbers push
//! themselves onto a stack; each of `+ - * /` pops two numbers and pushes
//! the result. The stack survives between lines for as long as the
//! [`Evaluator`] lives.
//!
//! ```text
//! 10 5 -        # 5   (the value pushed first is the left operand)
//! 10 5 /        # 2
//! 5             # 5
//! 3 +           # 8   (continues from the previous line)
//! ```
//!
//! # Errors
//!
//! Every error is answered with a message and the session carries on:
//!
//! - `Invalid input: ...` when the line has characters other than digits,
//!   `.`, whitespace and the four operators. Nothing is evaluated.
//! - `Parse error: ...` when a fragment is not a number. Fragments before it
//!   stay applied.
//! - `Calculation error: ...` when an operator finds fewer than two
//!   operands. Fragments before it stay applied.
//!
//! Division by zero is not an error; it yields `inf` or `NaN`.
//!
//! # Example
//!
//! ```rust
//! use rpnc::Evaluator;
//!
//! let mut eval = Evaluator::new();
//! assert_eq!(eval.handle("5"), "5");
//! assert_eq!(eval.handle("3 +"), "8");
//! assert!(eval.handle("text").starts_with("Invalid input"));
//! ```

pub mod console;
pub mod display;
pub mod eval;
pub mod lexer;
pub mod session;

// Re-export commonly used items
pub use console::{Console, ConsoleError, StreamConsole};
pub use eval::{EvalError, Evaluator};
pub use lexer::{classify, is_valid_input, tokenize, LexError, Operator, Token};
pub use session::run_session;

/// Convenience function to evaluate one line on a fresh evaluator
pub fn eval(input: &str) -> Result<String, EvalError> {
    Evaluator::new().eval_line(input)
}
