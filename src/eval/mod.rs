//! Evaluator for rpnc
//!
//! The [`Evaluator`] owns the operand stack. Each call to
//! [`Evaluator::handle`] runs one line to completion and leaves the stack as
//! the line left it, so an expression can be spread over several lines and
//! results can be chained (`5` then `3 +` answers `8`).
//!
//! Lines are not atomic. Fragments are applied one at a time and processing
//! stops at the first failure; whatever was applied before it stays on the
//! stack.

mod math;
mod stack;
#[cfg(test)]
mod tests;

use crate::display::format_top;
use crate::lexer::{classify, is_valid_input, tokenize, LexError, Operator, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid input: only digits, '.', whitespace and + - * / are allowed")]
    InvalidInput,
    #[error("Parse error: '{token}' is not a number (stack top: {top})")]
    MalformedNumber { token: String, top: String },
    #[error("Calculation error: '{operator}' needs 2 operands, stack has {depth}")]
    InsufficientOperands { operator: Operator, depth: usize },
}

/// RPN evaluator holding one session's operand stack
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Operand stack, top is the last element
    pub(crate) stack: Vec<f64>,
    /// Print each applied fragment and the resulting stack state to stderr
    pub(crate) trace_mode: bool,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    /// Evaluate a line and return the response to show the user.
    ///
    /// Errors are folded into the response; the evaluator stays usable.
    pub fn handle(&mut self, line: &str) -> String {
        match self.eval_line(line) {
            Ok(response) => response,
            Err(e) => e.to_string(),
        }
    }

    /// Evaluate a line, returning the formatted stack top on success
    pub fn eval_line(&mut self, line: &str) -> Result<String, EvalError> {
        if !is_valid_input(line) {
            return Err(EvalError::InvalidInput);
        }

        for fragment in tokenize(line) {
            self.eval_fragment(fragment)?;
            if self.trace_mode {
                self.print_trace(fragment);
            }
        }

        Ok(format_top(self.top()))
    }

    fn eval_fragment(&mut self, fragment: &str) -> Result<(), EvalError> {
        match classify(fragment) {
            Ok(Token::Operator(op)) => self.apply_operator(op),
            Ok(Token::Operand(n)) => {
                self.push(n);
                Ok(())
            }
            Err(LexError::MalformedNumber(token)) => Err(EvalError::MalformedNumber {
                token,
                top: format_top(self.top()),
            }),
        }
    }

    /// Print trace output showing the fragment and stack state
    pub(crate) fn print_trace(&self, fragment: &str) {
        eprintln!(
            "trace: {} -> depth {}, top {}",
            fragment,
            self.depth(),
            format_top(self.top())
        );
    }
}
