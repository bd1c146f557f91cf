use super::{EvalError, Evaluator};
use crate::lexer::Operator;

impl Evaluator {
    pub(crate) fn push(&mut self, n: f64) {
        self.stack.push(n);
    }

    /// Pop the two operands of `op` as `(lhs, rhs)`.
    ///
    /// `rhs` is the current top. Fails without touching the stack when fewer
    /// than two values are present.
    pub(crate) fn pop_operands(&mut self, op: Operator) -> Result<(f64, f64), EvalError> {
        let len = self.stack.len();
        if len < 2 {
            return Err(EvalError::InsufficientOperands {
                operator: op,
                depth: len,
            });
        }
        let rhs = self.stack[len - 1];
        let lhs = self.stack[len - 2];
        self.stack.truncate(len - 2);
        Ok((lhs, rhs))
    }

    /// Current top of the stack, if any
    pub fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    /// Number of values on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop every value (for the `.clear` session command)
    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }
}
