use super::{EvalError, Evaluator};
use crate::lexer::Operator;

impl Operator {
    /// Combine two operands. `lhs` was pushed before `rhs`, so
    /// `10 5 -` is `Sub.apply(10, 5)`.
    ///
    /// Division follows IEEE rules: `x / 0` is infinite and `0 / 0` is NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl Evaluator {
    /// Replace the top two values with `op` applied to them.
    /// Usage: 10 5 - -> 5
    pub(crate) fn apply_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        let (lhs, rhs) = self.pop_operands(op)?;
        self.push(op.apply(lhs, rhs));
        Ok(())
    }
}
