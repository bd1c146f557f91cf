use super::*;

fn fresh(line: &str) -> String {
    Evaluator::new().handle(line)
}

#[test]
fn eval_addition() {
    assert_eq!(fresh("10 5 +"), "15");
}

#[test]
fn eval_subtraction_operand_order() {
    assert_eq!(fresh("10 5 -"), "5");
}

#[test]
fn eval_division_operand_order() {
    assert_eq!(fresh("10 5 /"), "2");
}

#[test]
fn eval_multiplication() {
    assert_eq!(fresh("7 8 *"), "56");
}

#[test]
fn eval_fractional_result() {
    assert_eq!(fresh("10 4 /"), "2.5");
}

#[test]
fn eval_operator_reduces_depth_by_one() {
    let mut eval = Evaluator::new();
    eval.handle("1 2 3");
    assert_eq!(eval.depth(), 3);
    eval.handle("+");
    assert_eq!(eval.depth(), 2);
    assert_eq!(eval.top(), Some(5.0));
    eval.handle("*");
    assert_eq!(eval.depth(), 1);
    assert_eq!(eval.top(), Some(5.0));
}

#[test]
fn eval_operator_leaves_lower_values() {
    let mut eval = Evaluator::new();
    assert_eq!(eval.handle("100 6 2 -"), "4");
    assert_eq!(eval.depth(), 2);
    assert_eq!(eval.handle("/"), "25");
}

#[test]
fn eval_stack_persists_across_lines() {
    let mut eval = Evaluator::new();
    assert_eq!(eval.handle("5"), "5");
    assert_eq!(eval.handle("3 +"), "8");
}

#[test]
fn eval_expression_split_over_lines() {
    let mut eval = Evaluator::new();
    eval.handle("2");
    eval.handle("3");
    eval.handle("4");
    assert_eq!(eval.handle("* +"), "14");
}

#[test]
fn eval_negative_operand() {
    assert_eq!(fresh("-5 3 +"), "-2");
}

#[test]
fn eval_invalid_input() {
    let mut eval = Evaluator::new();
    eval.handle("1");
    assert_eq!(eval.eval_line("text"), Err(EvalError::InvalidInput));
    assert_eq!(eval.eval_line("1 2 x"), Err(EvalError::InvalidInput));
    assert_eq!(eval.depth(), 1);
}

#[test]
fn eval_insufficient_operands_on_fresh_stack() {
    let mut eval = Evaluator::new();
    assert_eq!(
        eval.eval_line("+"),
        Err(EvalError::InsufficientOperands {
            operator: Operator::Add,
            depth: 0
        })
    );
    assert_eq!(eval.depth(), 0);
}

#[test]
fn eval_insufficient_operands_keeps_single_value() {
    let mut eval = Evaluator::new();
    assert_eq!(
        eval.eval_line("4 -"),
        Err(EvalError::InsufficientOperands {
            operator: Operator::Sub,
            depth: 1
        })
    );
    assert_eq!(eval.top(), Some(4.0));
}

#[test]
fn eval_malformed_number_reports_top() {
    let mut eval = Evaluator::new();
    assert_eq!(
        eval.eval_line("3 1.2.3"),
        Err(EvalError::MalformedNumber {
            token: "1.2.3".into(),
            top: "3".into()
        })
    );
}

#[test]
fn eval_malformed_number_on_empty_stack() {
    let mut eval = Evaluator::new();
    assert_eq!(
        eval.eval_line("."),
        Err(EvalError::MalformedNumber {
            token: ".".into(),
            top: "empty".into()
        })
    );
}

#[test]
fn eval_partial_line_is_kept() {
    let mut eval = Evaluator::new();
    // 1 2 + applies, ++ stops the line, 9 is never pushed
    assert!(eval.eval_line("1 2 + ++ 9").is_err());
    assert_eq!(eval.depth(), 1);
    assert_eq!(eval.top(), Some(3.0));
}

#[test]
fn eval_stops_at_first_underflow() {
    let mut eval = Evaluator::new();
    assert!(eval.eval_line("5 + 7").is_err());
    assert_eq!(eval.depth(), 1);
    assert_eq!(eval.top(), Some(5.0));
}

#[test]
fn eval_division_by_zero_is_not_an_error() {
    assert_eq!(fresh("1 0 /"), "inf");
    assert_eq!(fresh("0 0 /"), "NaN");
}

#[test]
fn eval_blank_line_reports_top() {
    let mut eval = Evaluator::new();
    assert_eq!(eval.handle("   "), "empty");
    eval.handle("42");
    assert_eq!(eval.handle(""), "42");
    assert_eq!(eval.depth(), 1);
}

#[test]
fn eval_recovers_after_error() {
    let mut eval = Evaluator::new();
    eval.handle("*");
    eval.handle("oops");
    assert_eq!(eval.handle("6 7 *"), "42");
}

#[test]
fn eval_clear_stack() {
    let mut eval = Evaluator::new();
    eval.handle("1 2 3");
    eval.clear_stack();
    assert_eq!(eval.depth(), 0);
    assert_eq!(eval.top(), None);
}

#[test]
fn eval_trace_mode_does_not_change_response() {
    let mut eval = Evaluator::new();
    eval.set_trace_mode(true);
    assert_eq!(eval.handle("2 3 +"), "5");
}
