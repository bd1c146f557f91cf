//! Common test utilities for rpnc integration tests

pub use rpnc::{EvalError, Evaluator};
use rpnc::{run_session, StreamConsole};
use std::io::Cursor;

/// Helper to evaluate one line on a fresh evaluator
#[allow(dead_code)]
pub fn eval(input: &str) -> Result<String, String> {
    rpnc::eval(input).map_err(|e| e.to_string())
}

/// Feed lines to a single evaluator and collect every response
#[allow(dead_code)]
pub fn eval_lines(lines: &[&str]) -> Vec<String> {
    let mut evaluator = Evaluator::new();
    lines.iter().map(|line| evaluator.handle(line)).collect()
}

/// Run a full session over in-memory input and return everything it printed
#[allow(dead_code)]
pub fn session_output(input: impl AsRef<[u8]>) -> String {
    let mut console = StreamConsole::new(Cursor::new(input.as_ref()), Vec::new());
    let mut evaluator = Evaluator::new();
    run_session(&mut console, &mut evaluator).unwrap();
    String::from_utf8(console.into_writer()).unwrap()
}
