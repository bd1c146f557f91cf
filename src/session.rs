//! The interactive read loop
//!
//! Prints a banner, then reads lines until the exit keyword or end of input,
//! answering each with the evaluator's response.

use crate::console::{Console, ConsoleError};
use crate::eval::Evaluator;

/// Typed alone on a line (any case) to end the session
pub const EXIT_KEYWORD: &str = "q";
pub const PROMPT: &str = "> ";
pub const BANNER: &str =
    "RPN calculator started. Only numbers and arithmetic operators are allowed. Use 'q' for exit.";
pub const SHUTDOWN: &str = "RPN calculator stopped.";
pub const CLEARED: &str = "stack cleared";

pub const USAGE: &str = r#"Enter numbers and operators in postfix order:
    10 5 +        15
    10 5 -        5   (10 - 5)
    10 5 /        2   (10 / 5)
The stack carries over between lines:
    5             5
    3 +           8
Operators: + - * /
Commands:
    .help, .h     Show this help
    .clear, .c    Clear the stack
    q             Exit"#;

fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_KEYWORD)
}

/// Run a session over `console` until the exit keyword or end of input
pub fn run_session<C: Console + ?Sized>(
    console: &mut C,
    eval: &mut Evaluator,
) -> Result<(), ConsoleError> {
    console.write_line(BANNER)?;

    while let Some(line) = console.read_line(PROMPT)? {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if is_exit(trimmed) {
            break;
        }

        match trimmed {
            ".help" | ".h" => console.write_line(USAGE)?,
            ".clear" | ".c" => {
                eval.clear_stack();
                console.write_line(CLEARED)?;
            }
            _ => {
                let response = eval.handle(&line);
                console.write_line(&response)?;
            }
        }
    }

    console.write_line(SHUTDOWN)?;
    Ok(())
}
