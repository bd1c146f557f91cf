//! rpnc - an interactive RPN calculator
//!
//! Usage:
//!   rpnc              Start a session (interactive on a terminal)
//!   rpnc --trace      Log each evaluation step to stderr
//!   rpnc --help       Show help

mod cli;
mod repl;

use cli::{parse_args, print_help, print_version};
use rpnc::Evaluator;
use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(arg) => {
            eprintln!("Unknown option: {}", arg);
            eprintln!("Try 'rpnc --help' for usage");
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let mut eval = Evaluator::new();
    eval.set_trace_mode(cli.trace);

    let result = if io::stdin().is_terminal() {
        repl::run_repl(&mut eval)
    } else {
        repl::run_piped(&mut eval)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
