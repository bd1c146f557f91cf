use rpnc::session::USAGE;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
}

/// Parse command-line arguments, returning the first unrecognized one on error
pub(crate) fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    // Skip program name
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            "--trace" => {
                cli.trace = true;
            }
            other => return Err(other.to_string()),
        }
    }

    Ok(cli)
}

pub(crate) fn print_help() {
    println!(
        r#"rpnc {} - interactive Reverse Polish Notation calculator

USAGE:
    rpnc                    Start an interactive session
    rpnc --trace            Also log each step to stderr
    rpnc --help             Show this help message
    rpnc --version          Show version

Input is read from stdin; piped input is evaluated line by line.

{}"#,
        VERSION, USAGE
    );
}

pub(crate) fn print_version() {
    println!("rpnc {}", VERSION);
}
