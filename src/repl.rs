use rpnc::{run_session, Console, ConsoleError, Evaluator, StreamConsole};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// Console backed by a rustyline editor, for terminal sessions
struct EditorConsole {
    editor: DefaultEditor,
}

impl Console for EditorConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C - drop the current line and prompt again
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D - end of input
                    return Ok(None);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        println!("{}", line);
        Ok(())
    }
}

/// Run an interactive session with line editing and in-memory history
pub(crate) fn run_repl(eval: &mut Evaluator) -> Result<(), ConsoleError> {
    let mut console = EditorConsole {
        editor: DefaultEditor::new()?,
    };
    run_session(&mut console, eval)
}

/// Run a session over non-interactive stdin
pub(crate) fn run_piped(eval: &mut Evaluator) -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = StreamConsole::new(stdin.lock(), stdout.lock());
    run_session(&mut console, eval)
}
