use hbnb::error::{HbnbError, Result};
use hbnb::shell::{Flow, Shell};
use hbnb::store::ObjectStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// Line-edited session for a terminal. Ctrl-C drops the current line,
/// Ctrl-D ends the session.
pub(super) fn interactive<S: ObjectStore>(shell: &mut Shell<S>, prompt: &str) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(editor_error)?;
    let mut stdout = io::stdout();

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if shell.handle_line(&line, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(editor_error(err)),
        }
    }

    Ok(())
}

fn editor_error(err: ReadlineError) -> HbnbError {
    match err {
        ReadlineError::Io(e) => HbnbError::Io(e),
        other => HbnbError::Io(io::Error::other(other)),
    }
}
