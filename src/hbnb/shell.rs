//! Read-evaluate-print plumbing shared by the binary and the tests.
//!
//! [`Shell`] feeds lines to [`HbnbApi`] and writes what comes back to any
//! `Write`. Errors are written like any other output and never end the
//! session; only `quit`, `EOF` or the end of the input do.

use crate::api::{HbnbApi, Outcome};
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::HbnbError;
use crate::store::ObjectStore;
use console::style;
use std::io::{self, BufRead, Write};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: ObjectStore> {
    api: HbnbApi<S>,
    styled: bool,
}

impl<S: ObjectStore> Shell<S> {
    pub fn new(api: HbnbApi<S>) -> Self {
        Self { api, styled: false }
    }

    /// Colour error lines. Only worth enabling on a terminal.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Run one line and write its output.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match self.api.execute(line) {
            Ok(Outcome::Quit) => return Ok(Flow::Quit),
            Ok(Outcome::Continue(result)) => {
                for message in &result.messages {
                    self.write_message(message, out)?;
                }
            }
            Err(e) => self.write_error(&e, out)?,
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Process `input` line by line until it is exhausted or a line quits.
    /// Invalid UTF-8 is replaced rather than ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.handle_line(line, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn write_message<W: Write>(&self, message: &CmdMessage, out: &mut W) -> io::Result<()> {
        match message.level {
            MessageLevel::Output => writeln!(out, "{}", message.content),
            MessageLevel::Error => writeln!(
                out,
                "{}",
                style(&message.content).red().force_styling(self.styled)
            ),
        }
    }

    fn write_error<W: Write>(&self, e: &HbnbError, out: &mut W) -> io::Result<()> {
        if !e.is_user_error() {
            error!(error = %e, "command failed");
        }
        self.write_message(&CmdMessage::error(e.to_string()), out)
    }
}
