//! # API Facade
//!
//! `HbnbApi` is the single entry point of the interpreter. It owns the store
//! (injected by the caller) and turns parsed lines into command calls:
//!
//! - [`HbnbApi::execute`] parses one raw line and dispatches it
//! - the per-verb methods are thin wrappers over `commands::<verb>::run`
//!
//! Like the command layer it returns data, never prints. Generic over
//! [`ObjectStore`] so the same facade runs on `FileStore` in the binary and
//! on `InMemoryStore` in tests.

use crate::commands::all::Listing;
use crate::commands::{self, CmdResult};
use crate::error::{HbnbError, Result};
use crate::parser::{self, Attributes, Command, Line, Syntax, Verb};
use crate::store::ObjectStore;
use tracing::debug;

/// What the shell should do after a line.
#[derive(Debug)]
pub enum Outcome {
    Continue(CmdResult),
    Quit,
}

pub struct HbnbApi<S: ObjectStore> {
    store: S,
}

impl<S: ObjectStore> HbnbApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Parse and run one input line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let result = match parser::parse_line(line) {
            Line::Empty => CmdResult::default(),
            Line::Quit => return Ok(Outcome::Quit),
            Line::Help(topic) => commands::help::run(topic.as_deref()),
            Line::Command(command) => self.dispatch(&command)?,
            Line::UnknownSyntax { type_name, method } => {
                return Err(HbnbError::UnknownSyntax { type_name, method })
            }
            Line::Malformed => return Err(HbnbError::MissingTypeName),
        };
        Ok(Outcome::Continue(result))
    }

    pub fn dispatch(&mut self, command: &Command) -> Result<CmdResult> {
        debug!(verb = %command.verb, syntax = ?command.syntax, "dispatching");
        let type_name = command.type_name.as_deref();
        let instance_id = command.instance_id.as_deref();

        match command.verb {
            Verb::Create => self.create(type_name),
            Verb::Show => self.show(type_name, instance_id),
            Verb::Destroy => self.destroy(type_name, instance_id),
            Verb::All => {
                let listing = match command.syntax {
                    Syntax::Classic => Listing::Quoted,
                    Syntax::Dot => Listing::Bare,
                };
                self.all(type_name, listing)
            }
            Verb::Count => self.count(type_name),
            Verb::Update => self.update(type_name, instance_id, &command.attributes),
        }
    }

    pub fn create(&mut self, type_name: Option<&str>) -> Result<CmdResult> {
        commands::create::run(&mut self.store, type_name)
    }

    pub fn show(&self, type_name: Option<&str>, instance_id: Option<&str>) -> Result<CmdResult> {
        commands::show::run(&self.store, type_name, instance_id)
    }

    pub fn destroy(
        &mut self,
        type_name: Option<&str>,
        instance_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::destroy::run(&mut self.store, type_name, instance_id)
    }

    pub fn all(&self, type_name: Option<&str>, listing: Listing) -> Result<CmdResult> {
        commands::all::run(&self.store, type_name, listing)
    }

    pub fn count(&self, type_name: Option<&str>) -> Result<CmdResult> {
        commands::count::run(&self.store, type_name)
    }

    pub fn update(
        &mut self,
        type_name: Option<&str>,
        instance_id: Option<&str>,
        attributes: &Attributes,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, type_name, instance_id, attributes)
    }
}
