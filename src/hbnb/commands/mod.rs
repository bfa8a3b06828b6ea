//! # Command Layer
//!
//! One module per operation. Each `run` takes a store and already-parsed
//! arguments, validates them in the fixed precedence order and returns a
//! [`CmdResult`]. Nothing here prints; the shell decides how messages look.
//!
//! A validation failure is returned as `Err`, which stops the operation.
//! Failures that should not stop it (one bad pair in a mapping update) are
//! reported as error messages inside an `Ok` result instead.

use crate::model::RecordKey;

pub mod all;
pub mod count;
pub mod create;
pub mod destroy;
pub mod help;
pub mod helpers;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn output(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Output,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<RecordKey>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, content: impl Into<String>) -> Self {
        self.messages.push(CmdMessage::output(content));
        self
    }

    pub fn with_affected(mut self, key: RecordKey) -> Self {
        self.affected_records.push(key);
        self
    }

    /// Message text in order, regardless of level
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}
