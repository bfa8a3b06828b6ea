//! # HBnB Shell Architecture
//!
//! hbnb is a line-oriented command interpreter over a small store of domain
//! records (`BaseModel`, `User`, `State`, `City`, `Amenity`, `Place`,
//! `Review`) that is written back to a JSON file after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Flags, config, logging setup, terminal vs piped input    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell.rs)                                           │
//! │  - One line in, rendered messages out, errors never fatal   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Parser (parser/)                            │
//! │  - Classic and dot-call grammars → one `Command` shape      │
//! │  - Dispatch to the command for the verb                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Validation in a fixed order, then the operation          │
//! │  - Return `CmdResult`, never print                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - `ObjectStore` trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is built by the caller and handed to [`api::HbnbApi::new`];
//! there is no global instance.
//!
//! ## Error precedence
//!
//! Every operation checks its input in the same order and reports only the
//! first failure: missing class name, unknown class, missing id, no such
//! instance, missing attribute name, missing value.
//!
//! ## Module Overview
//!
//! - [`api`]: Line execution and per-verb facade
//! - [`parser`]: Tokenizer for both syntaxes, quote stripping, typing
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Kind`, `Record`, `RecordKey`, `AttributeValue`
//! - [`shell`]: Read-evaluate-print loop over any reader and writer
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod shell;
pub mod store;
