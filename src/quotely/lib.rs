//! # Quotely Architecture
//!
//! Quotely is an interactive quote builder: a small shop keeps named quotes for
//! customers, each a list of priced line items, and asks for totals. The user
//! types one command per line; the state survives between runs in a single
//! JSON file.
//!
//! Like most of our tools it is a library with a thin terminal client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, logging setup, prompts, colored tables            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - read line → parse → execute → show → save                │
//! │  - Owns the QuoteBook and the Context                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser/) and Commands (commands/*.rs)              │
//! │  - Text → validated Command, or a QuotelyError              │
//! │  - Command → mutation of the model, returns CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over one opaque blob, JSON codec         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse, then execute
//!
//! All checking happens in the parser: a [`commands::Command`] that exists has
//! already passed syntax, context, field and lookup checks. Execution is then a
//! plain mutation of the model. A rejected line leaves the model as it was.
//!
//! ## Context
//!
//! The session is either outside any quote or inside one (see [`context`]).
//! Inside, item commands target the active quote implicitly; outside, they need
//! an explicit `n/QUOTE`. Giving both is an error.
//!
//! ## Module Overview
//!
//! - [`session`]: The command loop and the `Console` seam
//! - [`parser`]: Command line grammar and checks
//! - [`commands`]: Business logic for each command
//! - [`model`]: `Item`, `Quote`, `QuoteList`, `CompanyName`, `QuoteBook`
//! - [`context`]: Inside/outside-a-quote state
//! - [`validation`]: Name, price, quantity and tax rules
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration and data directory resolution
//! - [`error`]: Error types
//! - `cli`: Terminal console and output formatting for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
