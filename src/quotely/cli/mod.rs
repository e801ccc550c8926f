//! # CLI Layer
//!
//! Everything that touches the terminal lives here:
//!
//! 1. **Flags and logging** (`setup.rs`): clap definitions, tracing subscriber.
//! 2. **Wiring** (`commands.rs`): resolves the data directory, loads config,
//!    opens the session and runs it.
//! 3. **Console** (`console.rs`): prompts and stdin, the `Console` seam.
//! 4. **Output Formatting** (`print.rs`): `CmdResult` into colored lines and tables.
//!
//! Output functions build strings so they can be tested without a terminal.

mod commands;
mod console;
mod print;
mod setup;

pub use commands::run;
