//! The read-parse-execute-save loop.
//!
//! [`Session`] owns the whole model for the life of the process. Terminal I/O
//! goes through the [`Console`] trait and persistence through
//! [`DataStore`], so the loop runs the same against a terminal and a file or
//! against scripted input and memory.
//!
//! Nothing in here is fatal except the console failing to read: bad input
//! and failed saves are shown to the user and the loop carries on.

use crate::commands::{CmdMessage, CmdResult};
use crate::context::Context;
use crate::error::{QuotelyError, Result};
use crate::model::QuoteBook;
use crate::parser;
use crate::store::{codec, DataStore};
use tracing::{debug, info, warn};

pub trait Console {
    /// Next input line, or `None` at end of input.
    fn read_line(&mut self, context: &Context) -> Result<Option<String>>;

    fn show(&mut self, result: &CmdResult);

    fn show_error(&mut self, message: &str);
}

/// What happened when the session read the store at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Saved data was read and is in use.
    Loaded,
    /// Nothing had been saved yet.
    Empty,
    /// Saved data could not be used; the session started empty.
    Fallback(QuotelyError),
}

impl LoadOutcome {
    /// User-facing warning, if the outcome deserves one.
    pub fn warning(&self) -> Option<CmdMessage> {
        match self {
            LoadOutcome::Fallback(e) => Some(CmdMessage::warning(format!(
                "Could not load saved data ({}). Starting fresh.",
                e
            ))),
            _ => None,
        }
    }
}

pub struct Session<S: DataStore> {
    store: S,
    book: QuoteBook,
    context: Context,
}

impl<S: DataStore> Session<S> {
    /// Loads the saved book, falling back to an empty one rather than failing.
    pub fn open(store: S) -> (Self, LoadOutcome) {
        let (book, outcome) = match load_book(&store) {
            Ok(Some(book)) => {
                info!(
                    location = %store.location(),
                    quotes = book.quote_list.len(),
                    "data loaded"
                );
                (book, LoadOutcome::Loaded)
            }
            Ok(None) => {
                info!(location = %store.location(), "no saved data, starting empty");
                (QuoteBook::default(), LoadOutcome::Empty)
            }
            Err(e) => {
                warn!(location = %store.location(), error = %e, "falling back to empty data");
                (QuoteBook::default(), LoadOutcome::Fallback(e))
            }
        };

        let session = Self {
            store,
            book,
            context: Context::Outside,
        };
        (session, outcome)
    }

    pub fn book(&self) -> &QuoteBook {
        &self.book
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and runs one line. On error the model is unchanged.
    pub fn execute_line(&mut self, line: &str) -> Result<CmdResult> {
        let command = parser::parse(line, &self.context, &self.book.quote_list)?;
        debug!(?command, "parsed");
        let result = command.execute(&mut self.book, &mut self.context)?;
        debug!(context = %self.context, "executed");
        Ok(result)
    }

    pub fn save(&mut self) -> Result<()> {
        let blob = codec::encode(&self.book)?;
        self.store.save(&blob)?;
        debug!(location = %self.store.location(), "data saved");
        Ok(())
    }

    /// Runs until an exit command or end of input.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<()> {
        loop {
            let Some(line) = console.read_line(&self.context)? else {
                info!("end of input");
                break;
            };

            match self.execute_line(&line) {
                Ok(result) => {
                    console.show(&result);
                    if result.is_exit {
                        break;
                    }
                    if let Err(e) = self.save() {
                        warn!(error = %e, "save failed");
                        console.show_error(&format!(
                            "Could not save data: {}. Your changes are kept until the next successful save.",
                            e
                        ));
                    }
                }
                Err(e) => {
                    debug!(error = %e, "command rejected");
                    console.show_error(&e.to_string());
                }
            }
        }
        Ok(())
    }
}

fn load_book<S: DataStore>(store: &S) -> Result<Option<QuoteBook>> {
    match store.load()? {
        Some(blob) => codec::decode(&blob).map(Some),
        None => Ok(None),
    }
}
