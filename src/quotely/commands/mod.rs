//! # Command Layer
//!
//! A [`Command`] is a fully validated instruction produced by the parser. Each
//! variant carries everything it needs; the quote an item operation targets has
//! already been resolved from the context, so execution never re-interprets text.
//!
//! Execution re-checks what can change between parsing and execution (quote and
//! item existence, the item cap, name uniqueness) and either applies completely or
//! returns an error with the model untouched. Persistence is the caller's job.

use crate::context::Context;
use crate::error::Result;
use crate::model::{Item, QuoteBook};

pub mod company;
pub mod help;
pub mod item;
pub mod list;
pub mod navigate;
pub mod quote;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateQuote {
        quote_name: String,
        customer_name: String,
    },
    DeleteQuote {
        quote_name: String,
    },
    ListQuotes,
    EnterQuote {
        quote_name: String,
    },
    ExitQuote,
    AddItem {
        quote_name: String,
        item: Item,
    },
    DeleteItem {
        quote_name: String,
        item_name: String,
    },
    ListItems {
        quote_name: String,
    },
    ShowTotal {
        quote_name: String,
    },
    SetCompanyName {
        company_name: String,
    },
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, book: &mut QuoteBook, context: &mut Context) -> Result<CmdResult> {
        match self {
            Command::CreateQuote {
                quote_name,
                customer_name,
            } => quote::create(&mut book.quote_list, quote_name, customer_name),
            Command::DeleteQuote { quote_name } => {
                quote::delete(&mut book.quote_list, context, quote_name)
            }
            Command::ListQuotes => list::quotes(&book.quote_list, context),
            Command::EnterQuote { quote_name } => {
                navigate::enter(&book.quote_list, context, quote_name)
            }
            Command::ExitQuote => navigate::exit(context),
            Command::AddItem { quote_name, item } => {
                item::add(&mut book.quote_list, quote_name, item.clone())
            }
            Command::DeleteItem {
                quote_name,
                item_name,
            } => item::delete(&mut book.quote_list, quote_name, item_name),
            Command::ListItems { quote_name } => list::items(&book.quote_list, quote_name),
            Command::ShowTotal { quote_name } => list::total(&book.quote_list, quote_name),
            Command::SetCompanyName { company_name } => {
                company::set(&mut book.company_name, company_name)
            }
            Command::Help => Ok(help::run()),
            Command::Exit => {
                let mut result = CmdResult::default();
                result.is_exit = true;
                result.add_message(CmdMessage::info("Bye. Your quotes have been saved."));
                Ok(result)
            }
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One row of the quote listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub name: String,
    pub customer_name: String,
    pub item_count: usize,
    pub total: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteTotal {
    pub quote_name: String,
    pub customer_name: String,
    pub amount: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_quotes: Vec<QuoteSummary>,
    pub listed_items: Vec<Item>,
    pub total: Option<QuoteTotal>,
    pub messages: Vec<CmdMessage>,
    pub is_exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<QuoteSummary>) -> Self {
        self.listed_quotes = quotes;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_total(mut self, total: QuoteTotal) -> Self {
        self.total = Some(total);
        self
    }
}
