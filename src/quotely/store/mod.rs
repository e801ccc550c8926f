//! # Storage Layer
//!
//! The core only needs to save and load one opaque blob holding the whole
//! [`QuoteBook`](crate::model::QuoteBook). [`DataStore`] is that contract;
//! [`codec`] turns the book into the blob and back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file
//!   (`data/quotely.json` by default), written atomically.
//! - [`memory::InMemoryStore`]: for tests, with simulated write failures.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "quoteList": {
//!     "quotes": [
//!       { "quoteName": "...", "customerName": "...",
//!         "items": [ { "itemName": "...", "price": 10.0, "quantity": 2, "taxRate": 0.0 } ] }
//!     ]
//!   },
//!   "companyName": { "companyName": "Default" }
//! }
//! ```
//!
//! Field names and order are fixed so existing data files keep loading.

use crate::error::Result;

pub mod codec;
pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Returns the saved blob, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the saved blob.
    fn save(&mut self, blob: &str) -> Result<()>;

    /// Human readable location, for logs and messages.
    fn location(&self) -> String;
}
