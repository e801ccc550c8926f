use crate::error::{QuotelyError, Result};
use crate::model::QuoteBook;

/// Pretty-printed JSON with two-space indentation.
pub fn encode(book: &QuoteBook) -> Result<String> {
    Ok(serde_json::to_string_pretty(book)?)
}

/// Decodes a saved blob. A blank blob is an empty book; anything that parses but
/// breaks a model rule is rejected as a whole.
pub fn decode(blob: &str) -> Result<QuoteBook> {
    if blob.trim().is_empty() {
        return Ok(QuoteBook::default());
    }

    let book: QuoteBook = serde_json::from_str(blob)?;
    book.validate()
        .map_err(|e| QuotelyError::CorruptData(e.to_string()))?;
    Ok(book)
}
