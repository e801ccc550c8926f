use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Item, QuoteList};

/// Appends an item to a quote. The cap is checked against the live quote, so a
/// command parsed while there was still room fails here if the quote filled up since.
pub fn add(list: &mut QuoteList, quote_name: &str, item: Item) -> Result<CmdResult> {
    let quote = list.find_mut(quote_name)?;
    let message = format!(
        "Added {} x {} @ {:.2} to quote '{}'",
        item.quantity(),
        item.name(),
        item.price(),
        quote.name()
    );
    quote.add_item(item)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

pub fn delete(list: &mut QuoteList, quote_name: &str, item_name: &str) -> Result<CmdResult> {
    let quote = list.find_mut(quote_name)?;
    let removed = quote.remove_item(item_name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed '{}' from quote '{}'",
        removed.name(),
        quote.name()
    ))))
}
