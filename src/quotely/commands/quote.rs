use crate::commands::{CmdMessage, CmdResult};
use crate::context::Context;
use crate::error::Result;
use crate::model::{Quote, QuoteList};
use tracing::debug;

pub fn create(list: &mut QuoteList, quote_name: &str, customer_name: &str) -> Result<CmdResult> {
    let quote = Quote::new(quote_name, customer_name)?;
    list.add_quote(quote)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Quote '{}' created for {}",
        quote_name, customer_name
    ))))
}

/// Removes a quote and, if it was the active one, leaves it.
pub fn delete(list: &mut QuoteList, context: &mut Context, quote_name: &str) -> Result<CmdResult> {
    let removed = list.remove_quote(quote_name)?;
    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Quote '{}' deleted ({} items)",
        removed.name(),
        removed.items().len()
    )));

    if context.forget(quote_name) {
        debug!(quote = quote_name, "active quote deleted, context reset");
        result.add_message(CmdMessage::info("You are no longer inside a quote."));
    }

    Ok(result)
}
