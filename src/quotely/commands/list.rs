use crate::commands::{CmdMessage, CmdResult, QuoteSummary, QuoteTotal};
use crate::context::Context;
use crate::error::Result;
use crate::model::QuoteList;

pub fn quotes(list: &QuoteList, context: &Context) -> Result<CmdResult> {
    let summaries: Vec<QuoteSummary> = list
        .quotes()
        .iter()
        .map(|quote| QuoteSummary {
            name: quote.name().to_string(),
            customer_name: quote.customer_name().to_string(),
            item_count: quote.items().len(),
            total: quote.total(),
            is_active: context.active_quote() == Some(quote.name()),
        })
        .collect();

    let mut result = CmdResult::default().with_listed_quotes(summaries);
    if list.is_empty() {
        result.add_message(CmdMessage::info("No quotes yet."));
    }
    Ok(result)
}

/// Lists a quote's items together with its total.
pub fn items(list: &QuoteList, quote_name: &str) -> Result<CmdResult> {
    let quote = list.find(quote_name)?;
    let mut result = CmdResult::default()
        .with_listed_items(quote.items().to_vec())
        .with_total(QuoteTotal {
            quote_name: quote.name().to_string(),
            customer_name: quote.customer_name().to_string(),
            amount: quote.total(),
        });
    if quote.items().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Quote '{}' has no items.",
            quote.name()
        )));
    }
    Ok(result)
}

pub fn total(list: &QuoteList, quote_name: &str) -> Result<CmdResult> {
    let quote = list.find(quote_name)?;
    Ok(CmdResult::default().with_total(QuoteTotal {
        quote_name: quote.name().to_string(),
        customer_name: quote.customer_name().to_string(),
        amount: list.total_price(quote_name)?,
    }))
}
