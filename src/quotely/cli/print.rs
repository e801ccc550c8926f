use colored::Colorize;
use quotely::commands::{CmdMessage, CmdResult, MessageLevel, QuoteSummary, QuoteTotal};
use quotely::context::Context;
use quotely::model::Item;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 30;
const ACTIVE_MARKER: &str = "▶";

pub(super) fn prompt(context: &Context) -> String {
    match context.active_quote() {
        Some(name) => format!("quotely [{}]> ", name),
        None => "quotely> ".to_string(),
    }
}

pub(super) fn welcome_lines(company: &str) -> Vec<String> {
    vec![
        format!("Welcome to Quotely, {}!", company).bold().to_string(),
        "Type 'help' to see available commands."
            .dimmed()
            .to_string(),
    ]
}

pub(super) fn render_result(result: &CmdResult) -> Vec<String> {
    let mut lines = Vec::new();
    if !result.listed_quotes.is_empty() {
        lines.extend(render_quotes(&result.listed_quotes));
    }
    if !result.listed_items.is_empty() {
        lines.extend(render_items(&result.listed_items));
    }
    if let Some(total) = &result.total {
        lines.push(render_total(total));
    }
    lines.extend(result.messages.iter().map(render_message));
    lines
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

fn render_quotes(quotes: &[QuoteSummary]) -> Vec<String> {
    let mut lines = vec![format!(
        "    {:<4}{}  {}  {:>5}  {:>12}",
        "#",
        pad_to_width("Quote", NAME_WIDTH),
        pad_to_width("Customer", NAME_WIDTH),
        "Items",
        "Total"
    )
    .bold()
    .to_string()];

    for (i, quote) in quotes.iter().enumerate() {
        let marker = if quote.is_active {
            format!("  {} ", ACTIVE_MARKER)
        } else {
            "    ".to_string()
        };
        let idx = format!("{:<4}", format!("{}.", i + 1));
        let name = pad_to_width(&quote.name, NAME_WIDTH);
        let name = if quote.is_active {
            name.cyan().to_string()
        } else {
            name
        };
        lines.push(format!(
            "{}{}{}  {}  {:>5}  {:>12.2}",
            marker,
            idx.yellow(),
            name,
            pad_to_width(&quote.customer_name, NAME_WIDTH),
            quote.item_count,
            quote.total
        ));
    }
    lines
}

fn render_items(items: &[Item]) -> Vec<String> {
    let mut lines = vec![format!(
        "    {:<4}{}  {:>10}  {:>5}  {:>7}  {:>12}",
        "#",
        pad_to_width("Item", NAME_WIDTH),
        "Price",
        "Qty",
        "Tax",
        "Total"
    )
    .bold()
    .to_string()];

    for (i, item) in items.iter().enumerate() {
        let tax = if item.has_tax() {
            format!("{:.1}%", item.tax_rate())
        } else {
            "-".to_string()
        };
        lines.push(format!(
            "    {}{}  {:>10.2}  {:>5}  {:>7}  {:>12.2}",
            format!("{:<4}", format!("{}.", i + 1)).yellow(),
            pad_to_width(item.name(), NAME_WIDTH),
            item.price(),
            item.quantity(),
            tax,
            item.total()
        ));
    }
    lines
}

fn render_total(total: &QuoteTotal) -> String {
    format!(
        "Total for quote '{}' ({}): {}",
        total.quote_name,
        total.customer_name,
        format!("{:.2}", total.amount).bold()
    )
}

/// Pads or truncates `s` to exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let shown = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
