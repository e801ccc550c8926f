use crate::commands::{CmdMessage, CmdResult};

const USAGE: &[(&str, &str)] = &[
    ("quote n/QUOTE c/CUSTOMER", "Create a new quote"),
    ("delete quote [n/QUOTE]", "Delete a quote"),
    ("list", "List all quotes"),
    ("nav n/QUOTE", "Start editing a quote"),
    ("finish", "Stop editing the current quote"),
    ("add i/ITEM p/PRICE q/QTY [t/TAX] [n/QUOTE]", "Add an item"),
    ("delete i/ITEM [n/QUOTE]", "Delete an item"),
    ("show [n/QUOTE]", "Show a quote's items"),
    ("total [n/QUOTE]", "Show a quote's total"),
    ("register c/COMPANY", "Set your company name"),
    ("help", "Show this help"),
    ("bye", "Save and quit"),
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    for (syntax, description) in USAGE {
        result.add_message(CmdMessage::info(format!("  {:<44} {}", syntax, description)));
    }
    result.add_message(CmdMessage::info(
        "n/QUOTE is required outside a quote and not allowed inside one.",
    ));
    result
}
