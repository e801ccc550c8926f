//! # Command Parser
//!
//! Turns one line of user input into a validated [`Command`], or a
//! [`QuotelyError`] saying exactly what was wrong.
//!
//! ## Grammar
//!
//! ```text
//! line    := keyword [subword] args
//! keyword := first whitespace-delimited token, case-insensitive
//! args    := { flag "/" value }        (see `args.rs`)
//! ```
//!
//! ## Context rule
//!
//! Commands that target a quote (`add`, `delete`, `delete quote`, `show`, `total`)
//! read the session [`Context`]:
//!
//! | Context      | `n/` given          | `n/` absent          |
//! |--------------|---------------------|----------------------|
//! | `Inside(q)`  | `ContextViolation`  | target is `q`        |
//! | `Outside`    | target is the value | `ContextViolation`   |
//!
//! ## Check order
//!
//! syntax → context rule → unexpected flags → required flags → field validation
//! → quote/item lookup → item cap. Nothing is mutated here; a `Command` is only
//! built once every check has passed.

use crate::commands::Command;
use crate::context::Context;
use crate::error::{QuotelyError, Result};
use crate::model::{Item, Quote, QuoteList};
use crate::validation::{
    parse_price, parse_quantity, parse_tax_rate, validate_name, validate_text,
    MAX_ITEMS_PER_QUOTE,
};

pub mod args;

use args::{Args, Flag};

pub fn parse(line: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let line = line.trim();
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    match keyword.to_ascii_lowercase().as_str() {
        "quote" | "new" => create_quote(rest, context, quotes),
        "create" => create_quote(strip_word(rest, "quote").unwrap_or(rest), context, quotes),
        "delete" => match strip_word(rest, "quote") {
            Some(rest) => delete_quote(rest, context, quotes),
            None => delete_item(rest, context, quotes),
        },
        "list" => no_args(rest, "list").map(|_| Command::ListQuotes),
        "enter" | "nav" => enter_quote(rest, context, quotes),
        "finish" | "unnav" => exit_quote(rest, context),
        "exit" => match strip_word(rest, "quote") {
            Some(rest) => exit_quote(rest, context),
            None => no_args(rest, "exit").map(|_| Command::Exit),
        },
        "bye" | "quit" => no_args(rest, keyword).map(|_| Command::Exit),
        "add" => add_item(rest, context, quotes),
        "show" => {
            let quote = quote_target(rest, context, quotes, "show")?;
            Ok(Command::ListItems {
                quote_name: quote.name().to_string(),
            })
        }
        "total" => {
            let quote = quote_target(rest, context, quotes, "total")?;
            Ok(Command::ShowTotal {
                quote_name: quote.name().to_string(),
            })
        }
        "register" | "setcompany" => set_company(rest),
        "help" => no_args(rest, "help").map(|_| Command::Help),
        _ => Err(QuotelyError::UnknownCommand(keyword.to_string())),
    }
}

fn create_quote(rest: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let args = Args::parse(rest)?;
    if let Some(active) = context.active_quote() {
        return Err(QuotelyError::ContextViolation(format!(
            "Cannot create a quote while editing '{}'. Use 'finish' first.",
            active
        )));
    }
    args.allow_only(&[Flag::Quote, Flag::Customer], "quote")?;

    let quote_name = args.require(Flag::Quote)?;
    let customer_name = args.require(Flag::Customer)?;

    let quote_name = validate_name("quote name", quote_name)?;
    let customer_name = validate_text("customer name", customer_name)?;
    if quotes.contains(&quote_name) {
        return Err(QuotelyError::DuplicateQuote(quote_name));
    }

    Ok(Command::CreateQuote {
        quote_name,
        customer_name,
    })
}

fn delete_quote(rest: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let quote = quote_target(rest, context, quotes, "delete quote")?;
    Ok(Command::DeleteQuote {
        quote_name: quote.name().to_string(),
    })
}

fn enter_quote(rest: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let args = Args::parse(rest)?;
    if let Some(active) = context.active_quote() {
        return Err(QuotelyError::ContextViolation(format!(
            "Already inside quote '{}'. Use 'finish' first.",
            active
        )));
    }
    args.allow_only(&[Flag::Quote], "nav")?;

    let quote_name = validate_name("quote name", args.require(Flag::Quote)?)?;
    let quote = quotes.find(&quote_name)?;
    Ok(Command::EnterQuote {
        quote_name: quote.name().to_string(),
    })
}

fn exit_quote(rest: &str, context: &Context) -> Result<Command> {
    no_args(rest, "finish")?;
    if !context.is_inside() {
        return Err(QuotelyError::ContextViolation(
            "Not inside any quote.".to_string(),
        ));
    }
    Ok(Command::ExitQuote)
}

fn add_item(rest: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let args = Args::parse(rest)?;
    let target = context_target(&args, context, "add")?;
    args.allow_only(
        &[
            Flag::Item,
            Flag::Price,
            Flag::Quantity,
            Flag::TaxRate,
            Flag::Quote,
        ],
        "add",
    )?;

    let name = args.require(Flag::Item)?;
    let price = args.require(Flag::Price)?;
    let quantity = args.require(Flag::Quantity)?;

    let name = validate_name("item name", name)?;
    let price = parse_price(price)?;
    let quantity = parse_quantity(quantity)?;
    let tax_rate = args
        .get(Flag::TaxRate)
        .map(parse_tax_rate)
        .transpose()?
        .unwrap_or(0.0);

    let quote = quotes.find(&validate_name("quote name", target)?)?;
    if !quote.has_room() {
        return Err(QuotelyError::TooManyItems {
            quote: quote.name().to_string(),
            max: MAX_ITEMS_PER_QUOTE,
        });
    }

    Ok(Command::AddItem {
        quote_name: quote.name().to_string(),
        item: Item::new(&name, price, quantity, tax_rate)?,
    })
}

fn delete_item(rest: &str, context: &Context, quotes: &QuoteList) -> Result<Command> {
    let args = Args::parse(rest)?;
    let target = context_target(&args, context, "delete")?;
    args.allow_only(&[Flag::Item, Flag::Quote], "delete")?;

    let item_name = validate_name("item name", args.require(Flag::Item)?)?;
    let quote = quotes.find(&validate_name("quote name", target)?)?;
    if quote.find_item(&item_name).is_none() {
        return Err(QuotelyError::ItemNotFound {
            item: item_name,
            quote: quote.name().to_string(),
        });
    }

    Ok(Command::DeleteItem {
        quote_name: quote.name().to_string(),
        item_name,
    })
}

fn set_company(rest: &str) -> Result<Command> {
    let args = Args::parse(rest)?;
    args.allow_only(&[Flag::Customer], "register")?;
    let company_name = validate_text("company name", args.require(Flag::Customer)?)?;
    Ok(Command::SetCompanyName { company_name })
}

/// Resolves the quote a command with only an optional `n/` flag targets.
fn quote_target<'a>(
    rest: &str,
    context: &Context,
    quotes: &'a QuoteList,
    command: &str,
) -> Result<&'a Quote> {
    let args = Args::parse(rest)?;
    let target = context_target(&args, context, command)?;
    args.allow_only(&[Flag::Quote], command)?;
    quotes.find(&validate_name("quote name", target)?)
}

/// Applies the context rule: `n/` is forbidden inside a quote and required outside.
fn context_target<'a>(args: &'a Args, context: &'a Context, command: &str) -> Result<&'a str> {
    match (context.active_quote(), args.get(Flag::Quote)) {
        (Some(active), None) => Ok(active),
        (None, Some(named)) => Ok(named),
        (Some(active), Some(_)) => Err(QuotelyError::ContextViolation(format!(
            "You are inside quote '{}': '{}' cannot take n/. Use 'finish' to work on other quotes.",
            active, command
        ))),
        (None, None) => Err(QuotelyError::ContextViolation(format!(
            "'{}' needs a quote outside of one: add n/QUOTE, or 'nav' into a quote first.",
            command
        ))),
    }
}

/// Returns what follows `word` if it is the first token of `rest`.
fn strip_word<'a>(rest: &'a str, word: &str) -> Option<&'a str> {
    let rest = rest.trim_start();
    let (first, remainder) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    first.eq_ignore_ascii_case(word).then_some(remainder)
}

fn no_args(rest: &str, command: &str) -> Result<()> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(QuotelyError::MalformedArguments(format!(
            "'{}' does not take arguments",
            command
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuoteBook;

    fn book_with_quote() -> QuoteBook {
        let mut book = QuoteBook::default();
        book.quote_list
            .add_quote(Quote::new("quote 1", "customer 1").unwrap())
            .unwrap();
        book
    }

    fn inside() -> Context {
        Context::Inside("quote 1".into())
    }

    // --- add item ---

    #[test]
    fn add_inside_quote() {
        let book = book_with_quote();
        let cmd = parse("add i/Item1 p/10.0 q/2", &inside(), &book.quote_list).unwrap();
        assert_eq!(
            cmd,
            Command::AddItem {
                quote_name: "quote 1".into(),
                item: Item::new("Item1", 10.0, 2, 0.0).unwrap(),
            }
        );

        let cmd = parse("add i/Item2 p/9999.99 q/999 t/200", &inside(), &book.quote_list);
        assert!(matches!(cmd, Ok(Command::AddItem { .. })));
    }

    #[test]
    fn add_outside_quote_with_name() {
        let book = book_with_quote();
        let ctx = Context::Outside;
        let cmd = parse("add i/Item 1 n/quote 1 p/10.0 q/2", &ctx, &book.quote_list).unwrap();
        match cmd {
            Command::AddItem { quote_name, item } => {
                assert_eq!(quote_name, "quote 1");
                assert_eq!(item.name(), "Item 1");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(parse("add i/Item2 n/quote 1 p/9999.99 q/999 t/200", &ctx, &book.quote_list).is_ok());
    }

    #[test]
    fn add_is_context_sensitive() {
        let book = book_with_quote();
        let list = &book.quote_list;

        assert!(parse("add i/Item1 p/10.0 q/2", &inside(), list).is_ok());
        assert!(matches!(
            parse("add i/Item1 p/10.0 q/2 n/quote 1", &inside(), list),
            Err(QuotelyError::ContextViolation(_))
        ));
        assert!(matches!(
            parse("add i/Item1 p/10.0 q/2", &Context::Outside, list),
            Err(QuotelyError::ContextViolation(_))
        ));
        assert!(parse("add i/Item1 p/10.0 q/2 n/quote 1", &Context::Outside, list).is_ok());
    }

    #[test]
    fn add_rejects_invalid_fields() {
        let book = book_with_quote();
        let list = &book.quote_list;
        let ctx = inside();

        let cases: &[(&str, fn(&QuotelyError) -> bool)] = &[
            ("add i/Item1 p/invalidprice q/2", |e| matches!(e, QuotelyError::InvalidPrice(_))),
            ("add i/loooooooooooooooooooooooooooooooooongName p/1 q/2", |e| {
                matches!(e, QuotelyError::InvalidName { .. })
            }),
            ("add i/!nv@l!#$%Name p/1 q/2", |e| matches!(e, QuotelyError::InvalidName { .. })),
            ("add i/Item1 p/10000.00 q/2", |e| matches!(e, QuotelyError::InvalidPrice(_))),
            ("add i/Item1 p/0 q/2", |e| matches!(e, QuotelyError::InvalidPrice(_))),
            ("add i/Item1 p/-20 q/2", |e| matches!(e, QuotelyError::InvalidPrice(_))),
            ("add i/Item1 p/2 q/2.5", |e| matches!(e, QuotelyError::InvalidQuantity(_))),
            ("add i/Item1 p/2 q/1000", |e| matches!(e, QuotelyError::InvalidQuantity(_))),
            ("add i/Item1 p/2 q/1 t/-1", |e| matches!(e, QuotelyError::InvalidTaxRate(_))),
            ("add i/Item1 p/2 q/1 t/200.1", |e| matches!(e, QuotelyError::InvalidTaxRate(_))),
            ("add p/invalidprice q/2", |e| matches!(e, QuotelyError::MissingField(_))),
            ("add p/10000.00 q/2", |e| matches!(e, QuotelyError::MissingField(_))),
        ];

        for (line, expected) in cases {
            let err = parse(line, &ctx, list).unwrap_err();
            assert!(expected(&err), "{line}: unexpected error {err:?}");
        }
    }

    #[test]
    fn add_outside_with_bad_values() {
        let book = book_with_quote();
        let list = &book.quote_list;
        let ctx = Context::Outside;

        assert!(matches!(
            parse("add n/invalid quote i/Item1 p/10.0 q/2", &ctx, list),
            Err(QuotelyError::QuoteNotFound(_))
        ));
        assert!(matches!(
            parse("add n/quote 1 i/Item1 p/-0.3 q/2", &ctx, list),
            Err(QuotelyError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse("add n/quote 1 i/Item1 p/12.2 q/-10", &ctx, list),
            Err(QuotelyError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn add_rejects_unknown_and_duplicate_flags() {
        let book = book_with_quote();
        let list = &book.quote_list;
        assert!(matches!(
            parse("add i/Item1 p/1 q/1 c/someone", &inside(), list),
            Err(QuotelyError::MalformedArguments(_))
        ));
        assert!(matches!(
            parse("add i/Item1 p/1 p/2 q/1", &inside(), list),
            Err(QuotelyError::MalformedArguments(_))
        ));
        assert!(matches!(
            parse("add Item1 p/1 q/1", &inside(), list),
            Err(QuotelyError::MalformedArguments(_))
        ));
    }

    #[test]
    fn item_cap_is_checked_at_parse_and_execute() {
        let mut book = book_with_quote();
        let mut ctx = inside();

        for _ in 0..MAX_ITEMS_PER_QUOTE - 1 {
            let cmd = parse("add i/Item p/1.23 q/1 t/10.00", &ctx, &book.quote_list).unwrap();
            cmd.execute(&mut book, &mut ctx).unwrap();
        }

        // Two commands parsed while one slot is left: both parse, only the first fits.
        let first = parse("add i/Item p/1.23 q/1", &ctx, &book.quote_list).unwrap();
        let second = parse("add i/Item p/1.23 q/1", &ctx, &book.quote_list).unwrap();
        first.execute(&mut book, &mut ctx).unwrap();
        assert!(matches!(
            second.execute(&mut book, &mut ctx),
            Err(QuotelyError::TooManyItems { max: 30, .. })
        ));

        assert!(matches!(
            parse("add i/Item p/1.23 q/1 t/10.00", &ctx, &book.quote_list),
            Err(QuotelyError::TooManyItems { .. })
        ));
        assert_eq!(
            book.quote_list.get("quote 1").unwrap().items().len(),
            MAX_ITEMS_PER_QUOTE
        );
    }

    #[test]
    fn executing_add_appends_matching_item() {
        let mut book = book_with_quote();
        let mut ctx = inside();
        let cmd = parse("add i/Item1 p/10.0 q/2", &ctx, &book.quote_list).unwrap();
        cmd.execute(&mut book, &mut ctx).unwrap();

        let items = book.quote_list.get("quote 1").unwrap().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Item1");
        assert_eq!(items[0].price(), 10.0);
        assert_eq!(items[0].quantity(), 2);
        assert_eq!(items[0].tax_rate(), 0.0);
    }

    // --- delete item ---

    fn book_with_item() -> QuoteBook {
        let mut book = book_with_quote();
        book.quote_list
            .get_mut("quote 1")
            .unwrap()
            .add_item(Item::new("Item1", 10.0, 4, 0.0).unwrap())
            .unwrap();
        book
    }

    #[test]
    fn delete_item_inside_and_outside() {
        let book = book_with_item();
        let list = &book.quote_list;

        assert!(matches!(
            parse("delete i/Item1", &inside(), list),
            Ok(Command::DeleteItem { .. })
        ));
        assert!(matches!(
            parse("delete i/Item1 n/quote 1", &Context::Outside, list),
            Ok(Command::DeleteItem { .. })
        ));
    }

    #[test]
    fn delete_item_errors() {
        let book = book_with_item();
        let list = &book.quote_list;

        assert!(matches!(
            parse("delete i/Item1", &Context::Outside, list),
            Err(QuotelyError::ContextViolation(_))
        ));
        assert!(matches!(
            parse("delete i/invalid item", &inside(), list),
            Err(QuotelyError::ItemNotFound { .. })
        ));
        assert!(matches!(
            parse("delete i/item1", &inside(), list),
            Err(QuotelyError::ItemNotFound { .. })
        ));
        assert!(matches!(
            parse("delete", &inside(), list),
            Err(QuotelyError::MissingField(_))
        ));
    }

    #[test]
    fn lookup_names_follow_name_rule() {
        let book = book_with_item();
        let list = &book.quote_list;
        let invalid_name = |line: &str, ctx: &Context| {
            matches!(parse(line, ctx, list), Err(QuotelyError::InvalidName { .. }))
        };

        assert!(invalid_name("delete i/", &inside()));
        assert!(invalid_name("delete i/bad!name", &inside()));
        assert!(invalid_name("delete i/x n/bad!quote", &Context::Outside));
        assert!(invalid_name("nav n/bad!quote", &Context::Outside));
        assert!(invalid_name("nav n/", &Context::Outside));
        assert!(invalid_name("show n/bad!quote", &Context::Outside));
        assert!(invalid_name("total n/bad!quote", &Context::Outside));
        assert!(invalid_name("delete quote n/bad!quote", &Context::Outside));
        assert!(invalid_name("add i/Item1 p/1 q/1 n/bad!quote", &Context::Outside));
    }

    // --- quotes ---

    #[test]
    fn create_quote_variants() {
        let list = QuoteList::new();
        let expected = Command::CreateQuote {
            quote_name: "quote 1".into(),
            customer_name: "Jane Doe".into(),
        };
        for line in [
            "quote n/quote 1 c/Jane Doe",
            "new c/Jane Doe n/quote 1",
            "create quote n/quote 1 c/Jane Doe",
            "CREATE n/quote 1 c/Jane Doe",
        ] {
            assert_eq!(parse(line, &Context::Outside, &list).unwrap(), expected, "{line}");
        }
    }

    #[test]
    fn create_quote_errors() {
        let book = book_with_quote();
        let list = &book.quote_list;

        assert!(matches!(
            parse("quote n/quote 1 c/x", &Context::Outside, list),
            Err(QuotelyError::DuplicateQuote(_))
        ));
        assert!(matches!(
            parse("quote n/quote 2", &Context::Outside, list),
            Err(QuotelyError::MissingField(_))
        ));
        assert!(matches!(
            parse("quote n/bad!name", &Context::Outside, list),
            Err(QuotelyError::MissingField(_))
        ));
        assert!(matches!(
            parse("quote c/x", &Context::Outside, list),
            Err(QuotelyError::MissingField(_))
        ));
        assert!(matches!(
            parse("quote n/bad_name c/x", &Context::Outside, list),
            Err(QuotelyError::InvalidName { .. })
        ));
        assert!(matches!(
            parse("quote n/quote 2 c/x", &inside(), list),
            Err(QuotelyError::ContextViolation(_))
        ));
    }

    #[test]
    fn delete_quote_follows_context_rule() {
        let book = book_with_quote();
        let list = &book.quote_list;

        assert_eq!(
            parse("delete quote n/quote 1", &Context::Outside, list).unwrap(),
            Command::DeleteQuote {
                quote_name: "quote 1".into()
            }
        );
        assert_eq!(
            parse("delete quote", &inside(), list).unwrap(),
            Command::DeleteQuote {
                quote_name: "quote 1".into()
            }
        );
        assert!(matches!(
            parse("delete quote", &Context::Outside, list),
            Err(QuotelyError::ContextViolation(_))
        ));
        assert!(matches!(
            parse("delete quote n/quote 1", &inside(), list),
            Err(QuotelyError::ContextViolation(_))
        ));
        assert!(matches!(
            parse("delete quote n/quote 9", &Context::Outside, list),
            Err(QuotelyError::QuoteNotFound(_))
        ));
    }

    #[test]
    fn deleting_active_quote_resets_context() {
        let mut book = book_with_quote();
        let mut ctx = inside();
        let cmd = parse("delete quote", &ctx, &book.quote_list).unwrap();
        cmd.execute(&mut book, &mut ctx).unwrap();
        assert_eq!(ctx, Context::Outside);
        assert!(book.quote_list.is_empty());
    }

    #[test]
    fn navigation() {
        let book = book_with_quote();
        let list = &book.quote_list;

        assert_eq!(
            parse("nav n/quote 1", &Context::Outside, list).unwrap(),
            Command::EnterQuote {
                quote_name: "quote 1".into()
            }
        );
        assert!(matches!(
            parse("enter n/nothing", &Context::Outside, list),
            Err(QuotelyError::QuoteNotFound(_))
        ));
        assert!(matches!(
            parse("nav n/quote 1", &inside(), list),
            Err(QuotelyError::ContextViolation(_))
        ));

        assert_eq!(parse("finish", &inside(), list).unwrap(), Command::ExitQuote);
        assert_eq!(parse("exit quote", &inside(), list).unwrap(), Command::ExitQuote);
        assert!(matches!(
            parse("finish", &Context::Outside, list),
            Err(QuotelyError::ContextViolation(_))
        ));
    }

    #[test]
    fn show_and_total_target_quotes() {
        let book = book_with_quote();
        let list = &book.quote_list;

        assert_eq!(
            parse("show", &inside(), list).unwrap(),
            Command::ListItems {
                quote_name: "quote 1".into()
            }
        );
        assert_eq!(
            parse("total n/quote 1", &Context::Outside, list).unwrap(),
            Command::ShowTotal {
                quote_name: "quote 1".into()
            }
        );
        assert!(matches!(
            parse("total", &Context::Outside, list),
            Err(QuotelyError::ContextViolation(_))
        ));
    }

    // --- misc ---

    #[test]
    fn simple_keywords() {
        let list = QuoteList::new();
        let ctx = Context::Outside;
        assert_eq!(parse("list", &ctx, &list).unwrap(), Command::ListQuotes);
        assert_eq!(parse("  LIST  ", &ctx, &list).unwrap(), Command::ListQuotes);
        assert_eq!(parse("help", &ctx, &list).unwrap(), Command::Help);
        for exit in ["bye", "quit", "exit", "Bye"] {
            assert_eq!(parse(exit, &ctx, &list).unwrap(), Command::Exit);
        }
        assert!(matches!(
            parse("list everything", &ctx, &list),
            Err(QuotelyError::MalformedArguments(_))
        ));
    }

    #[test]
    fn register_company() {
        let list = QuoteList::new();
        assert_eq!(
            parse("register c/Acme Pte Ltd", &Context::Outside, &list).unwrap(),
            Command::SetCompanyName {
                company_name: "Acme Pte Ltd".into()
            }
        );
        assert!(matches!(
            parse("setcompany c/", &Context::Outside, &list),
            Err(QuotelyError::InvalidName { .. })
        ));
    }

    #[test]
    fn unknown_commands() {
        let list = QuoteList::new();
        assert!(matches!(
            parse("frobnicate i/x", &Context::Outside, &list),
            Err(QuotelyError::UnknownCommand(_))
        ));
        assert!(matches!(
            parse("   ", &Context::Outside, &list),
            Err(QuotelyError::UnknownCommand(_))
        ));
    }
}
