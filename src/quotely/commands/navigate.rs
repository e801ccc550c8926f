use crate::commands::{CmdMessage, CmdResult};
use crate::context::Context;
use crate::error::Result;
use crate::model::QuoteList;

pub fn enter(list: &QuoteList, context: &mut Context, quote_name: &str) -> Result<CmdResult> {
    let quote = list.find(quote_name)?;
    context.enter(quote.name())?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Now editing quote '{}' for {}",
        quote.name(),
        quote.customer_name()
    ))))
}

pub fn exit(context: &mut Context) -> Result<CmdResult> {
    let left = context.exit()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Finished editing quote '{}'",
        left
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotelyError;
    use crate::model::Quote;

    fn list() -> QuoteList {
        let mut list = QuoteList::new();
        list.add_quote(Quote::new("quote 1", "customer 1").unwrap())
            .unwrap();
        list
    }

    #[test]
    fn enter_existing_quote() {
        let mut ctx = Context::Outside;
        enter(&list(), &mut ctx, "quote 1").unwrap();
        assert_eq!(ctx.active_quote(), Some("quote 1"));
    }

    #[test]
    fn enter_missing_quote_keeps_context() {
        let mut ctx = Context::Outside;
        assert!(matches!(
            enter(&list(), &mut ctx, "quote 9"),
            Err(QuotelyError::QuoteNotFound(_))
        ));
        assert_eq!(ctx, Context::Outside);
    }

    #[test]
    fn exit_requires_being_inside() {
        let mut ctx = Context::Outside;
        assert!(matches!(
            exit(&mut ctx),
            Err(QuotelyError::ContextViolation(_))
        ));

        let mut ctx = Context::Inside("quote 1".into());
        exit(&mut ctx).unwrap();
        assert_eq!(ctx, Context::Outside);
    }
}
