//! Session context: whether commands implicitly target an active quote.
//!
//! The context holds the active quote's *name*, never a reference into the
//! quote list. Anything that removes a quote must call [`Context::forget`] so
//! the context never points at a quote that no longer exists.

use crate::error::{QuotelyError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    Outside,
    Inside(String),
}

impl Context {
    pub fn is_inside(&self) -> bool {
        matches!(self, Context::Inside(_))
    }

    pub fn active_quote(&self) -> Option<&str> {
        match self {
            Context::Inside(name) => Some(name),
            Context::Outside => None,
        }
    }

    pub fn enter(&mut self, quote_name: &str) -> Result<()> {
        if let Context::Inside(current) = self {
            return Err(QuotelyError::ContextViolation(format!(
                "Already inside quote '{}'. Use 'finish' to leave it first.",
                current
            )));
        }
        *self = Context::Inside(quote_name.to_string());
        Ok(())
    }

    pub fn exit(&mut self) -> Result<String> {
        match std::mem::take(self) {
            Context::Inside(name) => Ok(name),
            Context::Outside => Err(QuotelyError::ContextViolation(
                "Not inside any quote.".to_string(),
            )),
        }
    }

    /// Drops back to `Outside` if `quote_name` is the active quote.
    /// Returns whether a transition happened.
    pub fn forget(&mut self, quote_name: &str) -> bool {
        if self.active_quote() == Some(quote_name) {
            *self = Context::Outside;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Outside => write!(f, "outside"),
            Context::Inside(name) => write!(f, "inside '{}'", name),
        }
    }
}
