//! `flag/value` argument splitting.
//!
//! A flag is a recognized lowercase letter followed by `/` at the start of a
//! whitespace-delimited token. Its value runs until the next flag token, so values
//! may contain spaces (`i/Item 1 n/quote 1` yields `Item 1` and `quote 1`), and a
//! slash anywhere else is ordinary text.

use crate::error::{QuotelyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Item,
    Price,
    Quantity,
    TaxRate,
    Quote,
    Customer,
}

impl Flag {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'i' => Some(Flag::Item),
            'p' => Some(Flag::Price),
            'q' => Some(Flag::Quantity),
            't' => Some(Flag::TaxRate),
            'n' => Some(Flag::Quote),
            'c' => Some(Flag::Customer),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Flag::Item => 'i',
            Flag::Price => 'p',
            Flag::Quantity => 'q',
            Flag::TaxRate => 't',
            Flag::Quote => 'n',
            Flag::Customer => 'c',
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Flag::Item => "item name (i/)",
            Flag::Price => "price (p/)",
            Flag::Quantity => "quantity (q/)",
            Flag::TaxRate => "tax rate (t/)",
            Flag::Quote => "quote name (n/)",
            Flag::Customer => "name (c/)",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/", self.letter())
    }
}

/// The flags of one command line, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    entries: Vec<(Flag, String)>,
}

impl Args {
    pub fn parse(text: &str) -> Result<Self> {
        let starts = flag_starts(text);

        let leading_end = starts.first().map_or(text.len(), |(pos, _)| *pos);
        let leading = text[..leading_end].trim();
        if !leading.is_empty() {
            return Err(QuotelyError::MalformedArguments(format!(
                "'{}' is not a flag (expected something like i/NAME)",
                leading
            )));
        }

        let mut entries: Vec<(Flag, String)> = Vec::with_capacity(starts.len());
        for (idx, (pos, flag)) in starts.iter().enumerate() {
            let end = starts.get(idx + 1).map_or(text.len(), |(next, _)| *next);
            if entries.iter().any(|(seen, _)| seen == flag) {
                return Err(QuotelyError::MalformedArguments(format!(
                    "{} given more than once",
                    flag
                )));
            }
            // flag letter and '/' are both one byte
            let value = text[pos + 2..end].trim();
            entries.push((*flag, value.to_string()));
        }

        Ok(Self { entries })
    }

    pub fn get(&self, flag: Flag) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == flag)
            .map(|(_, value)| value.as_str())
    }

    pub fn require(&self, flag: Flag) -> Result<&str> {
        self.get(flag)
            .ok_or(QuotelyError::MissingField(flag.field_name()))
    }

    /// Fails on the first flag the command does not accept.
    pub fn allow_only(&self, allowed: &[Flag], command: &str) -> Result<()> {
        match self.entries.iter().find(|(f, _)| !allowed.contains(f)) {
            Some((flag, _)) => Err(QuotelyError::MalformedArguments(format!(
                "'{}' does not accept {}",
                command, flag
            ))),
            None => Ok(()),
        }
    }
}

/// Byte offsets of every token that opens with a recognized `x/` flag.
fn flag_starts(text: &str) -> Vec<(usize, Flag)> {
    let mut starts = Vec::new();
    let mut prev_is_space = true;
    for (pos, ch) in text.char_indices() {
        if prev_is_space && !ch.is_whitespace() {
            if let Some(flag) = flag_at(&text[pos..]) {
                starts.push((pos, flag));
            }
        }
        prev_is_space = ch.is_whitespace();
    }
    starts
}

fn flag_at(token: &str) -> Option<Flag> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some('/')) => Flag::from_letter(letter),
        _ => None,
    }
}
