use crate::error::{QuotelyError, Result};
use crate::validation::{
    check_price, check_quantity, check_tax_rate, validate_name, validate_text,
    MAX_ITEMS_PER_QUOTE,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY_NAME: &str = "Default";

/// A priced line entry within a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    item_name: String,
    price: f64,
    quantity: u32,
    #[serde(default)]
    tax_rate: f64,
}

impl Item {
    pub fn new(name: &str, price: f64, quantity: u32, tax_rate: f64) -> Result<Self> {
        Ok(Self {
            item_name: validate_name("item name", name)?,
            price: check_price(price)?,
            quantity: check_quantity(quantity)?,
            tax_rate: check_tax_rate(tax_rate)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.item_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn has_tax(&self) -> bool {
        self.tax_rate > 0.0
    }

    /// Price times quantity, before tax.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn total(&self) -> f64 {
        self.subtotal() * (1.0 + self.tax_rate / 100.0)
    }

    fn validate(&self) -> Result<()> {
        let rebuilt = Item::new(&self.item_name, self.price, self.quantity, self.tax_rate)?;
        if rebuilt != *self {
            return Err(QuotelyError::CorruptData(format!(
                "item '{}' is not in canonical form",
                self.item_name
            )));
        }
        Ok(())
    }
}

/// A named collection of items for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    quote_name: String,
    customer_name: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl Quote {
    pub fn new(name: &str, customer_name: &str) -> Result<Self> {
        Ok(Self {
            quote_name: validate_name("quote name", name)?,
            customer_name: validate_text("customer name", customer_name)?,
            items: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.quote_name
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_room(&self) -> bool {
        self.items.len() < MAX_ITEMS_PER_QUOTE
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Appends an item, refusing to grow past the per-quote cap.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if !self.has_room() {
            return Err(QuotelyError::TooManyItems {
                quote: self.quote_name.clone(),
                max: MAX_ITEMS_PER_QUOTE,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first item whose name matches exactly.
    pub fn remove_item(&mut self, name: &str) -> Result<Item> {
        let position = self
            .items
            .iter()
            .position(|item| item.name() == name)
            .ok_or_else(|| QuotelyError::ItemNotFound {
                item: name.to_string(),
                quote: self.quote_name.clone(),
            })?;
        Ok(self.items.remove(position))
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Item::total).sum()
    }

    fn validate(&self) -> Result<()> {
        validate_name("quote name", &self.quote_name)?;
        validate_text("customer name", &self.customer_name)?;
        if self.items.len() > MAX_ITEMS_PER_QUOTE {
            return Err(QuotelyError::TooManyItems {
                quote: self.quote_name.clone(),
                max: MAX_ITEMS_PER_QUOTE,
            });
        }
        self.items.iter().try_for_each(Item::validate)
    }
}

/// All quotes of the session, in creation order, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteList {
    #[serde(default)]
    quotes: Vec<Quote>,
}

impl QuoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Quote> {
        self.quotes.iter_mut().find(|q| q.name() == name)
    }

    /// Looks up a quote, failing with `QuoteNotFound`.
    pub fn find(&self, name: &str) -> Result<&Quote> {
        self.get(name)
            .ok_or_else(|| QuotelyError::QuoteNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Quote> {
        self.get_mut(name)
            .ok_or_else(|| QuotelyError::QuoteNotFound(name.to_string()))
    }

    pub fn add_quote(&mut self, quote: Quote) -> Result<()> {
        if self.contains(quote.name()) {
            return Err(QuotelyError::DuplicateQuote(quote.name().to_string()));
        }
        self.quotes.push(quote);
        Ok(())
    }

    pub fn remove_quote(&mut self, name: &str) -> Result<Quote> {
        let position = self
            .quotes
            .iter()
            .position(|q| q.name() == name)
            .ok_or_else(|| QuotelyError::QuoteNotFound(name.to_string()))?;
        Ok(self.quotes.remove(position))
    }

    /// Sum of price x quantity x (1 + tax/100) over the named quote's items.
    pub fn total_price(&self, name: &str) -> Result<f64> {
        self.find(name).map(Quote::total)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for quote in &self.quotes {
            quote.validate()?;
            if !seen.insert(quote.name()) {
                return Err(QuotelyError::DuplicateQuote(quote.name().to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyName {
    company_name: String,
}

impl Default for CompanyName {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl CompanyName {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            company_name: validate_text("company name", name)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.company_name
    }

    pub fn set(&mut self, name: &str) -> Result<()> {
        self.company_name = validate_text("company name", name)?;
        Ok(())
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.company_name)
    }
}

/// Everything that is persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBook {
    #[serde(default)]
    pub quote_list: QuoteList,
    #[serde(default)]
    pub company_name: CompanyName,
}

impl QuoteBook {
    pub fn validate(&self) -> Result<()> {
        self.quote_list.validate()?;
        validate_text("company name", self.company_name.as_str())?;
        Ok(())
    }
}
