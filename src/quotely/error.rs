use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotelyError {
    #[error("Unknown command: '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("Malformed arguments: {0}")]
    MalformedArguments(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: '{value}' ({reason})")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Invalid price: '{0}' (must be a number greater than 0 and less than 10000)")]
    InvalidPrice(String),

    #[error("Invalid quantity: '{0}' (must be a whole number from 1 to 999)")]
    InvalidQuantity(String),

    #[error("Invalid tax rate: '{0}' (must be a number from 0 to 200)")]
    InvalidTaxRate(String),

    #[error("{0}")]
    ContextViolation(String),

    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    #[error("Item '{item}' not found in quote '{quote}'")]
    ItemNotFound { item: String, quote: String },

    #[error("Quote '{quote}' cannot have more than {max} items")]
    TooManyItems { quote: String, max: usize },

    #[error("A quote named '{0}' already exists")]
    DuplicateQuote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt data: {0}")]
    CorruptData(String),
}

pub type Result<T> = std::result::Result<T, QuotelyError>;
