use super::DataStore;
use crate::error::{QuotelyError, Result};

/// In-memory storage for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blob: Option<String>,
    save_count: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `blob`, as if saved by an earlier session.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>> {
        if self.simulate_read_error {
            return Err(QuotelyError::Io(std::io::Error::other(
                "simulated read error",
            )));
        }
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(QuotelyError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.blob = Some(blob.to_string());
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
