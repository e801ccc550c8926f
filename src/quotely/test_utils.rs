//! Shared helpers for tests of the session loop.

use crate::commands::CmdResult;
use crate::context::Context;
use crate::error::Result;
use crate::session::Console;
use std::collections::VecDeque;

/// A [`Console`] fed from a fixed script that records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    /// Context passed to every `read_line` call, in order.
    pub prompts: Vec<Context>,
    /// Message contents from successful results.
    pub output: Vec<String>,
    pub errors: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Script lines never read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, context: &Context) -> Result<Option<String>> {
        self.prompts.push(context.clone());
        Ok(self.lines.pop_front())
    }

    fn show(&mut self, result: &CmdResult) {
        self.output
            .extend(result.messages.iter().map(|m| m.content.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
