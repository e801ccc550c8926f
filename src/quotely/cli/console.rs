use super::print::{prompt, render_result, welcome_lines};
use colored::Colorize;
use quotely::commands::CmdResult;
use quotely::context::Context;
use quotely::error::Result;
use quotely::session::Console;
use std::io::{self, BufRead, Write};

/// Reads commands from stdin; results go to stdout, errors to stderr.
pub struct TerminalConsole {
    stdin: io::Stdin,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    pub fn welcome(&self, company: &str) {
        for line in welcome_lines(company) {
            println!("{}", line);
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, context: &Context) -> Result<Option<String>> {
        print!("{}", prompt(context));
        io::stdout().flush()?;

        // Invalid UTF-8 becomes replacement characters; the parser rejects the line.
        let mut bytes = Vec::new();
        if self.stdin.lock().read_until(b'\n', &mut bytes)? == 0 {
            println!();
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, result: &CmdResult) {
        for line in render_result(result) {
            println!("{}", line);
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}
