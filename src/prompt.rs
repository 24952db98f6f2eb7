//! Bounded interactive prompting
//!
//! All console interaction goes through `Prompter`, which owns an injected
//! input source and output sink so the retry loops are testable without a
//! real terminal.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::account::AccountIdentifier;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter wired to the process console.
    pub fn stdio(max_attempts: usize) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), max_attempts)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    /// Write a prompt and read one trimmed line. EOF is an error: the whole
    /// interactive flow is unusable once input is gone.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Yes/no question. Only `y`/`yes` (any case) count as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n): ", prompt))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    /// Ask for an account reference until it parses, bounded by the attempt
    /// limit. Parse failures are recoverable and re-prompt with the reason.
    pub fn ask_account(&mut self) -> Result<AccountIdentifier> {
        for _ in 0..self.max_attempts {
            let raw = self.ask("Enter Twitter account (username only or full URL): ")?;
            match AccountIdentifier::parse(&raw) {
                Ok(account) => return Ok(account),
                Err(e) => {
                    writeln!(self.output, "{}. Please try again.", e)?;
                }
            }
        }
        Err(Error::AttemptsExhausted(self.max_attempts))
    }

    /// Ask for a login/password pair until it validates, bounded by the
    /// attempt limit.
    pub fn ask_credentials(&mut self) -> Result<Credentials> {
        for _ in 0..self.max_attempts {
            let login = self.ask("Enter your Twitter username: ")?;
            let password = self.ask("Enter your Twitter password: ")?;
            match Credentials::new(&login, &password) {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    writeln!(self.output, "{}. Please try again.", e)?;
                }
            }
        }
        Err(Error::AttemptsExhausted(self.max_attempts))
    }
}
