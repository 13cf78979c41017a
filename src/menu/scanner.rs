//! Whitespace-token reader over any `BufRead`.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use super::value::{ParseValueError, Value, ValueKind};

/// Splits input lines into tokens on demand.
///
/// Blank lines are skipped. Running out of input is reported as
/// [`io::ErrorKind::UnexpectedEof`].
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-separated token.
    pub fn next_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            self.fill()?;
        }
    }

    /// Remaining tokens of the current line, re-joined with single spaces.
    ///
    /// Reads a fresh line when nothing is pending.
    pub fn rest_of_line(&mut self) -> io::Result<String> {
        if self.pending.is_empty() {
            self.fill()?;
        }
        let words: Vec<String> = self.pending.drain(..).collect();
        Ok(words.join(" "))
    }

    /// Read one answer of `kind`. Parse failures are returned, not retried.
    pub fn read_value(&mut self, kind: ValueKind) -> io::Result<Result<Value, ParseValueError>> {
        let raw = if kind.is_line() {
            self.rest_of_line()?
        } else {
            self.next_token()?
        };
        Ok(kind.parse(&raw))
    }

    fn fill(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
            if !self.pending.is_empty() {
                return Ok(());
            }
        }
    }
}
