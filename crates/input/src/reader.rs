//! Line-based selection reader.
//!
//! Reads one integer per line. Blank lines are skipped; anything else that does not start
//! with an integer is reported as [`InputError::Malformed`] and the rest of that line is
//! discarded, so the caller can simply prompt again. Lines are taken as raw bytes, so input
//! that is not valid UTF-8 is malformed rather than an I/O failure. Only the first token of a
//! line is read; the rest of the line is dropped.

use std::io::{self, BufRead};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid input {0:?}, please type a number")]
    Malformed(String),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Malformed input can be retried; I/O failures cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::Malformed(_))
    }
}

pub struct SelectionReader<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> SelectionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(64),
        }
    }

    /// Read the next selection. `Ok(None)` means end of input.
    pub fn read_selection(&mut self) -> Result<Option<i64>, InputError> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }

            let text = String::from_utf8_lossy(&self.line);
            let Some(token) = text.split_whitespace().next() else {
                continue;
            };

            return match parse_selection(token) {
                Some(code) => Ok(Some(code)),
                None => {
                    log::debug!("discarding malformed selection {:?}", text.trim_end());
                    Err(InputError::Malformed(token.to_string()))
                }
            };
        }
    }
}

/// Parse a leading integer the way a `%d` conversion does: optional sign, then digits;
/// trailing characters after the digits are ignored.
pub fn parse_selection(token: &str) -> Option<i64> {
    let digits_start = usize::from(token.starts_with(['+', '-']));
    let digits_end = token[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(token.len(), |i| digits_start + i);
    if digits_end == digits_start {
        return None;
    }
    token[..digits_end].parse().ok()
}
