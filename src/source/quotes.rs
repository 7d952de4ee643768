//! Strict quoting rules
//!
//! The csv reader accepts malformed quoting and keeps going. [`QuoteCheck`]
//! replays the raw bytes of every record and rejects:
//!
//! - a quote inside an unquoted field (`a,b"c`)
//! - text after the closing quote of a quoted field (`"a"b,c`)
//! - a quoted field still open at end of input (`a,"b`)
//!
//! A quote is only special at the start of a field; `""` inside a quoted
//! field is an escaped quote.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Quote state carried across the records of one input
#[derive(Debug)]
pub(crate) struct QuoteCheck {
    delimiter: u8,
    state: State,
    line: u64,
    quote_line: u64,
}

impl QuoteCheck {
    pub(crate) fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            state: State::FieldStart,
            line: 1,
            quote_line: 1,
        }
    }

    /// Scan the next stretch of raw input
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            let separator = byte == self.delimiter || byte == b'\n' || byte == b'\r';

            self.state = match (self.state, byte) {
                (State::Quoted, b'"') => State::QuoteInQuoted,
                (State::Quoted, _) => State::Quoted,
                (State::QuoteInQuoted, b'"') => State::Quoted,
                (State::FieldStart, b'"') => {
                    self.quote_line = self.line;
                    State::Quoted
                }
                (State::Unquoted, b'"') => {
                    return Err(Error::read(Some(self.line), "bare \" in non-quoted field"));
                }
                _ if separator => State::FieldStart,
                (State::QuoteInQuoted, _) => {
                    return Err(Error::read(
                        Some(self.line),
                        "extraneous or missing \" in quoted field",
                    ));
                }
                _ => State::Unquoted,
            };

            if byte == b'\n' {
                self.line += 1;
            }
        }

        Ok(())
    }

    /// Fail if the input so far ends inside a quoted field
    ///
    /// The csv reader only ends a record inside quotes at end of input.
    pub(crate) fn check_closed(&self) -> Result<()> {
        if self.state == State::Quoted {
            return Err(Error::read(
                Some(self.quote_line),
                "extraneous or missing \" in quoted field",
            ));
        }
        Ok(())
    }
}
