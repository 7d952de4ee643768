//! In-memory row source
//!
//! # Overview
//!
//! [`MemoryRowSource`] replays rows that are already split into cells, for
//! input that does not come from delimited text. Read failures can be
//! queued alongside rows with [`MemoryRowSource::from_results`] and are
//! returned in order.

use super::types::RowSource;
use crate::error::Result;
use crate::types::RawRow;
use std::collections::VecDeque;

/// Row source over rows that are already split into cells
#[derive(Debug, Default)]
pub struct MemoryRowSource {
    rows: VecDeque<Result<RawRow>>,
}

impl MemoryRowSource {
    /// Create a source from rows of cells
    pub fn new<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| Ok(row.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Create a source that replays read results, including failures
    pub fn from_results(rows: impl IntoIterator<Item = Result<RawRow>>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Rows not yet read
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for MemoryRowSource {
    fn read_row(&mut self) -> Result<Option<RawRow>> {
        self.rows.pop_front().transpose()
    }
}
