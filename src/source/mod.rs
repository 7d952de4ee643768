//! Row source module
//!
//! Supplies delimited rows to the parser.
//!
//! - [`CsvRowSource`] - quoted delimited text from any `io::Read` or a file
//! - [`MemoryRowSource`] - rows already split into cells
//!
//! Delimited text is read strictly: unbalanced or stray quotes surface as
//! [`Error::Read`](crate::Error::Read) from [`RowSource::read_row`].

mod delimited;
mod input;
mod memory;
mod quotes;
mod types;

pub use delimited::CsvRowSource;
pub use memory::MemoryRowSource;
pub use types::RowSource;
