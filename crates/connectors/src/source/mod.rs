use model::row::SourceRow;

mod csv;
mod error;

pub use csv::CsvRecordSource;
pub use error::SourceError;

/// Result of a positional fetch against a record source.
#[derive(Debug, Clone, PartialEq)]
pub enum RowFetch {
    /// The data row at the requested position.
    Row(SourceRow),

    /// The position is at or beyond the last data row. Expected exhaustion,
    /// not an error: the caller skips this source for the current tick and
    /// keeps going.
    EndOfSource,
}
