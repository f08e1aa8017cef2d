mod session;
mod store;

use chrono::ParseResult;
use rusqlite::types::Type;
use rusqlite::Row;

use crate::models::{OperatorRow, RankingError, TransactionRow};
use crate::types::OperatorCode;

pub use session::Session;
pub use store::Store;

/// Outcome of inserting a row keyed by a natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// The natural key was already taken, possibly by a concurrent writer.
    AlreadyExists
}

/// Natural-key lookups and inserts the import pipeline is written against.
///
/// Implementations are expected to stage writes until the caller commits, so a failing
/// batch leaves nothing behind.
pub trait Storage {
    fn operator_exists(&self, code: OperatorCode) -> Result<bool, RankingError>;
    fn insert_operator(&self, operator: &OperatorRow) -> Result<Insertion, RankingError>;
    fn transaction_exists(&self, sequence_key: &str) -> Result<bool, RankingError>;
    fn insert_transaction(&self, sequence_key: &str, transaction: &TransactionRow) -> Result<Insertion, RankingError>;
}

/// Reads a text column and converts it with `parse`, reporting failures as a column conversion error.
pub(crate) fn parsed_column<T>(row: &Row<'_>, index: usize, parse: fn(&str) -> ParseResult<T>) -> rusqlite::Result<T> {
    let value: String = row.get(index)?;

    parse(&value).map_err(|error| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error)))
}
