use crate::types::OperatorCode;
use thiserror::Error;

/// Every failure the importer and the reports can surface.
///
/// Parse errors (`MissingColumn`, `InvalidTimestamp`, `InvalidOperatorCode`, `Csv`,
/// `Decoding`, `UnknownEncoding`) are raised before anything is written. `EmptyResult`
/// means "no data for the period" and is not a system failure.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Parse error: required column [{column}] is missing from the header")]
    MissingColumn {
        column: &'static str
    },
    #[error("Parse error: line [{line}] has an unparseable date/time [{value}], expected DD/MM/YYYY HH:MM:SS")]
    InvalidTimestamp {
        line: u64,
        value: String
    },
    #[error("Parse error: line [{line}] has a non-integer operator code [{value}]")]
    InvalidOperatorCode {
        line: u64,
        value: String
    },
    #[error("Parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse error: input is not valid [{encoding}]")]
    Decoding {
        encoding: &'static str
    },
    #[error("Unknown character encoding [{0}]")]
    UnknownEncoding(String),
    #[error("Operator [{operator_code}] is not registered, import the operator roster and try again")]
    OperatorNotFound {
        operator_code: OperatorCode
    },
    #[error("Query [{query}] matched no transactions")]
    EmptyResult {
        query: &'static str
    },
    #[error("Unsupported database url [{0}], expected a SQLite path or a sqlite:// url")]
    UnsupportedDatabase(String),
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}

impl RankingError {
    pub fn invalid_timestamp(line: u64, date: &str, time: &str) -> Self {
        Self::InvalidTimestamp {
            line,
            value: format!("{date} {time}")
        }
    }

    pub fn invalid_operator_code(line: u64, value: &str) -> Self {
        Self::InvalidOperatorCode {
            line,
            value: value.to_string()
        }
    }

    pub fn operator_not_found(operator_code: OperatorCode) -> Self {
        Self::OperatorNotFound { operator_code }
    }

    pub fn empty_result(query: &'static str) -> Self {
        Self::EmptyResult { query }
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}
