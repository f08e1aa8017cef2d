use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::models::{Operator, RankingError};
use crate::storage::Session;
use crate::types::OperatorCode;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS operator (
      id INTEGER PRIMARY KEY,
      code INTEGER NOT NULL UNIQUE,
      name TEXT NOT NULL,
      login TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS terminal_transaction (
      id INTEGER PRIMARY KEY,
      sequence_key TEXT NOT NULL UNIQUE,
      occurred_at TEXT NOT NULL,
      terminal_id TEXT NOT NULL,
      transaction_type TEXT NOT NULL,
      outcome_state TEXT NOT NULL,
      operator_code INTEGER NOT NULL REFERENCES operator(code)
    );
    CREATE INDEX IF NOT EXISTS idx_terminal_transaction_occurred_at ON terminal_transaction(occurred_at);
    CREATE INDEX IF NOT EXISTS idx_terminal_transaction_operator_code ON terminal_transaction(operator_code);
";

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Location<'a> {
    Memory,
    File(&'a str)
}

/// Owns the single database connection used by one invocation.
///
/// Writes go through [`Store::session`]; reports and lookups read the connection directly.
pub struct Store {
    connection: Connection
}

impl Store {
    /// Opens (creating if needed) the database named by `database_url` and ensures the schema exists.
    pub fn open(database_url: &str) -> Result<Self, RankingError> {
        let connection = match parse_database_url(database_url)? {
            Location::Memory => Connection::open_in_memory()?,
            Location::File(path) => Connection::open(path)?
        };

        debug!("Opened database [{database_url}]");

        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, RankingError> {
        connection.execute_batch("PRAGMA foreign_keys = ON;")?;
        connection.execute_batch(SCHEMA)?;

        Ok(Self { connection })
    }

    /// Starts a storage transaction. Dropping the session without committing rolls it back.
    pub fn session(&mut self) -> Result<Session<'_>, RankingError> {
        Ok(Session::new(self.connection.transaction()?))
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Every registered operator, ordered by code.
    pub fn list_operators(&self) -> Result<Vec<Operator>, RankingError> {
        let mut statement = self.connection.prepare("SELECT id, code, name, login FROM operator ORDER BY code")?;

        let operators = statement.query_map([], operator_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(operators)
    }

    pub fn find_operator(&self, code: OperatorCode) -> Result<Option<Operator>, RankingError> {
        let operator = self.connection
            .query_row(
                "SELECT id, code, name, login FROM operator WHERE code = ?1",
                params![code],
                operator_from_row
            )
            .optional()?;

        Ok(operator)
    }

    pub fn operator_count(&self) -> Result<i64, RankingError> {
        Ok(self.connection.query_row("SELECT COUNT(*) FROM operator", [], |row| row.get(0))?)
    }

    pub fn transaction_count(&self) -> Result<i64, RankingError> {
        Ok(self.connection.query_row("SELECT COUNT(*) FROM terminal_transaction", [], |row| row.get(0))?)
    }
}

fn operator_from_row(row: &Row<'_>) -> rusqlite::Result<Operator> {
    Ok(Operator {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        login: row.get(3)?
    })
}

/// Accepts a bare path, `:memory:`, and the `sqlite:` url forms used by SQLAlchemy and sqlx.
pub(super) fn parse_database_url(database_url: &str) -> Result<Location<'_>, RankingError> {
    let url = database_url.trim();

    let path = if let Some(path) = url.strip_prefix("sqlite:///") {
        path
    } else if let Some(path) = url.strip_prefix("sqlite://") {
        path
    } else if let Some(path) = url.strip_prefix("sqlite:") {
        path
    } else if url.contains("://") {
        return Err(RankingError::UnsupportedDatabase(database_url.to_string()));
    } else {
        url
    };

    match path {
        "" | ":memory:" => Ok(Location::Memory),
        path => Ok(Location::File(path))
    }
}
