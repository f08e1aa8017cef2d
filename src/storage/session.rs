use std::os::raw::c_int;

use rusqlite::ffi::{SQLITE_CONSTRAINT_FOREIGNKEY, SQLITE_CONSTRAINT_UNIQUE};
use rusqlite::{params, ErrorCode, OptionalExtension, Transaction};
use tracing::warn;

use crate::models::{OperatorRow, RankingError, TransactionRow};
use crate::storage::{Insertion, Storage};
use crate::types::{to_storage, OperatorCode};

/// One all-or-nothing unit of writes against the store.
///
/// Nothing written through a session is visible to other connections until [`Session::commit`].
pub struct Session<'a> {
    transaction: Transaction<'a>
}

impl<'a> Session<'a> {
    pub(crate) fn new(transaction: Transaction<'a>) -> Self {
        Self { transaction }
    }

    pub fn commit(self) -> Result<(), RankingError> {
        self.transaction.commit()?;
        Ok(())
    }
}

impl Storage for Session<'_> {
    fn operator_exists(&self, code: OperatorCode) -> Result<bool, RankingError> {
        let found = self.transaction
            .query_row("SELECT 1 FROM operator WHERE code = ?1", params![code], |_| Ok(()))
            .optional()?;

        Ok(found.is_some())
    }

    fn insert_operator(&self, operator: &OperatorRow) -> Result<Insertion, RankingError> {
        let result = self.transaction.execute(
            "INSERT INTO operator (code, name, login) VALUES (?1, ?2, ?3)",
            params![operator.code, operator.name, operator.login]
        );

        insertion(result)
    }

    fn transaction_exists(&self, sequence_key: &str) -> Result<bool, RankingError> {
        let found = self.transaction
            .query_row("SELECT 1 FROM terminal_transaction WHERE sequence_key = ?1", params![sequence_key], |_| Ok(()))
            .optional()?;

        Ok(found.is_some())
    }

    fn insert_transaction(&self, sequence_key: &str, transaction: &TransactionRow) -> Result<Insertion, RankingError> {
        let result = self.transaction.execute(
            "INSERT INTO terminal_transaction (
               sequence_key, occurred_at, terminal_id, transaction_type, outcome_state, operator_code
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                sequence_key,
                to_storage(&transaction.timestamp),
                transaction.terminal_id,
                transaction.transaction_type,
                transaction.outcome_state,
                transaction.operator_code
            ]
        );

        match result {
            Err(error) if violates(&error, SQLITE_CONSTRAINT_FOREIGNKEY) => {
                Err(RankingError::operator_not_found(transaction.operator_code))
            }
            other => insertion(other)
        }
    }
}

/// A unique-key violation means another writer got there first, which is the same as the row existing.
fn insertion(result: rusqlite::Result<usize>) -> Result<Insertion, RankingError> {
    match result {
        Ok(_) => Ok(Insertion::Inserted),
        Err(error) if violates(&error, SQLITE_CONSTRAINT_UNIQUE) => {
            warn!("Insert raced with another writer, treating row as existing: {error}");
            Ok(Insertion::AlreadyExists)
        }
        Err(error) => Err(error.into())
    }
}

fn violates(error: &rusqlite::Error, extended_code: c_int) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation && failure.extended_code == extended_code
    )
}
