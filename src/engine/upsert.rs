use tracing::info;

use crate::engine::ImportSummary;
use crate::models::{OperatorRow, RankingError, TransactionRow};
use crate::storage::{Insertion, Storage, Store};

/// Upserts a parsed roster and commits once for the whole batch.
///
/// Operators whose code is already stored are skipped (first write wins).
pub fn upsert_operators(rows: &[OperatorRow], store: &mut Store) -> Result<ImportSummary, RankingError> {
    let session = store.session()?;
    let summary = write_operators(rows, &session)?;
    session.commit()?;

    info!("Operator import committed: [{}] inserted, [{}] skipped", summary.inserted, summary.skipped);

    Ok(summary)
}

/// Upserts parsed transactions and commits once for the whole batch.
///
/// # Errors
/// Returns `RankingError::OperatorNotFound` on the first row whose operator is not
/// registered. Nothing from the batch is committed in that case.
pub fn upsert_transactions(rows: &[TransactionRow], store: &mut Store) -> Result<ImportSummary, RankingError> {
    let session = store.session()?;
    let summary = write_transactions(rows, &session)?;
    session.commit()?;

    info!("Transaction import committed: [{}] inserted, [{}] skipped", summary.inserted, summary.skipped);

    Ok(summary)
}

pub fn write_operators<S: Storage>(rows: &[OperatorRow], storage: &S) -> Result<ImportSummary, RankingError> {
    let mut summary = ImportSummary::default();

    for row in rows {
        if storage.operator_exists(row.code)? {
            info!("Operator [{}]:[{}] already exists, skipping", row.code, row.name);
            summary.skipped += 1;
            continue;
        }

        match storage.insert_operator(row)? {
            Insertion::Inserted => {
                info!("Recording operator [{}]:[{}]", row.code, row.name);
                summary.inserted += 1;
            }
            Insertion::AlreadyExists => summary.skipped += 1
        }
    }

    Ok(summary)
}

pub fn write_transactions<S: Storage>(rows: &[TransactionRow], storage: &S) -> Result<ImportSummary, RankingError> {
    let mut summary = ImportSummary::default();

    for row in rows {
        let sequence_key = row.sequence_key();

        if storage.transaction_exists(&sequence_key)? {
            info!("Transaction [{sequence_key}] already exists, skipping");
            summary.skipped += 1;
            continue;
        }

        if !storage.operator_exists(row.operator_code)? {
            return Err(RankingError::operator_not_found(row.operator_code));
        }

        match storage.insert_transaction(&sequence_key, row)? {
            Insertion::Inserted => {
                info!("Recording transaction [{sequence_key}]:[{}] for operator [{}]", row.sequence_number, row.operator_code);
                summary.inserted += 1;
            }
            Insertion::AlreadyExists => summary.skipped += 1
        }
    }

    Ok(summary)
}
