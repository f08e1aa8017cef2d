use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::info;

use crate::engine::{upsert_operators, upsert_transactions, ImportSummary};
use crate::models::RankingError;
use crate::parsers::{parse_operators, parse_transactions, TransactionConfig};
use crate::storage::Store;

/// Reads and fully parses a roster file, then upserts it.
///
/// A parse error aborts before the store is touched.
pub fn import_operators(store: &mut Store, path: &Path, encoding: &'static Encoding) -> Result<ImportSummary, RankingError> {
    let input = fs::read(path)?;
    let rows = parse_operators(&input, encoding)?;

    info!("Importing [{}] operators from [{}]", rows.len(), path.display());

    let summary = upsert_operators(&rows, store)?;

    info!("Store now holds [{}] operators", store.operator_count()?);

    Ok(summary)
}

/// Reads and fully parses a terminal transaction report, then upserts it.
pub fn import_transactions(store: &mut Store, path: &Path, config: &TransactionConfig) -> Result<ImportSummary, RankingError> {
    let input = fs::read(path)?;
    let rows = parse_transactions(&input, config)?;

    info!("Importing [{}] completed transactions from [{}]", rows.len(), path.display());

    let summary = upsert_transactions(&rows, store)?;

    info!("Store now holds [{}] transactions", store.transaction_count()?);

    Ok(summary)
}
