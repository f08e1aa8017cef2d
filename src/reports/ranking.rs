use chrono::NaiveDateTime;
use rusqlite::params;
use tracing::debug;

use crate::models::RankingError;
use crate::reports::RankingRow;
use crate::storage::Store;
use crate::types::to_storage;

const RANKING_QUERY: &str = "
    SELECT t.operator_code, o.name, COUNT(*) AS transactions
    FROM terminal_transaction AS t
    JOIN operator AS o ON o.code = t.operator_code
    WHERE t.occurred_at BETWEEN ?1 AND ?2
    GROUP BY t.operator_code, o.name
    ORDER BY transactions DESC, t.operator_code ASC
";

/// Counts transactions per operator between `start` and `end` (both inclusive), busiest first.
///
/// # Errors
/// Returns `RankingError::EmptyResult` when the period holds no transactions.
pub fn rank_by_date_range(store: &Store, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<RankingRow>, RankingError> {
    let mut statement = store.connection().prepare(RANKING_QUERY)?;

    let rows = statement
        .query_map(params![to_storage(&start), to_storage(&end)], |row| {
            Ok(RankingRow {
                operator_code: row.get(0)?,
                operator_name: row.get(1)?,
                transaction_count: row.get(2)?
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(RankingError::empty_result("ranking"));
    }

    debug!("Ranking between [{start}] and [{end}] has [{}] operators", rows.len());

    Ok(rows)
}
