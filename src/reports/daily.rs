use rusqlite::params;
use tracing::debug;

use crate::models::RankingError;
use crate::reports::DailyCount;
use crate::storage::{parsed_column, Store};
use crate::types::{parse_storage_date, parse_storage_time};

const DAILY_QUERY: &str = "
    SELECT date(occurred_at) AS day, COUNT(*), MIN(time(occurred_at)), MAX(time(occurred_at))
    FROM terminal_transaction
    WHERE strftime('%Y-%m', occurred_at) = ?1
    GROUP BY day
    ORDER BY day
";

/// Per-day transaction counts for one month, with the first and last transaction time of each day.
///
/// # Errors
/// Returns `RankingError::EmptyResult` when the month holds no transactions.
pub fn daily_counts_for_month(store: &Store, month: u32, year: i32) -> Result<Vec<DailyCount>, RankingError> {
    let period = format!("{year:04}-{month:02}");
    let mut statement = store.connection().prepare(DAILY_QUERY)?;

    let rows = statement
        .query_map(params![period], |row| {
            Ok(DailyCount {
                day: parsed_column(row, 0, parse_storage_date)?,
                transaction_count: row.get(1)?,
                first_transaction: parsed_column(row, 2, parse_storage_time)?,
                last_transaction: parsed_column(row, 3, parse_storage_time)?
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(RankingError::empty_result("daily counts"));
    }

    debug!("Month [{period}] has transactions on [{}] days", rows.len());

    Ok(rows)
}
