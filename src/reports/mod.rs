mod daily;
mod ranking;

use chrono::{NaiveDate, NaiveTime};

use crate::types::OperatorCode;

pub use daily::daily_counts_for_month;
pub use ranking::rank_by_date_range;

/// One operator's position in the transaction ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub operator_code: OperatorCode,
    pub operator_name: String,
    pub transaction_count: i64
}

/// Transactions recorded on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub transaction_count: i64,
    pub first_transaction: NaiveTime,
    pub last_transaction: NaiveTime
}
