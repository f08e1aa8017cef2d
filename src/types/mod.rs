mod encoding;
mod timestamp;

pub use encoding::{decode, encoding_for_label};
pub use timestamp::{
    end_of_day, format_day, format_time, parse_day, parse_report_timestamp, parse_storage_date,
    parse_storage_time, start_of_day, to_storage,
};

pub type OperatorCode = i64;
pub type RowId = i64;

/// Label of the encoding used by roster spreadsheets exported from the terminal back office.
pub const DEFAULT_ROSTER_ENCODING: &str = "windows-1252";
pub const DEFAULT_TRANSACTION_ENCODING: &str = "utf-8";
