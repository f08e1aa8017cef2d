mod operators;
#[cfg(test)]
mod tests;
mod transactions;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::RankingError;
use crate::types::OperatorCode;

pub use operators::parse_operators;
pub use transactions::{parse_transactions, TransactionConfig, DEFAULT_ACCEPTED_OUTCOME, DEFAULT_ACCEPTED_TYPE};

/// Both report dialects are semicolon separated.
const DELIMITER: u8 = b';';

/// A required report column: its canonical name and the name used by the terminal network.
struct Column {
    name: &'static str,
    alias: &'static str
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

fn require_columns(headers: &StringRecord, columns: &[Column]) -> Result<(), RankingError> {
    for column in columns {
        let present = headers.iter()
            .any(|header| header == column.name || header == column.alias);

        if !present {
            return Err(RankingError::MissingColumn { column: column.name });
        }
    }

    Ok(())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|position| position.line()).unwrap_or_default()
}

/// Accepts plain integers and integral decimals such as `7.0`, which spreadsheet exports produce.
///
/// Decimals outside the `OperatorCode` range are rejected rather than saturated.
fn parse_operator_code(value: &str) -> Option<OperatorCode> {
    let value = value.trim();

    if let Ok(code) = value.parse::<OperatorCode>() {
        return Some(code);
    }

    let decimal = value.parse::<f64>().ok()?;

    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive.
    let in_range = decimal >= OperatorCode::MIN as f64 && decimal < OperatorCode::MAX as f64;

    (decimal.is_finite() && decimal.fract() == 0.0 && in_range).then_some(decimal as OperatorCode)
}
