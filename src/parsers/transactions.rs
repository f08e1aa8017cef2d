use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::models::{RankingError, TransactionRecord, TransactionRow};
use crate::parsers::{csv_reader, line_of, parse_operator_code, require_columns, Column};
use crate::types::{decode, parse_report_timestamp};

pub const DEFAULT_ACCEPTED_TYPE: &str = "instant-payment purchase";
pub const DEFAULT_ACCEPTED_OUTCOME: &str = "completed at terminal";

const TRANSACTION_COLUMNS: &[Column] = &[
    Column { name: "Date", alias: "Data" },
    Column { name: "Time", alias: "Hora" },
    Column { name: "Terminal", alias: "Pdv" },
    Column { name: "TransactionType", alias: "Transacao" },
    Column { name: "Operator", alias: "Operador" },
    Column { name: "OutcomeState", alias: "Estado Transacao" },
    Column { name: "SequenceNumber", alias: "Nsu" }
];

/// Controls how a terminal transaction report is decoded and which rows are kept.
#[derive(Debug, Clone)]
pub struct TransactionConfig {
    pub encoding: &'static Encoding,
    /// Only rows with exactly this `TransactionType` are kept.
    pub accepted_type: String,
    /// Only rows with exactly this `OutcomeState` are kept.
    pub accepted_outcome: String
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            accepted_type: DEFAULT_ACCEPTED_TYPE.to_string(),
            accepted_outcome: DEFAULT_ACCEPTED_OUTCOME.to_string()
        }
    }
}

impl TransactionConfig {
    fn accepts(&self, record: &TransactionRecord) -> bool {
        record.outcome_state == self.accepted_outcome && record.transaction_type == self.accepted_type
    }
}

/// Parses a terminal transaction report into completed instant-payment purchases.
///
/// The date/time pair is converted for every row before filtering, so a malformed timestamp
/// fails the whole report even on a row that would have been dropped. Rows of other payment
/// rails or with any other outcome are dropped without error.
pub fn parse_transactions(input: &[u8], config: &TransactionConfig) -> Result<Vec<TransactionRow>, RankingError> {
    let text = decode(input, config.encoding)?;
    let mut reader = csv_reader(&text);

    let headers = reader.headers()?.clone();
    require_columns(&headers, TRANSACTION_COLUMNS)?;

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = line_of(&record);
        let raw: TransactionRecord = record.deserialize(Some(&headers))?;

        let timestamp = parse_report_timestamp(&raw.date, &raw.time)
            .map_err(|_| RankingError::invalid_timestamp(line, &raw.date, &raw.time))?;

        if !config.accepts(&raw) {
            debug!("Dropping line [{line}]: [{}]:[{}]", raw.transaction_type, raw.outcome_state);
            dropped += 1;
            continue;
        }

        let operator_code = parse_operator_code(&raw.operator)
            .ok_or_else(|| RankingError::invalid_operator_code(line, &raw.operator))?;

        rows.push(TransactionRow {
            timestamp,
            terminal_id: raw.terminal_id,
            operator_code,
            transaction_type: raw.transaction_type,
            outcome_state: raw.outcome_state,
            sequence_number: raw.sequence_number
        });
    }

    debug!("Parsed [{}] transactions, dropped [{dropped}]", rows.len());

    Ok(rows)
}
