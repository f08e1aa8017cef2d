use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::types::{to_storage, OperatorCode};

/// Represents a single, unconverted row of the terminal transaction report.
///
/// Every field is kept as text: the date/time pair and the operator reference are only
/// converted once the parser decides the row is worth keeping.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Date", alias = "Data")]
    pub date: String,
    #[serde(rename = "Time", alias = "Hora")]
    pub time: String,
    #[serde(rename = "Terminal", alias = "Pdv")]
    pub terminal_id: String,
    #[serde(rename = "TransactionType", alias = "Transacao")]
    pub transaction_type: String,
    #[serde(rename = "Operator", alias = "Operador")]
    pub operator: String,
    #[serde(rename = "OutcomeState", alias = "Estado Transacao")]
    pub outcome_state: String,
    #[serde(rename = "SequenceNumber", alias = "Nsu")]
    pub sequence_number: String
}

/// A completed transaction that survived the report filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub timestamp: NaiveDateTime,
    pub terminal_id: String,
    pub operator_code: OperatorCode,
    pub transaction_type: String,
    pub outcome_state: String,
    /// Sequence number printed by the terminal network. Not part of the natural key.
    pub sequence_number: String
}

impl TransactionRow {
    /// Natural key of the transaction: `<YYYY-MM-DD HH:MM:SS>-<terminal>`.
    ///
    /// Two transactions at the same terminal within the same second share a key, and the
    /// second one is skipped as a duplicate.
    pub fn sequence_key(&self) -> String {
        format!("{}-{}", to_storage(&self.timestamp), self.terminal_id)
    }
}
