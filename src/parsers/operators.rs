use encoding_rs::Encoding;
use tracing::debug;

use crate::models::{OperatorRecord, OperatorRow, RankingError};
use crate::parsers::{csv_reader, line_of, parse_operator_code, require_columns, Column};
use crate::types::decode;

const ROSTER_COLUMNS: &[Column] = &[
    Column { name: "Code", alias: "Código" },
    Column { name: "Name", alias: "Nome" },
    Column { name: "Login", alias: "Logname" }
];

/// Parses an operator roster, one row per CSV line.
///
/// No row is filtered out; duplicates are left for the persistence layer to skip. Codes go
/// through the same coercion as the operator column of a transaction report.
pub fn parse_operators(input: &[u8], encoding: &'static Encoding) -> Result<Vec<OperatorRow>, RankingError> {
    let text = decode(input, encoding)?;
    let mut reader = csv_reader(&text);

    let headers = reader.headers()?.clone();
    require_columns(&headers, ROSTER_COLUMNS)?;

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = line_of(&record);
        let raw: OperatorRecord = record.deserialize(Some(&headers))?;

        let code = parse_operator_code(&raw.code)
            .ok_or_else(|| RankingError::invalid_operator_code(line, &raw.code))?;

        rows.push(OperatorRow {
            code,
            name: raw.name,
            login: raw.login
        });
    }

    debug!("Parsed [{}] operator rows from a [{}] roster", rows.len(), encoding.name());

    Ok(rows)
}
