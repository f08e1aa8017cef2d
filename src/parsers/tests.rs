use super::{parse_operators, parse_transactions, TransactionConfig};

use anyhow::Result;
use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::models::{OperatorRow, RankingError};
use crate::types::to_storage;

const TRANSACTION_HEADER: &str = "Date;Time;Terminal;TransactionType;Operator;OutcomeState;SequenceNumber;Amount";

fn transaction_report(lines: &[&str]) -> String {
    let mut report = String::from(TRANSACTION_HEADER);

    for line in lines {
        report.push('\n');
        report.push_str(line);
    }

    report
}

#[test]
fn test_roster_keeps_only_code_name_and_login() -> Result<()> {
    let roster = "Code;Name;Login;Shift;Supervisor\n1;Maria;maria1;Morning;Ana\n2;Jose;jose2;Night;Ana\n";

    let rows = parse_operators(roster.as_bytes(), UTF_8)?;

    assert_eq!(rows, vec![
        OperatorRow { code: 1, name: "Maria".to_string(), login: "maria1".to_string() },
        OperatorRow { code: 2, name: "Jose".to_string(), login: "jose2".to_string() }
    ]);

    Ok(())
}

#[test]
fn test_roster_decodes_legacy_single_byte_exports() -> Result<()> {
    let roster = b"C\xf3digo;Nome;Logname\n7;Jo\xe3o Concei\xe7\xe3o;joao7\n";

    let rows = parse_operators(roster, WINDOWS_1252)?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code, 7);
    assert_eq!(rows[0].name, "João Conceição");
    assert_eq!(rows[0].login, "joao7");

    Ok(())
}

#[test]
fn test_roster_keeps_repeated_codes_for_the_store_to_skip() -> Result<()> {
    let roster = "Code;Name;Login\n1;Maria;maria1\n1;Maria;maria1\n";

    assert_eq!(parse_operators(roster.as_bytes(), UTF_8)?.len(), 2);

    Ok(())
}

#[test]
fn test_roster_without_login_column_is_rejected() {
    let roster = "Code;Name\n1;Maria\n";

    let result = parse_operators(roster.as_bytes(), UTF_8);

    assert!(matches!(result, Err(RankingError::MissingColumn { column: "Login" })));
}

#[test]
fn test_roster_with_non_numeric_code_is_rejected() {
    let roster = "Code;Name;Login\n1;Jose;jose1\nabc;Maria;maria1\n";

    let result = parse_operators(roster.as_bytes(), UTF_8);

    assert!(matches!(
        result,
        Err(RankingError::InvalidOperatorCode { line: 3, ref value }) if value == "abc"
    ));
}

#[test]
fn test_roster_accepts_spreadsheet_exported_codes() -> Result<()> {
    let roster = "Code;Name;Login\n7.0;Maria;maria7\n8;Jose;jose8\n";

    let codes: Vec<_> = parse_operators(roster.as_bytes(), UTF_8)?
        .into_iter()
        .map(|row| row.code)
        .collect();

    assert_eq!(codes, vec![7, 8]);

    Ok(())
}

#[test]
fn test_roster_with_fractional_code_is_rejected() {
    let roster = "Code;Name;Login\n7.5;Maria;maria7\n";

    assert!(matches!(
        parse_operators(roster.as_bytes(), UTF_8),
        Err(RankingError::InvalidOperatorCode { line: 2, .. })
    ));
}

#[test]
fn test_transactions_combine_date_and_time_into_one_timestamp() -> Result<()> {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;3;completed at terminal;000101;10,00"
    ]);

    let rows = parse_transactions(report.as_bytes(), &TransactionConfig::default())?;

    assert_eq!(rows.len(), 1);
    assert_eq!(to_storage(&rows[0].timestamp), "2023-10-21 08:15:00");
    assert_eq!(rows[0].terminal_id, "P001");
    assert_eq!(rows[0].operator_code, 3);
    assert_eq!(rows[0].sequence_number, "000101");
    assert_eq!(rows[0].sequence_key(), "2023-10-21 08:15:00-P001");

    Ok(())
}

#[test]
fn test_failed_and_cash_transactions_are_dropped() -> Result<()> {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;3;completed at terminal;000101;10,00",
        "21/10/2023;08:16:00;P001;instant-payment purchase;3;failed;000102;10,00",
        "21/10/2023;08:17:00;P002;cash purchase;4;completed at terminal;000103;5,00",
        "21/10/2023;08:18:00;P002;instant-payment purchase;4;completed at terminal;000104;7,50"
    ]);

    let rows = parse_transactions(report.as_bytes(), &TransactionConfig::default())?;
    let sequence_numbers: Vec<_> = rows.iter().map(|row| row.sequence_number.as_str()).collect();

    assert_eq!(sequence_numbers, vec!["000101", "000104"]);

    Ok(())
}

#[test]
fn test_native_headers_and_filter_values_are_configurable() -> Result<()> {
    let report = "Data;Hora;Pdv;Transacao;Operador;Estado Transacao;Nsu\n\
                  21/10/2023;09:00:00;P003;Compra Pix;5;Efetuada PDV;1\n\
                  21/10/2023;09:01:00;P003;Compra Pix;5;Negada;2\n\
                  21/10/2023;09:02:00;P003;Dinheiro;5;Efetuada PDV;3\n";
    let config = TransactionConfig {
        accepted_type: "Compra Pix".to_string(),
        accepted_outcome: "Efetuada PDV".to_string(),
        ..TransactionConfig::default()
    };

    let rows = parse_transactions(report.as_bytes(), &config)?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].operator_code, 5);
    assert_eq!(rows[0].transaction_type, "Compra Pix");

    Ok(())
}

#[test]
fn test_malformed_timestamp_fails_even_on_a_dropped_row() {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;3;completed at terminal;000101;1",
        "2023-10-21;08:16:00;P001;cash purchase;3;failed;000102;1"
    ]);

    let result = parse_transactions(report.as_bytes(), &TransactionConfig::default());

    assert!(matches!(result, Err(RankingError::InvalidTimestamp { line: 3, .. })));
}

#[test]
fn test_missing_sequence_number_column_is_rejected() {
    let report = "Date;Time;Terminal;TransactionType;Operator;OutcomeState\n\
                  21/10/2023;08:15:00;P001;instant-payment purchase;3;completed at terminal\n";

    let result = parse_transactions(report.as_bytes(), &TransactionConfig::default());

    assert!(matches!(result, Err(RankingError::MissingColumn { column: "SequenceNumber" })));
}

#[test]
fn test_operator_reference_is_coerced_to_an_integer() -> Result<()> {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;7.0;completed at terminal;1;1",
        "21/10/2023;08:16:00;P001;instant-payment purchase; 8 ;completed at terminal;2;1"
    ]);

    let rows = parse_transactions(report.as_bytes(), &TransactionConfig::default())?;
    let codes: Vec<_> = rows.iter().map(|row| row.operator_code).collect();

    assert_eq!(codes, vec![7, 8]);

    Ok(())
}

#[test]
fn test_non_integer_operator_on_a_kept_row_is_rejected() {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;7.5;completed at terminal;1;1"
    ]);

    let result = parse_transactions(report.as_bytes(), &TransactionConfig::default());

    assert!(matches!(result, Err(RankingError::InvalidOperatorCode { line: 2, .. })));
}

#[test]
fn test_operator_reference_beyond_the_code_range_is_rejected() {
    for operator in ["1e19", "9223372036854775808", "-1e19"] {
        let line = format!("21/10/2023;08:15:00;P001;instant-payment purchase;{operator};completed at terminal;1;1");
        let report = transaction_report(&[line.as_str()]);

        let result = parse_transactions(report.as_bytes(), &TransactionConfig::default());

        assert!(
            matches!(result, Err(RankingError::InvalidOperatorCode { line: 2, ref value }) if value == operator),
            "operator [{operator}] was accepted as {result:?}"
        );
    }
}

#[test]
fn test_largest_operator_code_is_kept_exactly() -> Result<()> {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;instant-payment purchase;9223372036854775807;completed at terminal;1;1"
    ]);

    let rows = parse_transactions(report.as_bytes(), &TransactionConfig::default())?;

    assert_eq!(rows[0].operator_code, i64::MAX);

    Ok(())
}

#[test]
fn test_roster_code_beyond_the_code_range_is_rejected() {
    let roster = "Code;Name;Login\n1e19;Maria;maria1\n";

    assert!(matches!(
        parse_operators(roster.as_bytes(), UTF_8),
        Err(RankingError::InvalidOperatorCode { line: 2, .. })
    ));
}

#[test]
fn test_non_integer_operator_on_a_dropped_row_is_ignored() -> Result<()> {
    let report = transaction_report(&[
        "21/10/2023;08:15:00;P001;cash purchase;n/a;completed at terminal;1;1"
    ]);

    assert!(parse_transactions(report.as_bytes(), &TransactionConfig::default())?.is_empty());

    Ok(())
}

#[test]
fn test_header_only_report_parses_to_nothing() -> Result<()> {
    let report = transaction_report(&[]);

    assert!(parse_transactions(report.as_bytes(), &TransactionConfig::default())?.is_empty());

    Ok(())
}
