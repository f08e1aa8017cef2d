mod cli;
mod engine;
mod models;
mod parsers;
mod reports;
mod storage;
mod types;

use std::io::{stderr, stdout};
use std::time::Instant;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::{Arguments, Command};
use crate::engine::{import_operators, import_transactions, ImportSummary};
use crate::models::RankingError;
use crate::parsers::TransactionConfig;
use crate::reports::{daily_counts_for_month, rank_by_date_range};
use crate::storage::Store;
use crate::types::{encoding_for_label, end_of_day, format_day, format_time, start_of_day};

fn main() -> Result<()> {
    let arguments = Arguments::parse();

    setup_logging(parse_log_level(&arguments.log_level));

    let mut store = Store::open(&arguments.database_url)?;

    let timer = Instant::now();
    run(arguments.command, &mut store)?;
    let duration = timer.elapsed();

    info!("Finished in: {duration:?}");

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Tables go to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run(command: Command, store: &mut Store) -> Result<()> {
    match command {
        Command::ImportOperators { file, encoding } => {
            let summary = import_operators(store, &file, encoding_for_label(&encoding)?)?;
            write_summary(summary)
        }
        Command::ImportTransactions { file, encoding, transaction_type, outcome_state } => {
            let config = TransactionConfig {
                encoding: encoding_for_label(&encoding)?,
                accepted_type: transaction_type,
                accepted_outcome: outcome_state
            };

            let summary = import_transactions(store, &file, &config)?;
            write_summary(summary)
        }
        Command::Ranking { from, to } => {
            let today = Local::now().date_naive();
            let from = from.unwrap_or(today);
            let to = to.unwrap_or(today);

            match rank_by_date_range(store, start_of_day(from), end_of_day(to)) {
                Ok(rows) => write_table(
                    &["operator_code", "operator_name", "transactions"],
                    rows.into_iter().map(|row| vec![
                        row.operator_code.to_string(),
                        row.operator_name,
                        row.transaction_count.to_string()
                    ])
                ),
                Err(error) if error.is_empty_result() => {
                    eprintln!(
                        "No transactions recorded between {} and {}, check the dates or import the report for this period",
                        format_day(&from),
                        format_day(&to)
                    );
                    Ok(())
                }
                Err(error) => Err(error.into())
            }
        }
        Command::Monthly { month, year } => {
            let today = Local::now().date_naive();
            let month = month.unwrap_or(today.month());
            let year = year.unwrap_or(today.year());

            match daily_counts_for_month(store, month, year) {
                Ok(rows) => write_table(
                    &["day", "transactions", "first_transaction", "last_transaction"],
                    rows.into_iter().map(|row| vec![
                        format_day(&row.day),
                        row.transaction_count.to_string(),
                        format_time(&row.first_transaction),
                        format_time(&row.last_transaction)
                    ])
                ),
                Err(error) if error.is_empty_result() => {
                    eprintln!("No transactions recorded in {month:02}/{year:04}");
                    Ok(())
                }
                Err(error) => Err(error.into())
            }
        }
        Command::Operators { code } => {
            let operators = match code {
                Some(code) => vec![store.find_operator(code)?.ok_or_else(|| RankingError::operator_not_found(code))?],
                None => store.list_operators()?
            };

            write_table(
                &["id", "code", "name", "login"],
                operators.into_iter().map(|operator| vec![
                    operator.id.to_string(),
                    operator.code.to_string(),
                    operator.name,
                    operator.login
                ])
            )
        }
    }
}

fn write_summary(summary: ImportSummary) -> Result<()> {
    write_table(
        &["inserted", "skipped"],
        [vec![summary.inserted.to_string(), summary.skipped.to_string()]]
    )
}

fn write_table<I>(header: &[&str], records: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>
{
    let mut writer = csv::Writer::from_writer(stdout().lock());

    writer.write_record(header)?;

    for record in records {
        writer.write_record(&record)?;
    }

    writer.flush()?;

    Ok(())
}
