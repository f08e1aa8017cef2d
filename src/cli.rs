use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::parsers::{DEFAULT_ACCEPTED_OUTCOME, DEFAULT_ACCEPTED_TYPE};
use crate::types::{parse_day, OperatorCode, DEFAULT_ROSTER_ENCODING, DEFAULT_TRANSACTION_ENCODING};

/// Imports terminal reports and ranks operators by completed instant-payment purchases.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Database to use: a SQLite file path, `sqlite://<path>` or `:memory:`
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Log level written to stderr: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import the operator roster (columns Code;Name;Login)
    ImportOperators {
        file: PathBuf,

        /// Character encoding of the roster file
        #[arg(long, default_value = DEFAULT_ROSTER_ENCODING)]
        encoding: String
    },

    /// Import a terminal transaction report
    ImportTransactions {
        file: PathBuf,

        /// Character encoding of the report file
        #[arg(long, default_value = DEFAULT_TRANSACTION_ENCODING)]
        encoding: String,

        /// Only rows with this TransactionType are imported
        #[arg(long, default_value = DEFAULT_ACCEPTED_TYPE)]
        transaction_type: String,

        /// Only rows with this OutcomeState are imported
        #[arg(long, default_value = DEFAULT_ACCEPTED_OUTCOME)]
        outcome_state: String
    },

    /// Rank operators by transaction count between two days (DD/MM/YYYY, default today)
    Ranking {
        #[arg(long, value_parser = parse_day_argument)]
        from: Option<NaiveDate>,

        #[arg(long, value_parser = parse_day_argument)]
        to: Option<NaiveDate>
    },

    /// Daily transaction counts for a month (default current month)
    Monthly {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        #[arg(long)]
        year: Option<i32>
    },

    /// List registered operators
    Operators {
        /// Show a single operator
        #[arg(long)]
        code: Option<OperatorCode>
    }
}

fn parse_day_argument(value: &str) -> Result<NaiveDate, String> {
    parse_day(value).map_err(|error| format!("expected DD/MM/YYYY: {error}"))
}
