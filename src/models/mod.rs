mod errors;
mod operator;
mod transaction;

pub use errors::RankingError;
pub use operator::{Operator, OperatorRecord, OperatorRow};
pub use transaction::{TransactionRecord, TransactionRow};
