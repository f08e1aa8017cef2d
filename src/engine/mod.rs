mod import;
mod upsert;

pub use import::{import_operators, import_transactions};
pub use upsert::{upsert_operators, upsert_transactions};

/// What an import did with each parsed row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    /// Rows whose natural key was already stored.
    pub skipped: usize
}
