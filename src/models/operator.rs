use serde::Deserialize;

use crate::types::{OperatorCode, RowId};

/// A single, unconverted line of the operator roster.
///
/// Only `Code`, `Name` and `Login` are read; any other roster column is ignored. The
/// back-office header names are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorRecord {
    #[serde(rename = "Code", alias = "Código")]
    pub code: String,
    #[serde(rename = "Name", alias = "Nome")]
    pub name: String,
    #[serde(rename = "Login", alias = "Logname")]
    pub login: String
}

/// A roster line with its operator code converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRow {
    /// Numeric operator code, the natural key across re-imports.
    pub code: OperatorCode,
    pub name: String,
    pub login: String
}

/// An operator as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// Storage-assigned surrogate key.
    pub id: RowId,
    pub code: OperatorCode,
    pub name: String,
    pub login: String
}
