//! Diagnostics collected while cleaning a dataset.

use std::path::PathBuf;

use serde::Serialize;

use crate::schema::TargetType;

/// How a missing value was repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Median,
    Mode,
}

/// One column's null repair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Imputation {
    pub column: String,
    pub strategy: Strategy,
    /// Fill value as written to the output.
    pub value: String,
    pub filled: usize,
}

/// A column that could not be converted to its schema type. It keeps its
/// original values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCoercionWarning {
    pub column: String,
    pub target: TargetType,
    pub reason: String,
}

/// The clean dataset could not be written. The in-memory result is still
/// valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistenceError {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub original_rows: usize,
    pub original_columns: usize,
    pub duplicates_removed: usize,
    /// Null counts per column before any repair, columns with none omitted.
    pub nulls_before: Vec<(String, usize)>,
    pub critical_rows_dropped: usize,
    pub imputations: Vec<Imputation>,
    /// Columns with nulls but no present value to impute from.
    pub unrepaired: Vec<String>,
    pub coerced: Vec<String>,
    pub coercion_warnings: Vec<TypeCoercionWarning>,
    pub final_rows: usize,
    pub final_columns: usize,
    pub persistence_error: Option<PersistenceError>,
}

impl CleaningReport {
    /// `true` when every coercion succeeded and the output was written.
    pub fn is_clean(&self) -> bool {
        self.coercion_warnings.is_empty() && self.persistence_error.is_none()
    }
}
