//! Raw survey data to clean dataset.
//!
//! Duplicates are removed, rows missing a critical observation are dropped,
//! remaining gaps are imputed (median for numeric columns, mode for text),
//! schema types are enforced and `screen_time` is derived.

pub mod coerce;
pub mod impute;
pub mod pipeline;
pub mod report;

pub use pipeline::{CleanDataset, clean, process};
pub use report::{CleaningReport, PersistenceError, TypeCoercionWarning};
