//! Error types for the cleaning, training and prediction stages.
//!
//! Data-quality problems (a column that will not coerce, a file that could
//! not be written) are not errors here: they are recorded in the
//! [`CleaningReport`](crate::cleaning::CleaningReport) and logged.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the cleaning pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Required column '{column}' is absent from the dataset")]
    MissingColumn { column: String },

    #[error("Cannot derive '{column}': {reason}")]
    Derivation { column: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataframe error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the model trainer.
#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Cannot fit a model on an empty dataset")]
    EmptyDataset,

    #[error("Normal equations are singular; features are collinear or constant")]
    SingularSystem,
}

/// The prediction service could not load a usable model artifact.
#[derive(Error, Debug)]
#[error("Model unavailable at {}: {reason}", .path.display())]
pub struct ModelUnavailable {
    pub path: PathBuf,
    pub reason: String,
}
