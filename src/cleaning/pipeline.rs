use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, error, info, warn};

use crate::cleaning::coerce::coerce_column;
use crate::cleaning::impute::{fill_median, fill_mode};
use crate::cleaning::report::{
    CleaningReport, Imputation, PersistenceError, Strategy, TypeCoercionWarning,
};
use crate::dataset::read_records;
use crate::error::PipelineError;
use crate::output::{write_csv, write_frame};
use crate::parser::read_frame;
use crate::schema::{
    COERCIONS, CRITICAL_COLUMNS, NETFLIX_HOURS, SCREEN_TIME, SOCIAL_MEDIA_HOURS, StudentRecord,
};

/// The cleaned frame together with what was done to produce it.
#[derive(Debug, Clone)]
pub struct CleanDataset {
    pub frame: DataFrame,
    pub report: CleaningReport,
}

impl CleanDataset {
    /// Typed view of the clean rows.
    ///
    /// # Errors
    ///
    /// Fails if a coercion was skipped and a core column still holds values
    /// that do not fit [`StudentRecord`].
    pub fn records(&self) -> Result<Vec<StudentRecord>, PipelineError> {
        let mut buf = Vec::new();
        write_csv(&mut buf, &self.frame)?;
        read_records(buf.as_slice())
    }
}

/// Reads the raw dataset at `input_path`, cleans it and writes the result to
/// `output_path`, replacing any existing file.
///
/// A failed write is logged and recorded in the report; the cleaned data is
/// still returned.
///
/// # Errors
///
/// [`PipelineError::MissingInput`] if `input_path` does not exist, and any
/// error from [`clean`].
#[tracing::instrument(fields(input = %input_path.display(), output = %output_path.display()))]
pub fn process(input_path: &Path, output_path: &Path) -> Result<CleanDataset, PipelineError> {
    if !input_path.exists() {
        return Err(PipelineError::MissingInput {
            path: input_path.to_path_buf(),
        });
    }

    let frame = read_frame(File::open(input_path)?)?;
    let mut dataset = clean(frame)?;

    info!(path = %output_path.display(), "Saving processed dataset");
    match write_frame(output_path, &dataset.frame) {
        Ok(()) => info!(rows = dataset.frame.height(), "Processed dataset saved"),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to save processed dataset");
            dataset.report.persistence_error = Some(PersistenceError {
                path: output_path.to_path_buf(),
                reason: format!("{e:#}"),
            });
        }
    }

    Ok(dataset)
}

/// Runs the in-memory cleaning steps: dedupe, drop rows missing a critical
/// value, impute the rest, coerce schema types, derive `screen_time`.
///
/// # Errors
///
/// [`PipelineError::MissingColumn`] if a critical column is absent, and
/// [`PipelineError::Derivation`] if `screen_time` cannot be computed.
pub fn clean(frame: DataFrame) -> Result<CleanDataset, PipelineError> {
    let mut report = CleaningReport {
        original_rows: frame.height(),
        original_columns: frame.width(),
        ..Default::default()
    };
    info!(rows = frame.height(), columns = frame.width(), "Original dataset shape");

    let frame = frame.unique_stable(None, UniqueKeepStrategy::First, None)?;
    report.duplicates_removed = report.original_rows - frame.height();
    info!(
        rows = frame.height(),
        removed = report.duplicates_removed,
        "Dataset shape after removing duplicates"
    );

    report.nulls_before = frame
        .get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.null_count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    for (column, nulls) in &report.nulls_before {
        info!(column = %column, nulls, "Null values before handling");
    }

    let before = frame.height();
    let mut frame = drop_critical_nulls(&frame)?;
    report.critical_rows_dropped = before - frame.height();
    impute(&mut frame, &mut report)?;
    info!(rows = frame.height(), dropped = report.critical_rows_dropped, "After handling nulls");

    coerce(&mut frame, &mut report)?;
    derive_screen_time(&mut frame)?;

    report.final_rows = frame.height();
    report.final_columns = frame.width();
    Ok(CleanDataset { frame, report })
}

fn drop_critical_nulls(frame: &DataFrame) -> Result<DataFrame, PipelineError> {
    let mut keep = BooleanChunked::full("keep".into(), true, frame.height());
    for name in CRITICAL_COLUMNS {
        let column = frame.column(name).map_err(|_| PipelineError::MissingColumn {
            column: name.to_string(),
        })?;
        keep = &keep & &column.is_not_null();
    }
    Ok(frame.filter(&keep)?)
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64
    )
}

fn impute(frame: &mut DataFrame, report: &mut CleaningReport) -> PolarsResult<()> {
    // Numeric columns first, then categorical, each against the post-drop rows.
    for numeric_pass in [true, false] {
        let pending: Vec<Series> = frame
            .get_columns()
            .iter()
            .filter(|c| is_numeric(c.dtype()) == numeric_pass && c.null_count() > 0)
            .map(|c| c.as_materialized_series().clone())
            .collect();

        for series in pending {
            let name = series.name().to_string();
            let repaired = if numeric_pass {
                fill_median(&series)?
                    .map(|(filled, median)| (filled, Strategy::Median, format!("{median:?}")))
            } else {
                fill_mode(&series)?.map(|(filled, mode)| (filled, Strategy::Mode, mode))
            };

            let Some((filled, strategy, value)) = repaired else {
                warn!(column = %name, "No present values to impute from; leaving nulls");
                report.unrepaired.push(name);
                continue;
            };

            let filled_count = series.null_count();
            debug!(column = %name, ?strategy, value = %value, filled = filled_count, "Imputed nulls");
            frame.with_column(filled)?;
            report.imputations.push(Imputation {
                column: name,
                strategy,
                value,
                filled: filled_count,
            });
        }
    }
    Ok(())
}

fn coerce(frame: &mut DataFrame, report: &mut CleaningReport) -> PolarsResult<()> {
    for (name, target) in COERCIONS {
        let result = match frame.column(name) {
            Ok(column) => coerce_column(column.as_materialized_series(), target),
            Err(_) => Err("column not present".to_string()),
        };

        match result {
            Ok(series) => {
                frame.with_column(series)?;
                report.coerced.push(name.to_string());
            }
            Err(reason) => {
                warn!(column = name, ?target, reason = %reason, "Data type conversion failed");
                report.coercion_warnings.push(TypeCoercionWarning {
                    column: name.to_string(),
                    target,
                    reason,
                });
            }
        }
    }
    Ok(())
}

fn numeric_source(frame: &DataFrame, name: &str) -> Result<Series, PipelineError> {
    let column = frame.column(name).map_err(|_| PipelineError::MissingColumn {
        column: name.to_string(),
    })?;
    if !is_numeric(column.dtype()) {
        return Err(PipelineError::Derivation {
            column: SCREEN_TIME.to_string(),
            reason: format!("'{name}' is not numeric"),
        });
    }
    Ok(column.as_materialized_series().cast(&DataType::Float64)?)
}

fn derive_screen_time(frame: &mut DataFrame) -> Result<(), PipelineError> {
    let social = numeric_source(frame, SOCIAL_MEDIA_HOURS)?;
    let netflix = numeric_source(frame, NETFLIX_HOURS)?;
    let screen_time = (social.f64()? + netflix.f64()?).with_name(SCREEN_TIME.into());

    frame.with_column(screen_time.into_series())?;
    Ok(())
}
