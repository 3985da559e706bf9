//! CSV reader for the raw survey export.

use std::io::{Cursor, Read};

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::debug;

use crate::error::PipelineError;

/// Field values read as missing, as written by common spreadsheet and dataframe exporters.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parses a headered CSV into a [`DataFrame`].
///
/// Column types are inferred from every row. Short rows are padded with
/// nulls; fields past the header width are discarded.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not parseable CSV.
pub fn read_frame<R: Read>(mut reader: R) -> Result<DataFrame, PipelineError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let null_values = NullValues::AllColumns(NA_TOKENS.iter().map(|t| (*t).into()).collect());
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values))
                .with_missing_is_null(true)
                .with_truncate_ragged_lines(true),
        )
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    debug!(rows = frame.height(), columns = frame.width(), "Parsed CSV");
    Ok(frame)
}
