//! Loading the clean dataset as typed [`StudentRecord`]s.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::PipelineError;
use crate::schema::StudentRecord;

/// Reads every row of a clean CSV.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StudentRecord>, PipelineError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: StudentRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// Loads the clean dataset written by the cleaning pipeline.
///
/// # Errors
///
/// [`PipelineError::MissingInput`] if the file does not exist, or a CSV error
/// if a row does not match the clean schema.
pub fn load_records(path: &Path) -> Result<Vec<StudentRecord>, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let rows = read_records(File::open(path)?)?;
    debug!(path = %path.display(), rows = rows.len(), "Loaded clean dataset");
    Ok(rows)
}
