use polars::prelude::*;

use crate::schema::TargetType;

fn dtype(target: TargetType) -> DataType {
    match target {
        TargetType::Integer => DataType::Int64,
        TargetType::Float => DataType::Float64,
    }
}

/// Converts `series` to `target`, all or nothing.
///
/// Returns the converted column, or the reason it could not be converted.
/// Integer conversion truncates toward zero; a value that does not fit in
/// an `i64` fails the column.
pub fn coerce_column(series: &Series, target: TargetType) -> Result<Series, String> {
    let nulls = series.null_count();
    if nulls > 0 {
        return Err(format!("{nulls} values are missing"));
    }
    series.strict_cast(&dtype(target)).map_err(|e| e.to_string())
}
