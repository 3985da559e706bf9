use std::collections::HashMap;

use polars::prelude::*;

/// Fills the nulls of a numeric column with the median of its present values.
///
/// The filled column is Float64. Returns `None` when no value is present.
pub fn fill_median(series: &Series) -> PolarsResult<Option<(Series, f64)>> {
    let Some(median) = series.median() else {
        return Ok(None);
    };
    let filled = series
        .cast(&DataType::Float64)?
        .f64()?
        .fill_null_with_values(median)?
        .into_series();
    Ok(Some((filled, median)))
}

/// Most frequent present value. Ties go to the value seen first.
pub fn mode(values: &StringChunked) -> Option<&str> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, value) in values.into_iter().enumerate() {
        if let Some(value) = value {
            counts.entry(value).or_insert((0, position)).0 += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value)
}

/// Fills the nulls of a column with its [`mode`], read as text.
///
/// Returns `None` when no value is present.
pub fn fill_mode(series: &Series) -> PolarsResult<Option<(Series, String)>> {
    let text = series.cast(&DataType::String)?;
    let values = text.str()?;
    let Some(fill) = mode(values).map(str::to_string) else {
        return Ok(None);
    };

    let filled: Vec<&str> = values
        .into_iter()
        .map(|v| v.unwrap_or(fill.as_str()))
        .collect();
    Ok(Some((Series::new(series.name().clone(), filled), fill)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[Option<&str>]) -> Series {
        Series::new("t".into(), values)
    }

    #[test]
    fn test_median_odd_count() {
        let series = Series::new("n".into(), &[Some(3.0), None, Some(1.0), Some(2.0)]);
        let (filled, median) = fill_median(&series).unwrap().unwrap();

        assert_eq!(median, 2.0);
        assert_eq!(filled.name().as_str(), "n");
        assert_eq!(filled.null_count(), 0);
        assert_eq!(filled.f64().unwrap().get(1), Some(2.0));
    }

    #[test]
    fn test_median_even_count_of_integers() {
        let series = Series::new("n".into(), &[Some(4i64), None, Some(1), Some(2), Some(3)]);
        let (filled, median) = fill_median(&series).unwrap().unwrap();

        assert_eq!(median, 2.5);
        assert_eq!(filled.dtype(), &DataType::Float64);
        assert_eq!(filled.f64().unwrap().get(1), Some(2.5));
    }

    #[test]
    fn test_median_all_missing() {
        let series = Series::full_null("n".into(), 2, &DataType::Float64);
        assert!(fill_median(&series).unwrap().is_none());
    }

    #[test]
    fn test_mode_prefers_most_frequent() {
        let series = texts(&[Some("a"), Some("b"), Some("b"), None]);
        assert_eq!(mode(series.str().unwrap()), Some("b"));
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let series = texts(&[Some("Male"), Some("Female"), Some("Female"), Some("Male"), Some("Other")]);
        assert_eq!(mode(series.str().unwrap()), Some("Male"));
    }

    #[test]
    fn test_fill_mode_replaces_nulls() {
        let series = texts(&[None, Some("Poor"), Some("Good"), None, Some("Poor")]);
        let (filled, fill) = fill_mode(&series).unwrap().unwrap();

        assert_eq!(fill, "Poor");
        let values: Vec<_> = filled.str().unwrap().into_iter().collect();
        assert_eq!(
            values,
            vec![Some("Poor"), Some("Poor"), Some("Good"), Some("Poor"), Some("Poor")]
        );
    }

    #[test]
    fn test_fill_mode_all_missing() {
        let series = texts(&[None, None]);
        assert!(fill_mode(&series).unwrap().is_none());
    }
}
