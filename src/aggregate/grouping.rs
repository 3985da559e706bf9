use std::collections::BTreeMap;
use std::fmt::Display;

use crate::aggregate::types::BinSummary;

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a known mean; 0.0 for an empty slice.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Collects `value_fn` of every record under the bin `bin_fn` assigns it.
pub fn group_by_bin<R, K, B, V>(records: &[R], bin_fn: B, value_fn: V) -> BTreeMap<K, Vec<f64>>
where
    K: Ord,
    B: Fn(&R) -> K,
    V: Fn(&R) -> f64,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(bin_fn(record)).or_default().push(value_fn(record));
    }
    groups
}

/// Mean of `value_fn` per bin. Bins without members are absent, not zero.
pub fn average_by_bin<R, K, B, V>(records: &[R], bin_fn: B, value_fn: V) -> BTreeMap<K, f64>
where
    K: Ord,
    B: Fn(&R) -> K,
    V: Fn(&R) -> f64,
{
    group_by_bin(records, bin_fn, value_fn)
        .into_iter()
        .map(|(bin, values)| (bin, mean(&values)))
        .collect()
}

/// Per-bin count, mean and spread, in bin order.
pub fn summarize_by_bin<R, K, B, V>(records: &[R], bin_fn: B, value_fn: V) -> Vec<BinSummary>
where
    K: Ord + Display,
    B: Fn(&R) -> K,
    V: Fn(&R) -> f64,
{
    group_by_bin(records, bin_fn, value_fn)
        .into_iter()
        .map(|(bin, values)| {
            let avg = mean(&values);
            BinSummary {
                label: bin.to_string(),
                count: values.len(),
                mean: avg,
                stddev: stddev(&values, avg),
            }
        })
        .collect()
}
