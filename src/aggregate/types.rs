//! Data types produced by the aggregation helpers.

use serde::Serialize;

/// Statistics of one bin's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSummary {
    pub label: String,
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
}

/// Average exam score by attendance range and by screen-time band, over the
/// filtered students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub students: usize,
    pub by_attendance: Vec<BinSummary>,
    pub by_screen_time: Vec<BinSummary>,
}
