//! Binning and group-wise averages consumed by the dashboard.
//!
//! Attendance and screen time are bucketed into fixed, labeled bins, and
//! exam scores are averaged per bin over an optionally filtered set of
//! students.

pub mod bins;
pub mod filter;
pub mod grouping;
pub mod types;

pub use bins::{AttendanceBin, ScreenTimeCategory, bucket_attendance, categorize_screen_time};
pub use filter::RecordFilter;
pub use grouping::{average_by_bin, summarize_by_bin};
pub use types::{BinSummary, PerformanceSummary};

use crate::schema::StudentRecord;

/// Average exam score per attendance bin and per screen-time category.
pub fn summarize(records: &[StudentRecord]) -> PerformanceSummary {
    PerformanceSummary {
        students: records.len(),
        by_attendance: summarize_by_bin(
            records,
            |r| bucket_attendance(r.attendance_percentage),
            |r| r.exam_score,
        ),
        by_screen_time: summarize_by_bin(
            records,
            |r| categorize_screen_time(r.screen_time),
            |r| r.exam_score,
        ),
    }
}
