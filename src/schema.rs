//! Column names and the typed row used by the aggregation and training stages.

use serde::{Deserialize, Serialize};

pub const GENDER: &str = "gender";
pub const AGE: &str = "age";
pub const STUDY_HOURS: &str = "study_hours_per_day";
pub const SOCIAL_MEDIA_HOURS: &str = "social_media_hours";
pub const NETFLIX_HOURS: &str = "netflix_hours";
pub const ATTENDANCE: &str = "attendance_percentage";
pub const EXAM_SCORE: &str = "exam_score";
pub const SCREEN_TIME: &str = "screen_time";

/// Rows missing any of these are dropped rather than imputed.
pub const CRITICAL_COLUMNS: [&str; 5] = [
    EXAM_SCORE,
    SOCIAL_MEDIA_HOURS,
    NETFLIX_HOURS,
    STUDY_HOURS,
    ATTENDANCE,
];

/// Target type a schema column is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Integer,
    Float,
}

/// Coercions applied after imputation, in order.
pub const COERCIONS: [(&str, TargetType); 6] = [
    (AGE, TargetType::Integer),
    (STUDY_HOURS, TargetType::Float),
    (SOCIAL_MEDIA_HOURS, TargetType::Float),
    (NETFLIX_HOURS, TargetType::Float),
    (ATTENDANCE, TargetType::Float),
    (EXAM_SCORE, TargetType::Float),
];

/// Model inputs, in artifact order.
pub const FEATURES: [&str; 3] = [STUDY_HOURS, SCREEN_TIME, ATTENDANCE];

/// One student from the clean dataset.
///
/// Deserializes straight from the clean CSV; columns outside the core schema
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: String,
    pub age: i64,
    pub study_hours_per_day: f64,
    pub social_media_hours: f64,
    pub netflix_hours: f64,
    pub attendance_percentage: f64,
    pub exam_score: f64,
    pub screen_time: f64,
}

impl StudentRecord {
    /// The model feature vector `[study_hours_per_day, screen_time, attendance_percentage]`.
    pub fn features(&self) -> [f64; 3] {
        [
            self.study_hours_per_day,
            self.screen_time,
            self.attendance_percentage,
        ]
    }
}
