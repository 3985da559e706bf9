use serde::Serialize;
use std::fmt;

/// Fixed attendance ranges over `[50, 100]`. The first bin includes 50; each
/// bin includes its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AttendanceBin {
    #[serde(rename = "51–60%")]
    UpTo60,
    #[serde(rename = "61–70%")]
    UpTo70,
    #[serde(rename = "71–80%")]
    UpTo80,
    #[serde(rename = "81–90%")]
    UpTo90,
    #[serde(rename = "91–100%")]
    UpTo100,
}

impl AttendanceBin {
    pub const ALL: [AttendanceBin; 5] = [
        AttendanceBin::UpTo60,
        AttendanceBin::UpTo70,
        AttendanceBin::UpTo80,
        AttendanceBin::UpTo90,
        AttendanceBin::UpTo100,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttendanceBin::UpTo60 => "51–60%",
            AttendanceBin::UpTo70 => "61–70%",
            AttendanceBin::UpTo80 => "71–80%",
            AttendanceBin::UpTo90 => "81–90%",
            AttendanceBin::UpTo100 => "91–100%",
        }
    }
}

impl fmt::Display for AttendanceBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily screen time band.
///
/// | Hours   | Category |
/// |---------|----------|
/// | < 2     | Low      |
/// | 2 – < 5 | Moderate |
/// | >= 5    | High     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ScreenTimeCategory {
    Low,
    Moderate,
    High,
}

impl ScreenTimeCategory {
    pub fn label(self) -> &'static str {
        match self {
            ScreenTimeCategory::Low => "Low",
            ScreenTimeCategory::Moderate => "Moderate",
            ScreenTimeCategory::High => "High",
        }
    }
}

impl fmt::Display for ScreenTimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an attendance percentage to its bin after clipping it to `[50, 100]`.
pub fn bucket_attendance(value: f64) -> AttendanceBin {
    let v = value.clamp(50.0, 100.0);
    match v {
        v if v > 90.0 => AttendanceBin::UpTo100,
        v if v > 80.0 => AttendanceBin::UpTo90,
        v if v > 70.0 => AttendanceBin::UpTo80,
        v if v > 60.0 => AttendanceBin::UpTo70,
        _ => AttendanceBin::UpTo60,
    }
}

/// Negative hours are not rejected; they fall under [`ScreenTimeCategory::Low`].
pub fn categorize_screen_time(hours: f64) -> ScreenTimeCategory {
    match hours {
        h if h < 2.0 => ScreenTimeCategory::Low,
        h if h < 5.0 => ScreenTimeCategory::Moderate,
        _ => ScreenTimeCategory::High,
    }
}
