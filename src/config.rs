//! Runtime settings resolved from the environment.
//!
//! The binary loads `.env` with `dotenvy` before calling [`Settings::from_env`],
//! so either a real environment variable or a `.env` entry can set a path.

use std::path::PathBuf;

pub const DEFAULT_RAW_DATA_PATH: &str = "data/student_habits_performance.csv";
pub const DEFAULT_CLEAN_DATA_PATH: &str = "data/processed_student_habits_performance.csv";
pub const DEFAULT_MODEL_PATH: &str = "exam_score_model.json";

/// File locations shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub raw_data_path: PathBuf,
    pub clean_data_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            raw_data_path: PathBuf::from(DEFAULT_RAW_DATA_PATH),
            clean_data_path: PathBuf::from(DEFAULT_CLEAN_DATA_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Settings {
    /// Reads `RAW_DATA_PATH`, `CLEAN_DATA_PATH` and `MODEL_PATH`, falling back
    /// to the defaults for any that are unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Self {
            raw_data_path: path("RAW_DATA_PATH", defaults.raw_data_path),
            clean_data_path: path("CLEAN_DATA_PATH", defaults.clean_data_path),
            model_path: path("MODEL_PATH", defaults.model_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let vars: HashMap<&str, &str> = [("MODEL_PATH", "models/m.json"), ("CLEAN_DATA_PATH", "  ")]
            .into_iter()
            .collect();
        let settings = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(settings.model_path, PathBuf::from("models/m.json"));
        assert_eq!(settings.clean_data_path, PathBuf::from(DEFAULT_CLEAN_DATA_PATH));
        assert_eq!(settings.raw_data_path, PathBuf::from(DEFAULT_RAW_DATA_PATH));
    }
}
