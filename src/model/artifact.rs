//! The fitted model and its on-disk JSON form.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ModelUnavailable;
use crate::output::write_json;
use crate::schema::FEATURES;

/// Intercept plus one coefficient per entry of [`FEATURES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub features: Vec<String>,
    pub intercept: f64,
    pub coefficients: [f64; 3],
    pub n_samples: usize,
    /// Training R²; absent when the target has no variance.
    pub r_squared: Option<f64>,
    pub trained_at: DateTime<Utc>,
}

impl TrainedModel {
    pub fn new(intercept: f64, coefficients: [f64; 3]) -> Self {
        Self {
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            intercept,
            coefficients,
            n_samples: 0,
            r_squared: None,
            trained_at: Utc::now(),
        }
    }

    /// Unclamped linear output for `[study_hours_per_day, screen_time, attendance_percentage]`.
    pub fn linear_output(&self, x: [f64; 3]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(c, v)| c * v)
                .sum::<f64>()
    }

    /// Writes the artifact to `path`, replacing any previous one.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)?;
        info!(path = %path.display(), "Model saved");
        Ok(())
    }

    /// Reads an artifact written by [`TrainedModel::save`].
    ///
    /// # Errors
    ///
    /// [`ModelUnavailable`] if the file is missing, unreadable, not a model,
    /// or was fitted on different features.
    pub fn load(path: &Path) -> Result<Self, ModelUnavailable> {
        let unavailable = |reason: String| ModelUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let body = fs::read(path).map_err(|e| unavailable(e.to_string()))?;
        let model: TrainedModel =
            serde_json::from_slice(&body).map_err(|e| unavailable(format!("corrupt artifact: {e}")))?;

        if model.features != FEATURES {
            return Err(unavailable(format!(
                "artifact features {:?} do not match {:?}",
                model.features, FEATURES
            )));
        }
        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(unavailable("artifact holds non-finite parameters".to_string()));
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_linear_output() {
        let model = TrainedModel::new(10.0, [2.0, -1.0, 0.5]);
        assert_eq!(model.linear_output([3.0, 4.0, 80.0]), 10.0 + 6.0 - 4.0 + 40.0);
    }

    #[test]
    fn test_save_and_load_exact_parameters() {
        let path = temp_path("student_performance_test_model.json");
        let mut model = TrainedModel::new(0.1 + 0.2, [1.0 / 3.0, -2.0 / 7.0, 1e-17]);
        model.n_samples = 12;
        model.r_squared = Some(0.875);

        model.save(&path).unwrap();
        let loaded = TrainedModel::load(&path).unwrap();

        assert_eq!(loaded, model);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrainedModel::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert_eq!(err.path, PathBuf::from("/nonexistent/model.json"));
    }

    #[test]
    fn test_load_corrupt_file() {
        let path = temp_path("student_performance_test_corrupt_model.json");
        fs::write(&path, b"{ not json").unwrap();

        let err = TrainedModel::load(&path).unwrap_err();
        assert!(err.reason.starts_with("corrupt artifact"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_other_features() {
        let path = temp_path("student_performance_test_other_features.json");
        let mut model = TrainedModel::new(1.0, [1.0, 1.0, 1.0]);
        model.features = vec!["a".into(), "b".into(), "c".into()];
        model.save(&path).unwrap();

        assert!(TrainedModel::load(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
