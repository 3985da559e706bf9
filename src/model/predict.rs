use std::path::Path;

use tracing::debug;

use crate::error::ModelUnavailable;
use crate::model::artifact::TrainedModel;

/// Highest score a prediction may report.
pub const MAX_SCORE: f64 = 100.0;

/// Predicted exam score for one student, capped at [`MAX_SCORE`].
///
/// There is no lower bound: a negative linear output is returned as is.
pub fn predict(
    model: &TrainedModel,
    study_hours: f64,
    screen_time: f64,
    attendance_percentage: f64,
) -> f64 {
    let raw = model.linear_output([study_hours, screen_time, attendance_percentage]);
    if raw > MAX_SCORE { MAX_SCORE } else { raw }
}

/// Serves predictions from a persisted artifact.
#[derive(Debug, Clone)]
pub struct PredictionService {
    model: TrainedModel,
}

impl PredictionService {
    /// # Errors
    ///
    /// [`ModelUnavailable`] if the artifact is missing or corrupt.
    pub fn load(path: &Path) -> Result<Self, ModelUnavailable> {
        let model = TrainedModel::load(path)?;
        debug!(path = %path.display(), n_samples = model.n_samples, "Model loaded");
        Ok(Self { model })
    }

    pub fn from_model(model: TrainedModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn predict(&self, study_hours: f64, screen_time: f64, attendance_percentage: f64) -> f64 {
        predict(&self.model, study_hours, screen_time, attendance_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_prediction_within_range() {
        let model = TrainedModel::new(20.0, [5.0, -2.0, 0.4]);
        assert_eq!(predict(&model, 2.0, 3.0, 50.0), 20.0 + 10.0 - 6.0 + 20.0);
    }

    #[test]
    fn test_prediction_capped_at_100() {
        let model = TrainedModel::new(90.0, [10.0, 0.0, 0.0]);
        assert_eq!(predict(&model, 5.0, 0.0, 0.0), 100.0);
        assert_eq!(predict(&model, 1.0, 0.0, 0.0), 100.0);
    }

    #[test]
    fn test_negative_prediction_passes_through() {
        let model = TrainedModel::new(-30.0, [1.0, -4.0, 0.0]);
        assert_eq!(predict(&model, 1.0, 2.0, 0.0), -37.0);
    }

    #[test]
    fn test_service_missing_artifact() {
        let result = PredictionService::load(Path::new("/nonexistent/exam_score_model.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_service_from_freshly_trained_model() {
        use crate::model::Trainer;
        use crate::schema::StudentRecord;

        let records: Vec<StudentRecord> = [
            (1.0, 2.0, 60.0),
            (2.0, 5.0, 70.0),
            (3.0, 1.0, 80.0),
            (4.0, 3.0, 90.0),
            (5.0, 6.0, 75.0),
        ]
        .into_iter()
        .map(|(study, screen, attendance)| StudentRecord {
            gender: "Male".to_string(),
            age: 21,
            study_hours_per_day: study,
            social_media_hours: screen,
            netflix_hours: 0.0,
            attendance_percentage: attendance,
            exam_score: 10.0 + 5.0 * study - 2.0 * screen + 0.5 * attendance,
            screen_time: screen,
        })
        .collect();
        let model = Trainer::new().train(&records).unwrap();

        let service = PredictionService::from_model(model.clone());
        assert_eq!(service.model(), &model);
        assert!((service.predict(2.0, 3.0, 80.0) - 54.0).abs() < 1e-8);
        assert_eq!(service.predict(20.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_service_loads_saved_model() {
        let path = env::temp_dir().join("student_performance_test_service_model.json");
        let model = TrainedModel::new(150.0, [0.0, 0.0, -1.0]);
        model.save(&path).unwrap();

        let service = PredictionService::load(&path).unwrap();
        assert_eq!(service.predict(0.0, 0.0, 10.0), 100.0);
        assert_eq!(service.predict(0.0, 0.0, 60.0), 90.0);
        assert_eq!(service.model(), &model);

        fs::remove_file(&path).unwrap();
    }
}
