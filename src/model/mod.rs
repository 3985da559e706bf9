//! Exam-score regression: fitting, persistence and prediction.

pub mod artifact;
pub mod predict;
pub mod trainer;

pub use artifact::TrainedModel;
pub use predict::{MAX_SCORE, PredictionService, predict};
pub use trainer::Trainer;
