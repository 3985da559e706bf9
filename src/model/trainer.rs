//! Ordinary least squares over the three model features.
//!
//! The normal equations are solved on mean-centred features, which keeps the
//! system well conditioned when attendance (tens) and hours (units) are mixed;
//! the intercept is recovered from the means afterwards.

use chrono::Utc;
use ndarray::{Array1, Array2, Axis};
use tracing::info;

use crate::error::TrainError;
use crate::model::artifact::TrainedModel;
use crate::schema::{FEATURES, StudentRecord};

/// Pivots smaller than this fraction of the largest normal-matrix entry are
/// treated as zero.
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Fits a [`TrainedModel`] on the whole clean dataset. No split, no
/// regularization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trainer;

impl Trainer {
    pub fn new() -> Self {
        Self
    }

    /// A pivot counts as zero when it falls below `1e-10` times the largest
    /// entry of the centred normal matrix, so the cutoff scales with the data.
    ///
    /// # Errors
    ///
    /// [`TrainError::EmptyDataset`] for no records and
    /// [`TrainError::SingularSystem`] when the features do not determine a
    /// unique fit (fewer than four distinct points, a constant feature, or
    /// collinear features).
    #[tracing::instrument(skip_all, fields(samples = records.len()))]
    pub fn train(&self, records: &[StudentRecord]) -> Result<TrainedModel, TrainError> {
        let n = records.len();
        if n == 0 {
            return Err(TrainError::EmptyDataset);
        }

        let x = Array2::from_shape_fn((n, FEATURES.len()), |(i, j)| records[i].features()[j]);
        let y = Array1::from_iter(records.iter().map(|r| r.exam_score));

        let x_mean = x.mean_axis(Axis(0)).ok_or(TrainError::EmptyDataset)?;
        let y_mean = y.mean().ok_or(TrainError::EmptyDataset)?;
        let xc = &x - &x_mean;
        let yc = &y - y_mean;

        let beta = solve(xc.t().dot(&xc), xc.t().dot(&yc))?;
        let intercept = y_mean - beta.dot(&x_mean);

        let residuals = &y - &(x.dot(&beta) + intercept);
        let ss_res = residuals.mapv(|r| r * r).sum();
        let ss_tot = yc.mapv(|d| d * d).sum();
        let r_squared = (ss_tot > 0.0).then(|| 1.0 - ss_res / ss_tot);

        let model = TrainedModel {
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            intercept,
            coefficients: [beta[0], beta[1], beta[2]],
            n_samples: n,
            r_squared,
            trained_at: Utc::now(),
        };

        info!(
            intercept = model.intercept,
            study_hours = model.coefficients[0],
            screen_time = model.coefficients[1],
            attendance = model.coefficients[2],
            r_squared = ?model.r_squared,
            "Model fitted"
        );
        Ok(model)
    }
}

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, TrainError> {
    let n = b.len();
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return Err(TrainError::SingularSystem);
    }
    let tolerance = scale * SINGULAR_TOLERANCE;

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]].abs() <= tolerance {
            return Err(TrainError::SingularSystem);
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                let delta = factor * a[[col, k]];
                a[[row, k]] -= delta;
            }
            let delta = factor * b[col];
            b[row] -= delta;
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(x)
}
