/// Stake timing heuristic
///
/// Fits APR ~ sui_price + tvl (ordinary least squares with intercept) over the
/// whole series and compares the fitted APR of the series' last record with the
/// series mean. Favorable when fitted > 1.1 x mean.
///
/// The last record of a generated series is its oldest day.
use serde::Serialize;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression, LinearRegressionParameters, LinearRegressionSolverName,
};

use super::types::MarketSample;
use crate::constants::{FAVORABLE_APR_RATIO, MIN_PREDICTION_SAMPLES};
use crate::errors::AdvisorError;
use crate::logger::{self, LogTag};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StakePrediction {
    pub predicted_apr: f64,
    pub mean_apr: f64,
    pub favorable: bool,
}

/// `true` when conditions look favorable; `false` on too little data or a failed fit
pub fn predict(samples: &[MarketSample]) -> bool {
    evaluate(samples).map_or(false, |p| p.favorable)
}

/// Full prediction, `None` when the series is too short or the fit fails
pub fn evaluate(samples: &[MarketSample]) -> Option<StakePrediction> {
    if samples.len() < MIN_PREDICTION_SAMPLES {
        logger::warning(
            LogTag::Predictor,
            &format!(
                "Not enough data to predict: {} samples (need {})",
                samples.len(),
                MIN_PREDICTION_SAMPLES
            ),
        );
        return None;
    }

    let predicted_apr = match fitted_last_apr(samples) {
        Ok(apr) => apr,
        Err(e) => {
            logger::error(LogTag::Predictor, &format!("Prediction failed: {}", e));
            return None;
        }
    };

    let mean_apr = samples.iter().map(|s| s.apr).sum::<f64>() / samples.len() as f64;
    let favorable = predicted_apr > mean_apr * FAVORABLE_APR_RATIO;

    logger::info(
        LogTag::Predictor,
        &format!(
            "Predicted APR: {:.2}%, mean APR: {:.2}%, favorable: {}",
            predicted_apr, mean_apr, favorable
        ),
    );

    Some(StakePrediction {
        predicted_apr,
        mean_apr,
        favorable,
    })
}

/// Fit over all samples and return the fitted APR of the last one
fn fitted_last_apr(samples: &[MarketSample]) -> Result<f64, AdvisorError> {
    let features: Vec<Vec<f64>> = samples.iter().map(|s| vec![s.sui_price, s.tvl]).collect();
    let targets: Vec<f64> = samples.iter().map(|s| s.apr).collect();

    let x = DenseMatrix::from_2d_vec(&features)
        .map_err(|e| AdvisorError::Unexpected(format!("Failed to build feature matrix: {}", e)))?;

    // SVD tolerates rank-deficient inputs such as a flat series
    let parameters =
        LinearRegressionParameters::default().with_solver(LinearRegressionSolverName::SVD);

    let model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>> =
        LinearRegression::fit(&x, &targets, parameters)
            .map_err(|e| AdvisorError::Unexpected(format!("Regression fit failed: {}", e)))?;

    let fitted = model
        .predict(&x)
        .map_err(|e| AdvisorError::Unexpected(format!("Regression predict failed: {}", e)))?;

    logger::verbose(
        LogTag::Predictor,
        &format!("Fitted APRs over {} samples: {:?}", fitted.len(), fitted),
    );

    match fitted.last().copied() {
        Some(apr) if apr.is_finite() => Ok(apr),
        Some(apr) => Err(AdvisorError::Unexpected(format!(
            "Regression produced a non-finite APR: {}",
            apr
        ))),
        None => Err(AdvisorError::Unexpected(
            "Regression returned no values".to_string(),
        )),
    }
}
