//! Goodness-of-fit scoring of a fitted curve against the empirical density

use crate::types::FitScore;
use weibull_core::{Error, Result};

/// Score a fitted density curve against the empirical density
///
/// Both sequences must be evaluated over the same abscissa (normally the
/// histogram midpoints). MAPE terms where the empirical density is zero are
/// substituted by 0 rather than excluded, reproducing the masking policy of
/// the reference wind analyses; the bin still counts toward `N`.
pub fn score_fit(curve: &[f64], empirical: &[f64]) -> Result<FitScore> {
    if curve.is_empty() {
        return Err(Error::empty_input());
    }
    if curve.len() != empirical.len() {
        return Err(Error::size_mismatch(
            empirical.len(),
            curve.len(),
            "fit curve",
        ));
    }

    let n = curve.len() as f64;
    let emp_mean = empirical.iter().sum::<f64>() / n;

    let mut sq_err = 0.0;
    let mut sq_dev = 0.0;
    let mut mape_sum = 0.0;
    for (fit, emp) in curve.iter().zip(empirical) {
        let diff = fit - emp;
        sq_err += diff * diff;
        let dev = emp - emp_mean;
        sq_dev += dev * dev;

        let term = diff.abs() / emp;
        if term.is_finite() {
            mape_sum += term;
        }
    }

    Ok(FitScore {
        rmse: (sq_err / n).sqrt(),
        r_squared: 1.0 - sq_err / sq_dev,
        mape: 100.0 * mape_sum / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_perfect_fit() {
        let emp = [0.1, 0.3, 0.4, 0.2];
        let score = score_fit(&emp, &emp).unwrap();
        assert_abs_diff_eq!(score.rmse, 0.0);
        assert_abs_diff_eq!(score.r_squared, 1.0);
        assert_abs_diff_eq!(score.mape, 0.0);
    }

    #[test]
    fn test_known_scores() {
        let emp = [0.2, 0.4, 0.2];
        let fit = [0.3, 0.3, 0.3];
        let score = score_fit(&fit, &emp).unwrap();

        // sq_err = 0.01 * 3, rmse = sqrt(0.03 / 3) = 0.1
        assert_relative_eq!(score.rmse, 0.1, epsilon = 1e-12);
        // sq_dev around mean 0.2666…: 2 * (1/15)² + (2/15)²
        let sq_dev = 2.0 * (1.0f64 / 15.0).powi(2) + (2.0f64 / 15.0).powi(2);
        assert_relative_eq!(score.r_squared, 1.0 - 0.03 / sq_dev, epsilon = 1e-12);
        // MAPE: (0.1/0.2 + 0.1/0.4 + 0.1/0.2) / 3 * 100
        assert_relative_eq!(score.mape, 100.0 * (0.5 + 0.25 + 0.5) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_density_bins_masked_in_mape() {
        let emp = [0.0, 0.5, 0.5];
        let fit = [0.1, 0.5, 0.5];
        let score = score_fit(&fit, &emp).unwrap();
        // The zero-density bin contributes nothing but still divides by N = 3
        assert_abs_diff_eq!(score.mape, 0.0);
        assert!(score.rmse > 0.0);
    }

    #[test]
    fn test_rmse_non_negative_r2_bounded() {
        let emp = [0.1, 0.2, 0.4, 0.3];
        let fit = [0.4, 0.1, 0.1, 0.4];
        let score = score_fit(&fit, &emp).unwrap();
        assert!(score.rmse >= 0.0);
        assert!(score.r_squared <= 1.0); // may be negative for poor fits
    }

    #[test]
    fn test_input_validation() {
        assert!(score_fit(&[], &[]).is_err());
        assert!(score_fit(&[0.1, 0.2], &[0.1]).is_err());
    }
}
