//! Maximum likelihood estimators: ML and MML
//!
//! Both solve the likelihood equation for the shape by fixed-point
//! iteration, seeded with the Justus empirical estimate. ML works on the raw
//! series; MML replaces the raw sums with histogram-weighted sums over the
//! bin midpoints.

use crate::empirical::justus_shape;
use crate::traits::WeibullEstimator;
use crate::types::{FitInput, Method, WeibullParams};
use tracing::debug;
use weibull_core::{fixed_point, Error, Result};

/// Logarithms with the non-finite entries zeroed.
///
/// `ln(0) = -∞` for calm-air samples; the reference analysis substitutes 0
/// so those samples contribute nothing to the log sums instead of poisoning
/// them with NaN.
fn masked_ln(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|v| {
            let l = v.ln();
            if l.is_finite() {
                l
            } else {
                0.0
            }
        })
        .collect()
}

/// Maximum likelihood method (Stevens & Smulders, 1979)
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumLikelihood;

impl WeibullEstimator for MaximumLikelihood {
    fn method(&self) -> Method {
        Method::Ml
    }

    fn name(&self) -> &'static str {
        "maximum likelihood method (Stevens & Smulders, 1979)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        let samples = input.samples;
        let seed = justus_shape(input.stats)?;
        let log_ws = masked_ln(samples);
        let log_sum: f64 = log_ws.iter().sum();

        // Effective sample count excludes calm-air readings
        let n = samples.iter().filter(|&&u| u > 0.1).count();
        if n == 0 {
            return Err(Error::InvalidInput(
                "no wind speeds above 0.1 m/s in the series".to_string(),
            ));
        }
        let n = n as f64;

        let k = fixed_point(seed, |k| {
            let mut pow_sum = 0.0;
            let mut pow_log_sum = 0.0;
            for (u, lu) in samples.iter().zip(&log_ws) {
                let p = u.powf(k);
                pow_sum += p;
                pow_log_sum += p * lu;
            }
            Ok(1.0 / (pow_log_sum / pow_sum - log_sum / n))
        })?;
        debug!(seed, k, "maximum likelihood shape");

        let c = (samples.iter().map(|u| u.powf(k)).sum::<f64>() / n).powf(1.0 / k);
        WeibullParams::new(k, c)
    }
}

/// Modified maximum likelihood method (Seguro & Lambert, 2000)
///
/// The likelihood sums run over the histogram midpoints weighted by the bin
/// counts, so the method only needs binned data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedMaximumLikelihood;

impl WeibullEstimator for ModifiedMaximumLikelihood {
    fn method(&self) -> Method {
        Method::Mml
    }

    fn name(&self) -> &'static str {
        "modified maximum likelihood method (Seguro & Lambert, 2000)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        let seed = justus_shape(input.stats)?;
        let midpoints = input.histogram.midpoints();
        let weights: Vec<f64> = input
            .histogram
            .counts()
            .iter()
            .map(|&c| c as f64)
            .collect();
        let log_m = masked_ln(&midpoints);

        let n = input.histogram.total_count();
        if n == 0 {
            return Err(Error::empty_input());
        }
        let n = n as f64;
        let weighted_log_sum: f64 = log_m.iter().zip(&weights).map(|(l, w)| l * w).sum();

        let k = fixed_point(seed, |k| {
            let mut pow_sum = 0.0;
            let mut pow_log_sum = 0.0;
            for ((m, lm), w) in midpoints.iter().zip(&log_m).zip(&weights) {
                let p = m.powf(k) * w;
                pow_sum += p;
                pow_log_sum += p * lm;
            }
            Ok(1.0 / (pow_log_sum / pow_sum - weighted_log_sum / n))
        })?;
        debug!(seed, k, "modified maximum likelihood shape");

        let c = (midpoints
            .iter()
            .zip(&weights)
            .map(|(m, w)| m.powf(k) * w)
            .sum::<f64>()
            / n)
            .powf(1.0 / k);
        WeibullParams::new(k, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fit_input_for, synthetic_weibull_samples};
    use approx::assert_relative_eq;

    #[test]
    fn test_ml_recovers_known_distribution() {
        let samples = synthetic_weibull_samples(2.0, 8.0, 4000, 11);
        let (histogram, stats, samples) = fit_input_for(&samples, 1.0);
        let input = FitInput::new(&samples, &histogram, &stats);

        let params = MaximumLikelihood.estimate(&input).unwrap();
        assert_relative_eq!(params.shape(), 2.0, epsilon = 0.2);
        assert_relative_eq!(params.scale(), 8.0, epsilon = 0.5);
    }

    #[test]
    fn test_mml_close_to_ml() {
        let samples = synthetic_weibull_samples(2.2, 7.0, 4000, 13);
        let (histogram, stats, samples) = fit_input_for(&samples, 0.5);
        let input = FitInput::new(&samples, &histogram, &stats);

        let ml = MaximumLikelihood.estimate(&input).unwrap();
        let mml = ModifiedMaximumLikelihood.estimate(&input).unwrap();
        assert_relative_eq!(mml.shape(), ml.shape(), epsilon = 0.3);
        assert_relative_eq!(mml.scale(), ml.scale(), epsilon = 0.5);
    }

    #[test]
    fn test_ml_tolerates_calm_air_zeros() {
        let mut samples = synthetic_weibull_samples(2.0, 6.0, 1000, 17);
        samples.extend([0.0; 25]);
        let (histogram, stats, samples) = fit_input_for(&samples, 1.0);
        let input = FitInput::new(&samples, &histogram, &stats);

        let params = MaximumLikelihood.estimate(&input).unwrap();
        assert!(params.shape() > 0.0 && params.shape().is_finite());
    }

    #[test]
    fn test_ml_rejects_all_calm_series() {
        let samples = [0.0, 0.05, 0.1, 0.02, 0.08];
        let (histogram, stats, samples) = fit_input_for(&samples, 1.0);
        let input = FitInput::new(&samples, &histogram, &stats);
        assert!(MaximumLikelihood.estimate(&input).is_err());
    }

    #[test]
    fn test_estimators_are_deterministic() {
        let samples = synthetic_weibull_samples(2.0, 8.0, 500, 19);
        let (histogram, stats, samples) = fit_input_for(&samples, 1.0);
        let input = FitInput::new(&samples, &histogram, &stats);

        let a = MaximumLikelihood.estimate(&input).unwrap();
        let b = MaximumLikelihood.estimate(&input).unwrap();
        assert_eq!(a.shape().to_bits(), b.shape().to_bits());
        assert_eq!(a.scale().to_bits(), b.scale().to_bits());
    }
}
