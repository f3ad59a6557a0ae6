//! Empirical (standard deviation) estimators: EMJ and EML
//!
//! Both derive the shape from the coefficient of variation. Justus' form
//! (EMJ) also seeds the four iterative estimators, so its shape formula is
//! exposed crate-wide.

use crate::traits::WeibullEstimator;
use crate::types::{FitInput, Method, WeibullParams};
use statrs::function::gamma::gamma;
use weibull_core::{Error, Result};
use weibull_histogram::SummaryStats;

/// Require a usable mean and spread before touching the closed forms.
///
/// A degenerate series (zero standard deviation, or a non-positive mean)
/// would silently produce infinities in every power-law expression below.
pub(crate) fn check_stats(stats: &SummaryStats) -> Result<()> {
    if !(stats.mean.is_finite() && stats.mean > 0.0) {
        return Err(Error::InvalidInput(format!(
            "mean wind speed must be positive, got {}",
            stats.mean
        )));
    }
    if !(stats.std_dev.is_finite() && stats.std_dev > 0.0) {
        return Err(Error::InvalidInput(format!(
            "wind speed standard deviation must be positive, got {}",
            stats.std_dev
        )));
    }
    Ok(())
}

/// Shape estimate of Justus et al. (1978): `k = (σ/μ)^-1.086`
pub(crate) fn justus_shape(stats: &SummaryStats) -> Result<f64> {
    check_stats(stats)?;
    Ok((stats.std_dev / stats.mean).powf(-1.086))
}

/// Scale from the mean via the gamma function: `c = μ / Γ(1 + 1/k)`
pub(crate) fn gamma_scale(mean: f64, k: f64) -> f64 {
    mean / gamma(1.0 + 1.0 / k)
}

/// Empirical method / standard deviation method (Justus et al., 1978)
#[derive(Debug, Clone, Copy, Default)]
pub struct JustusEmpirical;

impl WeibullEstimator for JustusEmpirical {
    fn method(&self) -> Method {
        Method::Emj
    }

    fn name(&self) -> &'static str {
        "empirical method / standard deviation method (Justus et al., 1978)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        let k = justus_shape(input.stats)?;
        WeibullParams::new(k, gamma_scale(input.stats.mean, k))
    }
}

/// Lysen empirical method (Lysen, 1983)
///
/// Same shape as EMJ, with Lysen's rational approximation replacing the
/// gamma function in the scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct LysenEmpirical;

impl WeibullEstimator for LysenEmpirical {
    fn method(&self) -> Method {
        Method::Eml
    }

    fn name(&self) -> &'static str {
        "Lysen empirical method (Lysen, 1983)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        let k = justus_shape(input.stats)?;
        let c = input.stats.mean * (0.568 + 0.434 / k).powf(-1.0 / k);
        WeibullParams::new(k, c)
    }
}
