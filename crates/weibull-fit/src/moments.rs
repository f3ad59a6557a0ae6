//! Method of moments estimator: MM

use crate::empirical::{check_stats, gamma_scale};
use crate::traits::WeibullEstimator;
use crate::types::{FitInput, Method, WeibullParams};
use weibull_core::Result;

/// Method of moments (Bowden et al., 1983)
///
/// Closed form in the coefficient of variation:
/// `k = (0.9874 μ/σ)^1.0983`, `c = μ / Γ(1 + 1/k)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodOfMoments;

impl WeibullEstimator for MethodOfMoments {
    fn method(&self) -> Method {
        Method::Mm
    }

    fn name(&self) -> &'static str {
        "method of moments (Bowden et al., 1983)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        check_stats(input.stats)?;
        let k = (0.9874 * input.stats.mean / input.stats.std_dev).powf(1.0983);
        WeibullParams::new(k, gamma_scale(input.stats.mean, k))
    }
}
