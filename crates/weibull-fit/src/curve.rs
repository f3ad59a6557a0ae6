//! Weibull probability density evaluation

use crate::types::WeibullParams;

/// Evaluate the Weibull PDF at each abscissa point
///
/// `f(u) = (k/c) (u/c)^(k-1) exp(-(u/c)^k)` elementwise. Parameter
/// positivity is guaranteed by [`WeibullParams`]. At `u = 0` with `k < 1`
/// the density is mathematically unbounded and the IEEE result `+∞` is
/// returned as-is.
pub fn weibull_pdf(params: &WeibullParams, abscissa: &[f64]) -> Vec<f64> {
    let k = params.shape();
    let c = params.scale();
    abscissa
        .iter()
        .map(|&u| {
            let r = u / c;
            (k / c) * r.powf(k - 1.0) * (-r.powf(k)).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_special_case() {
        // k = 1 reduces to Exp(1/c): f(u) = (1/c) e^(-u/c)
        let params = WeibullParams::new(1.0, 2.0).unwrap();
        let curve = weibull_pdf(&params, &[0.0, 2.0, 4.0]);
        assert_relative_eq!(curve[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(curve[1], 0.5 * (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(curve[2], 0.5 * (-2.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_rayleigh_special_case() {
        // k = 2, c = sqrt(2): f(u) = u e^(-u²/2)
        let params = WeibullParams::new(2.0, std::f64::consts::SQRT_2).unwrap();
        let curve = weibull_pdf(&params, &[1.0]);
        assert_relative_eq!(curve[0], (-0.5f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_integrates_to_one() {
        let params = WeibullParams::new(2.0, 8.0).unwrap();
        let step = 0.01;
        let abscissa: Vec<f64> = (0..10_000).map(|i| i as f64 * step).collect();
        let integral: f64 = weibull_pdf(&params, &abscissa).iter().sum::<f64>() * step;
        assert_relative_eq!(integral, 1.0, epsilon = 0.02);
    }

    #[test]
    fn test_unbounded_at_zero_for_small_shape() {
        let params = WeibullParams::new(0.8, 5.0).unwrap();
        let curve = weibull_pdf(&params, &[0.0, 1.0]);
        assert!(curve[0].is_infinite() && curve[0] > 0.0);
        assert!(curve[1].is_finite());
    }
}
