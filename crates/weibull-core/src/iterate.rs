//! Fixed-point iteration for the iterative shape estimators
//!
//! Four of the nine estimation methods (ML, MML, PDM, EPF) refine the shape
//! parameter by repeatedly applying an update function until the change drops
//! below a fixed tolerance. The loop lives here so the break logic and the
//! safety cap exist once.

use crate::{Error, Result};
use tracing::debug;

/// Absolute tolerance on the change in `k` between iterations.
///
/// This is fixed design policy from the wind-energy literature the estimators
/// come from, not a tunable.
pub const K_TOLERANCE: f64 = 0.005;

/// Safety cap on fixed-point iterations.
///
/// The published procedures iterate unboundedly; pathological inputs could
/// cycle forever, so iteration stops here with [`Error::Convergence`].
pub const MAX_ITERATIONS: usize = 1000;

/// Iterate `update` from `seed` until `|k' - k| < K_TOLERANCE`.
///
/// The update is always applied at least once: a seed that already satisfies
/// the tolerance terminates after exactly one application. Returns
/// [`Error::Convergence`] if the cap is exceeded, and propagates any error
/// from the update function itself.
pub fn fixed_point<F>(seed: f64, mut update: F) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    if !seed.is_finite() {
        return Err(Error::non_finite("fixed-point seed"));
    }

    let mut k = seed;
    for iteration in 1..=MAX_ITERATIONS {
        let next = update(k)?;
        if !next.is_finite() {
            return Err(Error::non_finite("fixed-point iterate"));
        }
        if (next - k).abs() < K_TOLERANCE {
            debug!(iterations = iteration, k = next, "fixed point converged");
            return Ok(next);
        }
        k = next;
    }

    Err(Error::Convergence {
        iterations: MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_converges_to_fixed_point() {
        // x -> cos(x) contracts to the Dottie number ~0.739
        let root = fixed_point(1.0, |x| Ok(x.cos())).unwrap();
        assert_relative_eq!(root, 0.739, epsilon = K_TOLERANCE);
    }

    #[test]
    fn test_converged_seed_applies_update_once() {
        let mut calls = 0;
        let result = fixed_point(2.0, |x| {
            calls += 1;
            Ok(x + 0.001)
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_relative_eq!(result, 2.001);
    }

    #[test]
    fn test_divergent_update_hits_cap() {
        let err = fixed_point(1.0, |x| Ok(-x)).unwrap_err();
        match err {
            Error::Convergence { iterations } => assert_eq!(iterations, MAX_ITERATIONS),
            other => panic!("expected Convergence, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_seed_rejected() {
        assert!(fixed_point(f64::NAN, |x| Ok(x)).is_err());
        assert!(fixed_point(f64::INFINITY, |x| Ok(x)).is_err());
    }

    #[test]
    fn test_update_error_propagates() {
        let err = fixed_point(1.0, |_| {
            Err(Error::Computation("bad iterate".to_string()))
        })
        .unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_non_finite_iterate_rejected() {
        assert!(fixed_point(1.0, |_| Ok(f64::NAN)).is_err());
    }
}
