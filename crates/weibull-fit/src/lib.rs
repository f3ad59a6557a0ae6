//! Weibull parameter estimation for wind-speed distributions
//!
//! Nine estimation methods from the wind-energy literature, each producing a
//! shape/scale pair for the two-parameter Weibull distribution, plus the PDF
//! evaluator and the RMSE/R²/MAPE scorer used to rank the fits against the
//! empirical histogram density.
//!
//! The estimators are independent and stateless: they share one read-only
//! [`FitInput`] (raw samples, histogram, summary statistics) and may be run
//! in any order.
//!
//! # Examples
//!
//! ```rust
//! use weibull_fit::{fit_all, score_fit, weibull_pdf, FitInput};
//! use weibull_histogram::wind_histogram;
//!
//! let speeds: Vec<f64> = (0..200).map(|i| 2.0 + 7.0 * ((i % 17) as f64 / 17.0)).collect();
//! let (histogram, stats) = wind_histogram(&speeds, 1.0).unwrap();
//! let input = FitInput::new(&speeds, &histogram, &stats);
//!
//! let midpoints = histogram.midpoints();
//! let density = histogram.densities();
//! for fit in fit_all(&input) {
//!     match fit.params {
//!         Ok(params) => {
//!             let curve = weibull_pdf(&params, &midpoints);
//!             let score = score_fit(&curve, &density).unwrap();
//!             println!("{}: {} ({})", fit.method, params, score);
//!         }
//!         Err(err) => println!("{}: {}", fit.method, err),
//!     }
//! }
//! ```

pub mod curve;
pub mod empirical;
pub mod energy;
pub mod graphical;
pub mod likelihood;
pub mod moments;
pub mod score;
pub mod traits;
pub mod types;

pub use curve::weibull_pdf;
pub use empirical::{JustusEmpirical, LysenEmpirical};
pub use energy::{EnergyPatternFactor, PowerDensity};
pub use graphical::{GraphicalMidpoints, GraphicalUpperEdges};
pub use likelihood::{MaximumLikelihood, ModifiedMaximumLikelihood};
pub use moments::MethodOfMoments;
pub use score::score_fit;
pub use traits::{all_estimators, estimator_for, WeibullEstimator};
pub use types::{FitInput, FitScore, Method, MethodFit, WeibullParams};

pub use weibull_core::Result;

/// Run all nine estimators against the same input
///
/// Failures are independent: each [`MethodFit`] carries its own result, and
/// one method's error never aborts the others.
pub fn fit_all(input: &FitInput<'_>) -> Vec<MethodFit> {
    all_estimators()
        .iter()
        .map(|estimator| MethodFit {
            method: estimator.method(),
            params: estimator.estimate(input),
        })
        .collect()
}
