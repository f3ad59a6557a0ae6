//! Weibull fitting for wind-speed histograms
//!
//! Estimates the two-parameter Weibull distribution that best fits an
//! empirical wind-speed histogram using nine estimation methods from the
//! wind-energy literature, then scores every fit against the empirical
//! density with RMSE, R² and MAPE.
//!
//! The workspace splits along the data flow:
//!
//! - [`weibull_histogram`]: fixed-width histogram and summary statistics
//! - [`weibull_fit`]: the nine estimators, the PDF evaluator, the scorer
//! - [`weibull_core`]: shared error type and fixed-point iteration
//!
//! The surrounding tooling (CSV ingestion, gap masking, plotting) is the
//! caller's concern; the library consumes a plain `&[f64]` of wind speeds in
//! m/s and a histogram bin width.
//!
//! # Examples
//!
//! ```rust
//! use wind_weibull::compare_methods;
//!
//! let speeds: Vec<f64> = (0..500)
//!     .map(|i| 1.0 + 9.0 * (0.5 + 0.5 * (i as f64 * 0.37).sin()))
//!     .collect();
//!
//! let comparison = compare_methods(&speeds, 1.0).unwrap();
//! println!("{comparison}");
//! for entry in comparison.entries() {
//!     if let Ok((params, score)) = &entry.outcome {
//!         println!("{}: {} ({})", entry.method, params, score);
//!     }
//! }
//! ```

pub use weibull_core;
pub use weibull_fit;
pub use weibull_histogram;

pub use weibull_core::{Error, Result};
pub use weibull_fit::{
    all_estimators, estimator_for, fit_all, score_fit, weibull_pdf, FitInput, FitScore, Method,
    MethodFit, WeibullEstimator, WeibullParams,
};
pub use weibull_histogram::{wind_histogram, SummaryStats, WidthBinnedBuilder, WindHistogram};

use std::fmt;
use tracing::debug;

/// One estimator's end-to-end outcome: fitted parameters and the scores of
/// its curve against the empirical density, or the first error on the way
#[derive(Debug)]
pub struct MethodAssessment {
    /// Which estimation method this row describes
    pub method: Method,
    /// Parameters plus goodness-of-fit scores, or the method's own error
    pub outcome: Result<(WeibullParams, FitScore)>,
}

/// Comparison of all nine estimation methods over one dataset
#[derive(Debug)]
pub struct MethodComparison {
    histogram: WindHistogram,
    stats: SummaryStats,
    entries: Vec<MethodAssessment>,
}

impl MethodComparison {
    /// Per-method assessments, in reporting order
    pub fn entries(&self) -> &[MethodAssessment] {
        &self.entries
    }

    /// The histogram every curve was scored against
    pub fn histogram(&self) -> &WindHistogram {
        &self.histogram
    }

    /// Summary statistics of the underlying series
    pub fn stats(&self) -> SummaryStats {
        self.stats
    }

    /// The assessment for one method
    pub fn entry(&self, method: Method) -> Option<&MethodAssessment> {
        self.entries.iter().find(|e| e.method == method)
    }
}

impl fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method \t RMSE     R squared       MAPE")?;
        writeln!(f, "------------------------------------------------------------")?;
        for entry in &self.entries {
            match &entry.outcome {
                Ok((_, score)) => writeln!(
                    f,
                    "{} \t {:7.5}    {:7.5}   {:7.5}",
                    entry.method.tag(),
                    score.rmse,
                    score.r_squared,
                    score.mape
                )?,
                Err(err) => writeln!(f, "{} \t {}", entry.method.tag(), err)?,
            }
        }
        write!(f, "------------------------------------------------------------")
    }
}

/// Fit all nine methods to a wind-speed series and score every fit
///
/// Builds the histogram and summary statistics, runs each estimator,
/// evaluates each successful fit at the histogram midpoints and scores it
/// against the empirical density. Per-method failures are recorded in the
/// corresponding [`MethodAssessment`]; only invalid input (empty series,
/// bad bin width) fails the whole call.
pub fn compare_methods(samples: &[f64], bin_width: f64) -> Result<MethodComparison> {
    let (histogram, stats) = wind_histogram(samples, bin_width)?;
    debug!(
        n = samples.len(),
        bin_width,
        bins = histogram.len(),
        "comparing Weibull estimation methods"
    );

    let input = FitInput::new(samples, &histogram, &stats);
    let midpoints = histogram.midpoints();
    let density = histogram.densities();

    let entries = fit_all(&input)
        .into_iter()
        .map(|fit| {
            let outcome = fit.params.and_then(|params| {
                let curve = weibull_pdf(&params, &midpoints);
                let score = score_fit(&curve, &density)?;
                Ok((params, score))
            });
            MethodAssessment {
                method: fit.method,
                outcome,
            }
        })
        .collect();

    Ok(MethodComparison {
        histogram,
        stats,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_has_all_methods_in_order() {
        let speeds: Vec<f64> = (0..300)
            .map(|i| 1.0 + 9.0 * (0.5 + 0.5 * (i as f64 * 0.37).sin()))
            .collect();
        let comparison = compare_methods(&speeds, 1.0).unwrap();

        let methods: Vec<Method> = comparison.entries().iter().map(|e| e.method).collect();
        assert_eq!(methods, Method::ALL);
        assert!(comparison.entry(Method::Ml).is_some());
    }

    #[test]
    fn test_invalid_input_fails_whole_call() {
        assert!(compare_methods(&[], 1.0).is_err());
        assert!(compare_methods(&[3.0, 4.0], 0.0).is_err());
    }

    #[test]
    fn test_display_renders_one_row_per_method() {
        let speeds: Vec<f64> = (0..300)
            .map(|i| 1.0 + 9.0 * (0.5 + 0.5 * (i as f64 * 0.37).sin()))
            .collect();
        let comparison = compare_methods(&speeds, 1.0).unwrap();
        let table = comparison.to_string();
        for method in Method::ALL {
            assert!(table.contains(method.tag()), "missing row for {method}");
        }
    }
}
