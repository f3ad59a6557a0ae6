//! Fixed-width wind-speed histograms and summary statistics
//!
//! This crate turns a raw wind-speed series into the empirical distribution
//! the Weibull estimators fit against: a fixed-width histogram (counts,
//! densities, midpoints, cumulative probabilities) plus the series mean and
//! population standard deviation.
//!
//! # Examples
//!
//! ```rust
//! use weibull_histogram::wind_histogram;
//!
//! let speeds = vec![2.0, 3.0, 4.0, 5.0, 6.0, 3.0, 4.0, 5.0, 4.0, 3.0];
//! let (histogram, stats) = wind_histogram(&speeds, 1.0).unwrap();
//!
//! assert_eq!(histogram.counts().iter().sum::<usize>(), speeds.len());
//! assert!((stats.mean - 3.9).abs() < 1e-12);
//! for bin in histogram.bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod builders;
pub mod types;

pub use builders::WidthBinnedBuilder;
pub use types::{HistogramBin, SummaryStats, WindHistogram};

pub use weibull_core::Result;

/// Build a histogram and summary statistics in one call
///
/// This is the single entry point the fitting pipeline needs: the histogram
/// describes the empirical distribution, the stats seed the estimators.
pub fn wind_histogram(samples: &[f64], bin_width: f64) -> Result<(WindHistogram, SummaryStats)> {
    let histogram = WidthBinnedBuilder::new(bin_width).build(samples)?;
    let stats = SummaryStats::from_samples(samples)?;
    Ok((histogram, stats))
}
