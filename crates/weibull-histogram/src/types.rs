//! Core types for wind-speed histogram representation

use std::fmt;
use weibull_core::{Error, Result};

/// A single bin in a wind-speed histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive), m/s
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin), m/s
    pub right: f64,
    /// Number of observations in this bin
    pub count: usize,
    /// Probability density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.4}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A fixed-width histogram of wind-speed observations
///
/// Bins are anchored at 0 m/s and share a single width. Built once per
/// dataset and read-only afterwards; every estimator consumes the same
/// instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WindHistogram {
    bins: Vec<HistogramBin>,
    bin_width: f64,
    total_count: usize,
}

impl WindHistogram {
    /// Create a new histogram from pre-built bins
    pub(crate) fn new(bins: Vec<HistogramBin>, bin_width: f64, total_count: usize) -> Self {
        Self {
            bins,
            bin_width,
            total_count,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of observations
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the common bin width, m/s
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Get per-bin counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get per-bin probability densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin midpoints as a vector
    pub fn midpoints(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.midpoint()).collect()
    }

    /// Get bin edges (including the rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return vec![];
        }

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        for bin in &self.bins {
            edges.push(bin.left);
        }
        edges.push(self.bins.last().unwrap().right);
        edges
    }

    /// Get the cumulative probability at each bin's upper edge
    ///
    /// Running sum of `density * bin_width`; monotonically non-decreasing and
    /// converging to 1.0 over the full histogram.
    pub fn cumulative(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.bins
            .iter()
            .map(|bin| {
                acc += bin.density * self.bin_width;
                acc
            })
            .collect()
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }
}

impl fmt::Display for WindHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WindHistogram({} bins of {:.2} m/s, n={})",
            self.len(),
            self.bin_width,
            self.total_count
        )
    }
}

/// Mean and population standard deviation of a wind-speed series
///
/// Computed from the raw samples, not from the histogram, and shared as a
/// read-only input by all nine estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    /// Arithmetic mean, m/s
    pub mean: f64,
    /// Population standard deviation, m/s
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute summary statistics from a sample series
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::empty_input());
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample series"));
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={:.3} m/s, std_dev={:.3} m/s",
            self.mean, self.std_dev
        )
    }
}
