//! Fixed-width histogram construction for wind-speed series

use crate::types::{HistogramBin, WindHistogram};
use weibull_core::{Error, Result};

/// Fixed-width histogram builder anchored at 0 m/s
///
/// Bins all have the caller-chosen width and span `[0, ceil(max))` with
/// `n_bins = trunc(ceil(max) / width)` (truncation toward zero), matching the
/// standard binning convention of the wind-energy literature these fits come
/// from. The last bin absorbs any value at or beyond its left edge, so every
/// sample is counted.
#[derive(Debug, Clone, Copy)]
pub struct WidthBinnedBuilder {
    bin_width: f64,
}

impl WidthBinnedBuilder {
    /// Create a new builder with the given bin width in m/s
    pub fn new(bin_width: f64) -> Self {
        Self { bin_width }
    }

    /// Get the bin width
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Build a histogram from a wind-speed sample series
    ///
    /// Samples must be non-empty, finite and non-negative; the bin width must
    /// be positive and finite.
    pub fn build(&self, samples: &[f64]) -> Result<WindHistogram> {
        let w = self.bin_width;
        if !(w.is_finite() && w > 0.0) {
            return Err(Error::InvalidInput(format!(
                "bin width must be positive and finite, got {w}"
            )));
        }
        if samples.is_empty() {
            return Err(Error::empty_input());
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample series"));
        }

        let max = samples.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let min = samples.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        if min < 0.0 {
            return Err(Error::InvalidInput(format!(
                "wind speeds must be non-negative, got {min}"
            )));
        }

        // Truncation, not rounding: ceil(max)/w bins of exactly width w,
        // which may leave the top of the range inside the last bin.
        let n_bins = ((max.ceil() / w) as usize).max(1);

        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin::new(i as f64 * w, (i + 1) as f64 * w, 0, samples.len()))
            .collect();

        let last = n_bins - 1;
        for &value in samples {
            let idx = ((value / w) as usize).min(last);
            bins[idx].count += 1;
        }

        // Densities were computed against zero counts; refresh them
        let total = samples.len() as f64;
        for bin in &mut bins {
            bin.density = bin.count as f64 / (total * w);
        }

        Ok(WindHistogram::new(bins, w, samples.len()))
    }
}
