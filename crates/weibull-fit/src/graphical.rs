//! Graphical estimators: GM1 and GM2
//!
//! Linearize the Weibull CDF, `ln(-ln(1 - F))` against `ln(u)`, and read
//! the parameters off a least-squares line: the slope is the shape, and the
//! scale is `exp(-intercept / slope)`.

use crate::traits::WeibullEstimator;
use crate::types::{FitInput, Method, WeibullParams};
use weibull_core::{Error, Result};
use weibull_histogram::WindHistogram;

/// Transformed ordinates `y = ln(-ln(1 - F))` for the regression.
///
/// Bins with `F = 0` or `F = 1` produce non-finite values under the double
/// logarithm and are dropped. The surviving values are then paired with the
/// *first* `y.len()` abscissa points, exactly as the reference analysis does
/// (the dropped ordinates are almost always the saturated tail bins).
fn transformed_ordinates(histogram: &WindHistogram) -> Vec<f64> {
    histogram
        .cumulative()
        .iter()
        .map(|f| (-(1.0 - f).ln()).ln())
        .filter(|y| y.is_finite())
        .collect()
}

/// Least-squares slope and intercept via the standard sums
fn regress(x: &[f64], y: &[f64]) -> Result<(f64, f64)> {
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let xx_sum: f64 = x.iter().map(|v| v * v).sum();
    let xy_sum: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let den = xx_sum - n * x_mean * x_mean;
    let slope = (xy_sum - n * x_mean * y_mean) / den;
    let intercept = (y_mean * xx_sum - x_mean * xy_sum) / den;

    if !(slope.is_finite() && intercept.is_finite()) {
        return Err(Error::Computation(
            "graphical regression produced a non-finite line".to_string(),
        ));
    }
    Ok((slope, intercept))
}

fn estimate_from_abscissa(histogram: &WindHistogram, abscissa: &[f64]) -> Result<WeibullParams> {
    let y = transformed_ordinates(histogram);
    if y.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: y.len(),
        });
    }

    let x: Vec<f64> = abscissa[..y.len()].iter().map(|u| u.ln()).collect();
    let (slope, intercept) = regress(&x, &y)?;

    let k = slope;
    let c = (-intercept / slope).exp();
    WeibullParams::new(k, c)
}

/// Graphical method over bin midpoints (Rohatgi & Nelson, 1994)
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicalMidpoints;

impl WeibullEstimator for GraphicalMidpoints {
    fn method(&self) -> Method {
        Method::Gm1
    }

    fn name(&self) -> &'static str {
        "graphical method over bin midpoints (Rohatgi & Nelson, 1994)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        estimate_from_abscissa(input.histogram, &input.histogram.midpoints())
    }
}

/// Graphical method over upper bin edges (Rohatgi & Nelson, 1994)
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicalUpperEdges;

impl WeibullEstimator for GraphicalUpperEdges {
    fn method(&self) -> Method {
        Method::Gm2
    }

    fn name(&self) -> &'static str {
        "graphical method over upper bin edges (Rohatgi & Nelson, 1994)"
    }

    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams> {
        estimate_from_abscissa(input.histogram, &input.histogram.edges()[1..])
    }
}
