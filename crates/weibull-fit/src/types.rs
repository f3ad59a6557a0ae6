//! Core types shared by the estimators, the curve evaluator and the scorer

use statrs::function::gamma::gamma;
use std::fmt;
use std::str::FromStr;
use weibull_core::{Error, Result};
use weibull_histogram::{SummaryStats, WindHistogram};

/// Tag identifying one of the nine estimation methods
///
/// The tags follow the wind-energy literature the methods come from:
/// Justus' empirical method, Lysen's variant, the two graphical regressions,
/// maximum likelihood and its histogram-weighted modification, the method of
/// moments, and the two energy-pattern-factor iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Empirical method / standard deviation method (Justus et al., 1978)
    Emj,
    /// Lysen empirical method (Lysen, 1983)
    Eml,
    /// Graphical method on bin midpoints (Rohatgi & Nelson, 1994)
    Gm1,
    /// Graphical method on upper bin edges (Rohatgi & Nelson, 1994)
    Gm2,
    /// Maximum likelihood method (Stevens & Smulders, 1979)
    Ml,
    /// Modified maximum likelihood method (Seguro & Lambert, 2000)
    Mml,
    /// Method of moments (Bowden et al., 1983)
    Mm,
    /// Power density method (Akdag & Dinler, 2009)
    Pdm,
    /// Energy pattern factor method (Akdag & Guler, 2015)
    Epf,
}

impl Method {
    /// All nine methods, in the conventional reporting order
    pub const ALL: [Method; 9] = [
        Method::Emj,
        Method::Eml,
        Method::Gm1,
        Method::Gm2,
        Method::Ml,
        Method::Mml,
        Method::Mm,
        Method::Pdm,
        Method::Epf,
    ];

    /// The literal tag used in reports and tables
    pub fn tag(&self) -> &'static str {
        match self {
            Method::Emj => "EMJ",
            Method::Eml => "EML",
            Method::Gm1 => "GM1",
            Method::Gm2 => "GM2",
            Method::Ml => "ML",
            Method::Mml => "MML",
            Method::Mm => "MM",
            Method::Pdm => "PDM",
            Method::Epf => "EPF",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EMJ" => Ok(Method::Emj),
            "EML" => Ok(Method::Eml),
            "GM1" => Ok(Method::Gm1),
            "GM2" => Ok(Method::Gm2),
            "ML" => Ok(Method::Ml),
            "MML" => Ok(Method::Mml),
            "MM" => Ok(Method::Mm),
            "PDM" => Ok(Method::Pdm),
            "EPF" => Ok(Method::Epf),
            other => Err(Error::InvalidParameter(format!(
                "unknown estimation method tag: {other}"
            ))),
        }
    }
}

/// Fitted two-parameter Weibull distribution
///
/// Both parameters are validated at construction and never mutated, so a
/// value of this type always describes a proper distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullParams {
    k: f64,
    c: f64,
}

impl WeibullParams {
    /// Create validated parameters
    ///
    /// Both the shape `k` and the scale `c` (m/s) must be strictly positive
    /// and finite.
    pub fn new(k: f64, c: f64) -> Result<Self> {
        if !(k.is_finite() && k > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Weibull shape must be positive and finite, got {k}"
            )));
        }
        if !(c.is_finite() && c > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Weibull scale must be positive and finite, got {c}"
            )));
        }
        Ok(Self { k, c })
    }

    /// Shape parameter `k`
    pub fn shape(&self) -> f64 {
        self.k
    }

    /// Scale parameter `c`, m/s
    pub fn scale(&self) -> f64 {
        self.c
    }

    /// Mean wind speed of the fitted distribution, `c * Γ(1 + 1/k)`
    pub fn mean(&self) -> f64 {
        self.c * gamma(1.0 + 1.0 / self.k)
    }
}

impl fmt::Display for WeibullParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k = {:.2}, c = {:.2} m/s", self.k, self.c)
    }
}

/// Read-only inputs shared by all nine estimators
///
/// One instance per dataset; the estimators never mutate it, so they may be
/// run in any order (or concurrently) against the same input.
#[derive(Debug, Clone, Copy)]
pub struct FitInput<'a> {
    /// Raw wind-speed series, m/s
    pub samples: &'a [f64],
    /// Histogram derived from the same series
    pub histogram: &'a WindHistogram,
    /// Mean and population standard deviation of the same series
    pub stats: &'a SummaryStats,
}

impl<'a> FitInput<'a> {
    /// Bundle a sample series with its derived histogram and statistics
    pub fn new(
        samples: &'a [f64],
        histogram: &'a WindHistogram,
        stats: &'a SummaryStats,
    ) -> Self {
        Self {
            samples,
            histogram,
            stats,
        }
    }
}

/// Goodness-of-fit scores of one estimator's curve against the empirical
/// density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitScore {
    /// Root mean square error
    pub rmse: f64,
    /// Coefficient of determination (at most 1, negative for poor fits)
    pub r_squared: f64,
    /// Mean absolute percentage error
    pub mape: f64,
}

impl fmt::Display for FitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RMSE={:.5}, R²={:.5}, MAPE={:.5}",
            self.rmse, self.r_squared, self.mape
        )
    }
}

/// Outcome of one estimator run
///
/// Estimator failures are independent: a failing method is reported here
/// without affecting the other eight.
#[derive(Debug)]
pub struct MethodFit {
    /// Which estimator produced this outcome
    pub method: Method,
    /// The fitted parameters, or the estimator's own error
    pub params: Result<WeibullParams>,
}
