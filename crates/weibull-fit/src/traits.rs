//! The estimator trait and method dispatch

use crate::empirical::{JustusEmpirical, LysenEmpirical};
use crate::energy::{EnergyPatternFactor, PowerDensity};
use crate::graphical::{GraphicalMidpoints, GraphicalUpperEdges};
use crate::likelihood::{MaximumLikelihood, ModifiedMaximumLikelihood};
use crate::moments::MethodOfMoments;
use crate::types::{FitInput, Method, WeibullParams};
use weibull_core::Result;

/// A Weibull parameter estimator
///
/// Implementations are stateless: the same input always yields the same
/// parameters, and estimators share nothing but the read-only [`FitInput`].
pub trait WeibullEstimator {
    /// The method tag this estimator implements
    fn method(&self) -> Method;

    /// Human-readable method name, with attribution
    fn name(&self) -> &'static str;

    /// Estimate the Weibull shape and scale from the given input
    fn estimate(&self, input: &FitInput<'_>) -> Result<WeibullParams>;
}

/// Get the estimator implementing a given method
pub fn estimator_for(method: Method) -> Box<dyn WeibullEstimator> {
    match method {
        Method::Emj => Box::new(JustusEmpirical),
        Method::Eml => Box::new(LysenEmpirical),
        Method::Gm1 => Box::new(GraphicalMidpoints),
        Method::Gm2 => Box::new(GraphicalUpperEdges),
        Method::Ml => Box::new(MaximumLikelihood),
        Method::Mml => Box::new(ModifiedMaximumLikelihood),
        Method::Mm => Box::new(MethodOfMoments),
        Method::Pdm => Box::new(PowerDensity),
        Method::Epf => Box::new(EnergyPatternFactor),
    }
}

/// All nine estimators in reporting order
pub fn all_estimators() -> Vec<Box<dyn WeibullEstimator>> {
    Method::ALL.iter().map(|&m| estimator_for(m)).collect()
}
