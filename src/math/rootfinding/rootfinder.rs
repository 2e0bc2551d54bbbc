use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::cubicpolynomial::CubicPolynomial;
use crate::math::rootfinding::{
    brentroot,
    newtonbisection
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("no root within tolerance after {iterations} iterations")]
    MaxIterationsReached { iterations: usize },

    #[error("root solver failed: {0}")]
    Solver(String),
}

/// Root finder used to invert x(t) on a bracketed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootFinderType {
    /// Newton-Raphson with bisection fallback, residual tolerance on f(t).
    #[default]
    NewtonBisection,
    /// argmin's Brent method, tolerance on t.
    Brent,
}

impl RootFinderType {
    /// Root of `polynomial` in [0, 1], assuming f(0) ≤ 0 ≤ f(1).
    pub fn find_root(
        &self,
        polynomial: &CubicPolynomial,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<f64, RootFindingError> {
        match self {
            RootFinderType::NewtonBisection => {
                newtonbisection::find_root(polynomial, tolerance, max_iterations)
            }
            RootFinderType::Brent => brentroot::find_root(polynomial, tolerance, max_iterations),
        }
    }
}

/// Shortcut shared by both solvers: a query sitting on an anchor.
pub(crate) fn endpoint_root(polynomial: &CubicPolynomial, tolerance: f64) -> Option<f64> {
    if polynomial.d().abs() < tolerance {
        Some(0.0)
    } else if polynomial.value_at_one().abs() < tolerance {
        Some(1.0)
    } else {
        None
    }
}
