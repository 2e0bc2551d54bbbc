use argmin::core::{
    CostFunction,
    Error,
    Executor,
    State,
    TerminationReason
};
use argmin::solver::brent::BrentRoot;
use log::warn;

use crate::math::cubicpolynomial::CubicPolynomial;
use crate::math::rootfinding::rootfinder::{
    endpoint_root,
    RootFindingError
};

/// x(t) − x_query as an argmin problem on t.
struct ShiftedSegment {
    polynomial: CubicPolynomial,
}

impl CostFunction for ShiftedSegment {
    type Param = f64;
    type Output = f64;

    fn cost(&self, t: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.polynomial.value(*t))
    }
}

/// Brent's method on [0, 1]; `tolerance` bounds the width of the final
/// interval in t rather than the residual.
pub fn find_root(
    polynomial: &CubicPolynomial,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, RootFindingError> {
    if let Some(t) = endpoint_root(polynomial, tolerance) {
        return Ok(t);
    }

    let problem = ShiftedSegment {
        polynomial: *polynomial,
    };
    let solver = BrentRoot::new(0.0, 1.0, tolerance);
    let result = Executor::new(problem, solver)
        .configure(|state| state.max_iters(max_iterations as u64))
        .run()
        .map_err(|error| RootFindingError::Solver(error.to_string()))?;

    let state = result.state();
    if let Some(TerminationReason::MaxItersReached) = state.get_termination_reason() {
        warn!("brent stopped after {} iterations", state.get_iter());
        return Err(RootFindingError::MaxIterationsReached {
            iterations: max_iterations,
        });
    }
    state
        .get_best_param()
        .copied()
        .ok_or_else(|| RootFindingError::Solver("brent returned no parameter".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::bezier::segmentcoefficients::SegmentCoefficients;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_segment() {
        let polynomial = SegmentCoefficients::new(0.0, 1.0, 2.0, 3.0).shifted_to(1.5);
        let t = find_root(&polynomial, 1e-10, 100).unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_endpoint_shortcut() {
        let polynomial = SegmentCoefficients::new(0.0, 1.0, 2.0, 3.0).shifted_to(3.0);
        assert_eq!(find_root(&polynomial, 1e-7, 100).unwrap(), 1.0);
    }

    #[test]
    fn test_curved_segment_residual() {
        let coefs = SegmentCoefficients::new(0.0, 0.0, 3.0, 3.0);
        for i in 1..30 {
            let x = i as f64 / 10.0;
            let polynomial = coefs.shifted_to(x);
            let t = find_root(&polynomial, 1e-12, 100).unwrap();
            assert_abs_diff_eq!(polynomial.value(t), 0.0, epsilon = 1e-9);
        }
    }
}
