use log::{
    trace,
    warn
};

use crate::math::cubicpolynomial::CubicPolynomial;
use crate::math::rootfinding::rootfinder::{
    endpoint_root,
    RootFindingError
};

// ─────────────────────────────────────────────
// Newton-Raphson / bisection
// ─────────────────────────────────────────────
//
// 1. 以 [0,1] 兩端的線性插值作為初始 t
// 2. 每次迭代先更新 bracket（與下界同號取代下界，否則取代上界）
// 3. Newton 步若落在 bracket 外（或非有限值）改用二分法
//
// bracket 兩端始終異號，因此二分法保證收斂；Newton 步在一般情況下提供超線性收斂。
//
// 殘差下限取 tolerance 與 f(t) 捨入誤差量級的較大者：x 座標很大時（如 1e10），
// 相鄰浮點數的 f(t) 差距已超過 1e-7，否則永遠無法收斂。

const ROUNDING_FACTOR: f64 = 8.0;

/// Sign-change interval around the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    lower_value: f64,
    upper: f64,
    upper_value: f64,
}

impl Bracket {
    fn unit(polynomial: &CubicPolynomial) -> Bracket {
        Bracket {
            lower: 0.0,
            lower_value: polynomial.d(),
            upper: 1.0,
            upper_value: polynomial.value_at_one(),
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn lower_value(&self) -> f64 {
        self.lower_value
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn upper_value(&self) -> f64 {
        self.upper_value
    }

    pub fn contains(&self, t: f64) -> bool {
        self.lower <= t && t <= self.upper
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    fn update(&mut self, t: f64, value: f64) {
        if value * self.lower_value > 0.0 {
            self.lower = t;
            self.lower_value = value;
        } else {
            self.upper = t;
            self.upper_value = value;
        }
    }
}

pub fn find_root(
    polynomial: &CubicPolynomial,
    tolerance: f64,
    max_iterations: usize,
) -> Result<f64, RootFindingError> {
    find_root_observed(polynomial, tolerance, max_iterations, |_| {})
}

/// Same as [`find_root`], reporting the bracket after every update.
pub fn find_root_observed<F>(
    polynomial: &CubicPolynomial,
    tolerance: f64,
    max_iterations: usize,
    mut observe: F,
) -> Result<f64, RootFindingError>
where
    F: FnMut(&Bracket),
{
    let tolerance = residual_tolerance(polynomial, tolerance);
    if let Some(t) = endpoint_root(polynomial, tolerance) {
        return Ok(t);
    }

    let mut bracket = Bracket::unit(polynomial);
    let mut t = -bracket.lower_value / (bracket.upper_value - bracket.lower_value);
    let mut ft = polynomial.value(t);
    let mut iterations = 0;

    // NaN 殘差也視為未收斂
    while !(ft.abs() <= tolerance) {
        if iterations >= max_iterations {
            warn!(
                "newton-bisection stopped after {} iterations at t={}, f(t)={}",
                iterations, t, ft
            );
            return Err(RootFindingError::MaxIterationsReached { iterations });
        }
        iterations += 1;

        bracket.update(t, ft);
        observe(&bracket);

        let newton_t = t - ft / polynomial.derivative(t);
        t = if bracket.contains(newton_t) {
            newton_t
        } else {
            bracket.midpoint()
        };
        ft = polynomial.value(t);
        trace!("iteration {}: t={}, f(t)={}", iterations, t, ft);
    }
    Ok(t)
}

/// `tolerance`, raised to the rounding noise of evaluating `polynomial`.
pub fn residual_tolerance(polynomial: &CubicPolynomial, tolerance: f64) -> f64 {
    tolerance.max(ROUNDING_FACTOR * f64::EPSILON * polynomial.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::bezier::segmentcoefficients::SegmentCoefficients;
    use approx::assert_abs_diff_eq;
    use test_log::test;

    const EPS: f64 = 1e-7;

    #[test]
    fn test_linear_segment_converges_immediately() {
        let polynomial = SegmentCoefficients::new(0.0, 1.0, 2.0, 3.0).shifted_to(1.5);
        let t = find_root(&polynomial, EPS, 100).unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_shortcuts() {
        let coefs = SegmentCoefficients::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(find_root(&coefs.shifted_to(1.0), EPS, 100).unwrap(), 0.0);
        assert_eq!(find_root(&coefs.shifted_to(4.0), EPS, 100).unwrap(), 1.0);
    }

    #[test]
    fn test_residual_within_tolerance() {
        let coefs = SegmentCoefficients::new(0.0, 0.05, 2.95, 3.0);
        for i in 1..30 {
            let x = i as f64 / 10.0;
            let polynomial = coefs.shifted_to(x);
            let t = find_root(&polynomial, EPS, 100).unwrap();
            assert!((0.0..=1.0).contains(&t));
            assert!(polynomial.value(t).abs() <= EPS, "x = {x}");
        }
    }

    #[test]
    fn test_bracket_keeps_sign_change() {
        // flat handles make f'(t) vanish at both ends
        let coefs = SegmentCoefficients::new(0.0, 0.0, 3.0, 3.0);
        for i in 1..30 {
            let x = i as f64 / 10.0;
            let polynomial = coefs.shifted_to(x);
            let mut brackets = Vec::new();
            let t = find_root_observed(&polynomial, EPS, 100, |b| brackets.push(*b)).unwrap();
            for b in &brackets {
                assert!(b.lower() <= b.upper());
                let opposite = b.lower_value() * b.upper_value() < 0.0;
                let near_zero = b.lower_value().abs() <= EPS || b.upper_value().abs() <= EPS;
                assert!(opposite || near_zero, "x = {x}, bracket = {b:?}");
                assert!(b.contains(t));
            }
        }
    }

    #[test]
    fn test_large_coordinates_converge() {
        let coefs = SegmentCoefficients::new(1e10, 1e10, 1.3e10, 1.3e10);
        let unit = SegmentCoefficients::new(1.0, 1.0, 1.3, 1.3);
        for x in [1.01, 1.13, 1.2, 1.29] {
            let t = find_root(&coefs.shifted_to(x * 1e10), EPS, 100).unwrap();
            let expected = find_root(&unit.shifted_to(x), 1e-13, 100).unwrap();
            assert_abs_diff_eq!(t, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_residual_tolerance_floor() {
        let small = SegmentCoefficients::new(0.0, 1.0, 2.0, 3.0).shifted_to(1.5);
        assert_eq!(residual_tolerance(&small, EPS), EPS);

        let large = SegmentCoefficients::new(1e10, 1e10, 1.3e10, 1.3e10).shifted_to(1.13e10);
        let floor = residual_tolerance(&large, EPS);
        assert!(floor > EPS);
        assert!(floor < 1e-4);
    }

    #[test]
    fn test_iteration_cap() {
        // f(1) is NaN, the residual never settles
        let polynomial = CubicPolynomial::new(f64::NAN, 0.0, 3.0, -1.3);
        let err = find_root(&polynomial, EPS, 5).unwrap_err();
        assert_eq!(err, RootFindingError::MaxIterationsReached { iterations: 5 });
    }
}
