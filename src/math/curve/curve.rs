use crate::math::curve::curveerror::CurveError;

/// A function y = f(x) defined on a bounded x-range.
pub trait Curve {
    fn value(&self, x: f64) -> Result<f64, CurveError>;

    fn derivative(&self, x: f64) -> Result<f64, CurveError>;
}
