use thiserror::Error;

/// Errors raised while building or evaluating a cubic Bézier spline.
///
/// Every variant is terminal for the call that produced it: a batch
/// evaluation never returns partial output alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid solver configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("xpos has {xpos_len} points but ypos has {ypos_len}")]
    ShapeMismatch { xpos_len: usize, ypos_len: usize },

    #[error("insufficient control points: need at least 4, got {actual}")]
    InsufficientPoints { actual: usize },

    #[error("control point count {actual} is not of the form 1 + 3n (n > 0)")]
    InvalidPointCount { actual: usize },

    /// The closing anchor of a segment lies before its opening anchor.
    #[error(
        "segment {segment}: anchor x={end} precedes previous anchor x={start}, \
         xpos may be in reversed order"
    )]
    NonMonotonicOrder { segment: usize, start: f64, end: f64 },

    #[error("segment {segment}: width {width} is below the stability threshold {tolerance}")]
    DegenerateSegment {
        segment: usize,
        width: f64,
        tolerance: f64,
    },

    /// x(t) is not monotonic on the segment, several y may exist for one x.
    #[error("segment {segment}: x is not monotonic in t, the curve is not a function of x")]
    NonMonotonicCurve { segment: usize },

    #[error("query {index} (x={x}) is outside the curve range [{min_x}, {max_x}]")]
    OutOfRange {
        index: usize,
        x: f64,
        min_x: f64,
        max_x: f64,
    },

    #[error("query {index} (x={x}): root solver did not converge within {iterations} iterations")]
    ConvergenceFailure {
        index: usize,
        x: f64,
        iterations: usize,
    },

    /// dy/dx is undefined where the curve has a vertical tangent.
    #[error("derivative undefined at x={x}: dx/dt vanishes")]
    UndefinedDerivative { x: f64 },
}

impl CurveError {
    /// True for errors detected before any query is evaluated.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CurveError::InvalidConfiguration { .. }
                | CurveError::ShapeMismatch { .. }
                | CurveError::InsufficientPoints { .. }
                | CurveError::InvalidPointCount { .. }
                | CurveError::NonMonotonicOrder { .. }
                | CurveError::DegenerateSegment { .. }
                | CurveError::NonMonotonicCurve { .. }
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CurveError::OutOfRange { .. })
    }

    /// Re-labels a per-query error with the query's position in its batch.
    pub fn at_query(self, query_index: usize) -> CurveError {
        match self {
            CurveError::OutOfRange { x, min_x, max_x, .. } => CurveError::OutOfRange {
                index: query_index,
                x,
                min_x,
                max_x,
            },
            CurveError::ConvergenceFailure { x, iterations, .. } => {
                CurveError::ConvergenceFailure {
                    index: query_index,
                    x,
                    iterations,
                }
            }
            other => other,
        }
    }
}
