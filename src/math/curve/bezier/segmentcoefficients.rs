use crate::math::cubicpolynomial::CubicPolynomial;

/// Power-basis coefficients of x(t) − P0 for one Bézier segment:
///
///   x(t) = a·t³ + b·t² + c·t + P0,  t ∈ [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoefficients {
    a: f64,
    b: f64,
    c: f64,
    lhs_x: f64,
    rhs_x: f64,
}

impl SegmentCoefficients {
    pub fn new(p0: f64, p1: f64, p2: f64, p3: f64) -> SegmentCoefficients {
        SegmentCoefficients {
            a: -p0 + 3.0 * p1 - 3.0 * p2 + p3,
            b: 3.0 * p0 - 6.0 * p1 + 3.0 * p2,
            c: -3.0 * p0 + 3.0 * p1,
            lhs_x: p0,
            rhs_x: p3,
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn lhs_x(&self) -> f64 {
        self.lhs_x
    }

    pub fn rhs_x(&self) -> f64 {
        self.rhs_x
    }

    /// x(t) − x_query, whose root in [0, 1] is the parameter of the query.
    pub fn shifted_to(&self, x: f64) -> CubicPolynomial {
        CubicPolynomial::new(self.a, self.b, self.c, self.lhs_x - x)
    }
}

/// One set of coefficients per segment, built from consecutive groups of
/// four x control points sharing their anchors.
pub fn build_segment_coefficients(xpos: &[f64]) -> Vec<SegmentCoefficients> {
    xpos.windows(4)
        .step_by(3)
        .map(|p| SegmentCoefficients::new(p[0], p[1], p[2], p[3]))
        .collect()
}
