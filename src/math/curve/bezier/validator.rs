use crate::math::curve::curveerror::CurveError;

pub const MIN_POINTS: usize = 4;

/// Checks the control polygon before any coefficient or query work.
///
/// Stops at the first violation. Segment checks run in segment order, the
/// width check of a segment before its monotonicity check.
pub fn validate(xpos: &[f64], ypos: &[f64], tolerance: f64) -> Result<(), CurveError> {
    let num_points = xpos.len();
    if ypos.len() != num_points {
        return Err(CurveError::ShapeMismatch {
            xpos_len: num_points,
            ypos_len: ypos.len(),
        });
    }
    if num_points < MIN_POINTS {
        return Err(CurveError::InsufficientPoints { actual: num_points });
    }
    if (num_points - 1) % 3 != 0 {
        return Err(CurveError::InvalidPointCount { actual: num_points });
    }

    for (segment, p) in xpos.windows(4).step_by(3).enumerate() {
        validate_segment(segment, p[0], p[1], p[2], p[3], tolerance)?;
    }
    Ok(())
}

fn validate_segment(
    segment: usize,
    p0: f64,
    p1: f64,
    p2: f64,
    p3: f64,
    tolerance: f64,
) -> Result<(), CurveError> {
    let width = p3 - p0;
    if width < tolerance {
        if width < 0.0 {
            return Err(CurveError::NonMonotonicOrder { segment, start: p0, end: p3 });
        }
        return Err(CurveError::DegenerateSegment { segment, width, tolerance });
    }

    // x'(t) 在 [0,1] 內不變號的充分條件
    let inner = -((p3 - p2) * (p1 - p0)).sqrt() < p2 - p1;
    let leading = p0 <= p1;
    let trailing = p2 <= p3;
    if !(inner && leading && trailing) {
        return Err(CurveError::NonMonotonicCurve { segment });
    }
    Ok(())
}
