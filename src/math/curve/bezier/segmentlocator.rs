use crate::math::curve::bezier::segmentcoefficients::SegmentCoefficients;

/// Index of the first segment with `lhs_x <= x <= rhs_x`.
///
/// Anchors are strictly increasing once the curve has been validated, so the
/// first segment whose closing anchor reaches `x` is the only candidate; a
/// query on a shared anchor resolves to the lower segment. NaN never matches.
pub fn locate_segment(segments: &[SegmentCoefficients], x: f64) -> Option<usize> {
    let i = segments.partition_point(|s| s.rhs_x() < x);
    segments
        .get(i)
        .filter(|s| s.lhs_x() <= x && x <= s.rhs_x())
        .map(|_| i)
}
