use bezierspline::{
    evaluate,
    CubicBezierSpline,
    CurveError
};

#[test]
fn test_shape_mismatch() {
    let err = evaluate(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0]).unwrap_err();
    assert_eq!(err, CurveError::ShapeMismatch { xpos_len: 4, ypos_len: 5 });
}

#[test]
fn test_insufficient_points() {
    let err = evaluate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, CurveError::InsufficientPoints { actual: 3 });
}

#[test]
fn test_invalid_point_count() {
    let xpos = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let err = evaluate(&xpos, &xpos, &[1.0]).unwrap_err();
    assert_eq!(err, CurveError::InvalidPointCount { actual: 6 });
}

#[test]
fn test_reversed_curve() {
    let xpos = [3.0, 2.0, 1.0, 0.0];
    let err = evaluate(&xpos, &[0.0, 0.0, 1.0, 1.0], &[1.5]).unwrap_err();
    assert!(matches!(err, CurveError::NonMonotonicOrder { segment: 0, .. }));
}

#[test]
fn test_degenerate_segment() {
    let err = CubicBezierSpline::new(vec![1.0, 1.0, 1.0, 1.00000005], vec![0.0; 4]).err().unwrap();
    assert!(matches!(err, CurveError::DegenerateSegment { segment: 0, .. }));
}

#[test]
fn test_non_monotonic_curve_rejected_for_every_query() {
    let xpos = [0.0, 1.0, 2.0, 1.0];
    let ypos = [0.0, 0.0, 1.0, 1.0];
    for queries in [vec![0.5], vec![-10.0], vec![], vec![0.1, 0.2, 0.3]] {
        let err = evaluate(&xpos, &ypos, &queries).unwrap_err();
        assert_eq!(err, CurveError::NonMonotonicCurve { segment: 0 });
        assert!(err.is_validation_error());
    }
}

#[test]
fn test_second_segment_violation_is_located() {
    let xpos = [0.0, 1.0, 2.0, 3.0, 5.0, 2.0, 6.0];
    let err = evaluate(&xpos, &[0.0; 7], &[1.0]).unwrap_err();
    assert_eq!(err, CurveError::NonMonotonicCurve { segment: 1 });
    assert!(err.to_string().contains("segment 1"));
}
