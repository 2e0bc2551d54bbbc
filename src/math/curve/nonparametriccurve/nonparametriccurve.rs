use nalgebra::Point2;

/// Curve defined directly by its control points.
pub trait NonparametricCurve {
    fn control_points(&self) -> Vec<Point2<f64>>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    fn contains(&self, x: f64) -> bool {
        self.min_x() <= x && x <= self.max_x()
    }
}
