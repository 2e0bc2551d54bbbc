use log::{
    debug,
    warn
};
use nalgebra::Point2;
use rayon::prelude::*;

use crate::configuration::SolverConfiguration;
use crate::math::curve::bezier::decasteljau::{
    de_casteljau,
    de_casteljau_derivative
};
use crate::math::curve::bezier::segmentcoefficients::{
    build_segment_coefficients,
    SegmentCoefficients
};
use crate::math::curve::bezier::segmentlocator::locate_segment;
use crate::math::curve::bezier::validator::validate;
use crate::math::curve::curve::Curve;
use crate::math::curve::curveerror::CurveError;
use crate::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
use crate::math::rootfinding::rootfinder::RootFindingError;

// ─────────────────────────────────────────────
// CubicBezierSpline
// ─────────────────────────────────────────────
//
// 控制點 xpos/ypos 長度為 1+3M，每 4 點一段、相鄰段共用端點。
// 建構時驗證並計算各段係數，之後不可變，可跨執行緒共用。

#[derive(Debug)]
pub struct CubicBezierSpline {
    xpos: Vec<f64>,
    ypos: Vec<f64>,
    segments: Vec<SegmentCoefficients>,
    configuration: SolverConfiguration,
}

impl CubicBezierSpline {
    pub fn new(xpos: Vec<f64>, ypos: Vec<f64>) -> Result<CubicBezierSpline, CurveError> {
        Self::with_configuration(xpos, ypos, SolverConfiguration::default())
    }

    pub fn with_configuration(
        xpos: Vec<f64>,
        ypos: Vec<f64>,
        configuration: SolverConfiguration,
    ) -> Result<CubicBezierSpline, CurveError> {
        configuration.validate()?;
        validate(&xpos, &ypos, configuration.tolerance())?;
        let segments = build_segment_coefficients(&xpos);
        debug!(
            "built cubic Bézier spline: {} segment(s) over [{}, {}]",
            segments.len(),
            xpos[0],
            xpos[xpos.len() - 1]
        );
        Ok(CubicBezierSpline {
            xpos,
            ypos,
            segments,
            configuration,
        })
    }

    pub fn configuration(&self) -> &SolverConfiguration {
        &self.configuration
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment_coefficients(&self) -> &[SegmentCoefficients] {
        &self.segments
    }

    fn y_control_points(&self, segment: usize) -> [f64; 4] {
        let i = 3 * segment;
        [self.ypos[i], self.ypos[i + 1], self.ypos[i + 2], self.ypos[i + 3]]
    }

    /// Segment covering `x` and the Bézier parameter t with x(t) = x.
    fn solve_parameter(&self, x: f64) -> Result<(usize, f64), CurveError> {
        let segment = locate_segment(&self.segments, x).ok_or(CurveError::OutOfRange {
            index: 0,
            x,
            min_x: self.min_x(),
            max_x: self.max_x(),
        })?;
        let polynomial = self.segments[segment].shifted_to(x);
        let t = self
            .configuration
            .root_finder()
            .find_root(
                &polynomial,
                self.configuration.tolerance(),
                self.configuration.max_iterations(),
            )
            .map_err(|error| {
                let iterations = match error {
                    RootFindingError::MaxIterationsReached { iterations } => iterations,
                    RootFindingError::Solver(_) => self.configuration.max_iterations(),
                };
                CurveError::ConvergenceFailure {
                    index: 0,
                    x,
                    iterations,
                }
            })?;
        Ok((segment, t))
    }

    /// y for a single query; errors carry query index 0.
    pub fn value_at(&self, x: f64) -> Result<f64, CurveError> {
        let (segment, t) = self.solve_parameter(x)?;
        Ok(de_casteljau(&self.y_control_points(segment), t))
    }

    /// y for every query, in query order.
    ///
    /// All or nothing: the first failing query (lowest index) aborts the
    /// whole batch, even when the batch is evaluated in parallel.
    pub fn evaluate(&self, queries: &[f64]) -> Result<Vec<f64>, CurveError> {
        let result: Result<Vec<f64>, CurveError> = if self.configuration.parallel() {
            self.evaluate_each(queries).into_iter().collect()
        } else {
            queries
                .iter()
                .enumerate()
                .map(|(i, &x)| self.value_at(x).map_err(|error| error.at_query(i)))
                .collect()
        };
        if let Err(error) = &result {
            warn!("batch of {} queries rejected: {}", queries.len(), error);
        }
        result
    }

    /// One result per query; a failing query does not affect the others.
    pub fn evaluate_each(&self, queries: &[f64]) -> Vec<Result<f64, CurveError>> {
        let evaluate_one = |(i, &x): (usize, &f64)| {
            self.value_at(x).map_err(|error| error.at_query(i))
        };
        if self.configuration.parallel() {
            queries.par_iter().enumerate().map(evaluate_one).collect()
        } else {
            queries.iter().enumerate().map(evaluate_one).collect()
        }
    }
}

// ─────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────

impl NonparametricCurve for CubicBezierSpline {
    fn control_points(&self) -> Vec<Point2<f64>> {
        self.xpos
            .iter()
            .zip(self.ypos.iter())
            .map(|(&x, &y)| Point2::new(x, y))
            .collect()
    }

    fn min_x(&self) -> f64 {
        self.xpos[0]
    }

    fn max_x(&self) -> f64 {
        self.xpos[self.xpos.len() - 1]
    }
}

impl Curve for CubicBezierSpline {
    fn value(&self, x: f64) -> Result<f64, CurveError> {
        self.value_at(x)
    }

    /// dy/dx = y'(t) / x'(t)
    fn derivative(&self, x: f64) -> Result<f64, CurveError> {
        let (segment, t) = self.solve_parameter(x)?;
        let dx = self.segments[segment].shifted_to(x).derivative(t);
        if dx == 0.0 {
            return Err(CurveError::UndefinedDerivative { x });
        }
        let dy = de_casteljau_derivative(&self.y_control_points(segment), t);
        Ok(dy / dx)
    }
}

// ─────────────────────────────────────────────
// 函數式介面
// ─────────────────────────────────────────────

/// y-values of the curve `(xpos, ypos)` at every query, default solver settings.
pub fn evaluate(xpos: &[f64], ypos: &[f64], queries: &[f64]) -> Result<Vec<f64>, CurveError> {
    evaluate_with_configuration(xpos, ypos, queries, SolverConfiguration::default())
}

pub fn evaluate_with_configuration(
    xpos: &[f64],
    ypos: &[f64],
    queries: &[f64],
    configuration: SolverConfiguration,
) -> Result<Vec<f64>, CurveError> {
    CubicBezierSpline::with_configuration(xpos.to_vec(), ypos.to_vec(), configuration)?
        .evaluate(queries)
}
