use serde::Deserialize;

use crate::configuration::SolverConfiguration;
use crate::manager::managererror::ManagerError;
use crate::math::curve::nonparametriccurve::cubicbezierspline::CubicBezierSpline;

/// JSON form of a named curve: `{"name": ..., "xpos": [...], "ypos": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurveDefinition {
    name: String,
    xpos: Vec<f64>,
    ypos: Vec<f64>,
}

impl CurveDefinition {
    pub fn build(
        self,
        configuration: &SolverConfiguration,
    ) -> Result<(String, CubicBezierSpline), ManagerError> {
        let CurveDefinition { name, xpos, ypos } = self;
        match CubicBezierSpline::with_configuration(xpos, ypos, *configuration) {
            Ok(curve) => Ok((name, curve)),
            Err(source) => Err(ManagerError::CurveDefinitionError { name, source }),
        }
    }
}
