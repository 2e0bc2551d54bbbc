use std::fs::File;
use std::io::BufReader;

use log::debug;
use serde::{
    Deserialize,
    Serialize
};

use crate::manager::manager::{
    CurveManager,
    IManager
};
use crate::manager::managererror::ManagerError;
use crate::math::curve::curveerror::CurveError;
use crate::math::rootfinding::rootfinder::RootFinderType;


/// Numerical settings shared by validation and the per-query root solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfiguration {
    /// Minimum segment width and residual tolerance of the root solver.
    tolerance: f64,
    /// Iteration cap of the root solver.
    max_iterations: usize,
    root_finder: RootFinderType,
    /// Evaluate query batches with rayon.
    parallel: bool,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        SolverConfiguration {
            tolerance: 1e-7,
            max_iterations: 100,
            root_finder: RootFinderType::default(),
            parallel: false,
        }
    }
}

impl SolverConfiguration {
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn root_finder(&self) -> RootFinderType {
        self.root_finder
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_root_finder(mut self, root_finder: RootFinderType) -> Self {
        self.root_finder = root_finder;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects settings the root solver cannot work with.
    pub fn validate(&self) -> Result<(), CurveError> {
        match self.invalid_reason() {
            Some(reason) => Err(CurveError::InvalidConfiguration { reason }),
            None => Ok(()),
        }
    }

    fn invalid_reason(&self) -> Option<String> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Some(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            ));
        }
        if self.max_iterations == 0 {
            return Some("max_iterations must be at least 1".to_owned());
        }
        None
    }
}


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    solver: SolverConfiguration,
    #[serde(default)]
    curves: Vec<serde_json::Value>
}

/// Solver settings plus the named curves of one JSON document:
///
/// ```json
/// {
///     "solver": { "tolerance": 1e-7, "max_iterations": 100,
///                 "root_finder": "newton_bisection", "parallel": false },
///     "curves": [ { "name": "ramp", "xpos": [0, 1, 2, 3], "ypos": [0, 0, 1, 1] } ]
/// }
/// ```
pub struct Configuration {
    solver_configuration: SolverConfiguration,
    curve_manager: CurveManager
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            solver_configuration: SolverConfiguration::default(),
            curve_manager: CurveManager::new()
        }
    }

    pub fn solver_configuration(&self) -> SolverConfiguration {
        self.solver_configuration
    }

    pub fn curve_manager(&self) -> &CurveManager {
        &self.curve_manager
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        debug!("loading configuration from {}", file_path);
        Self::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        if let Some(reason) = json_prop.solver.invalid_reason() {
            return Err(ManagerError::InvalidConfiguration(reason));
        }
        let curve_manager = CurveManager::new();
        curve_manager.insert_obj_from_json_vec(&json_prop.curves, &json_prop.solver)?;
        debug!(
            "configuration loaded: tolerance={}, root finder {:?}, {} curve(s)",
            json_prop.solver.tolerance(),
            json_prop.solver.root_finder(),
            curve_manager.len()
        );
        Ok(Configuration {
            solver_configuration: json_prop.solver,
            curve_manager
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_solver_configuration() {
        let config = SolverConfiguration::default();
        assert_eq!(config.tolerance(), 1e-7);
        assert_eq!(config.max_iterations(), 100);
        assert_eq!(config.root_finder(), RootFinderType::NewtonBisection);
        assert!(!config.parallel());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SolverConfiguration = serde_json::from_str(r#"{"root_finder": "brent"}"#).unwrap();
        assert_eq!(config.root_finder(), RootFinderType::Brent);
        assert_eq!(config.tolerance(), 1e-7);
        assert_eq!(config.max_iterations(), 100);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = SolverConfiguration::default().with_tolerance(0.0).validate().unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfiguration { .. }));
        let err = SolverConfiguration::default().with_tolerance(f64::NAN).validate().unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfiguration { .. }));
        let err = SolverConfiguration::default().with_tolerance(-1.0).validate().unwrap_err();
        assert!(err.to_string().contains("-1"));
        let err = SolverConfiguration::default().with_max_iterations(0).validate().unwrap_err();
        assert!(err.to_string().contains("max_iterations"));
    }

    #[test]
    fn test_from_json_str() {
        let config = Configuration::from_json_str(
            r#"{
                "solver": { "tolerance": 1e-9, "parallel": true },
                "curves": [
                    { "name": "ramp", "xpos": [0, 1, 2, 3], "ypos": [0, 0, 1, 1] }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.solver_configuration().tolerance(), 1e-9);
        assert!(config.solver_configuration().parallel());

        let curve = config.curve_manager().get("ramp").unwrap();
        assert_eq!(curve.configuration().tolerance(), 1e-9);
        let y = curve.evaluate(&[0.0, 1.5, 3.0]).unwrap();
        assert_abs_diff_eq!(y[1], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_document() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config.solver_configuration(), SolverConfiguration::default());
        assert!(config.curve_manager().is_empty());
    }

    #[test]
    fn test_invalid_solver_section() {
        let err = Configuration::from_json_str(r#"{"solver": {"max_iterations": 0}}"#).err().unwrap();
        assert!(matches!(err, ManagerError::InvalidConfiguration(ref reason) if reason.contains("max_iterations")));
    }

    #[test]
    fn test_from_reader() {
        let path = std::env::temp_dir().join(format!("bezierspline-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"curves": [{{"name": "s", "xpos": [0, 0.5, 1.5, 2], "ypos": [0, 0, 1, 1]}}]}}"#
        )
        .unwrap();
        drop(file);

        let config = Configuration::from_reader(path.to_str().unwrap()).unwrap();
        assert_eq!(config.curve_manager().names(), vec!["s".to_owned()]);
        std::fs::remove_file(&path).unwrap();

        let err = Configuration::from_reader(path.to_str().unwrap()).err().unwrap();
        assert!(matches!(err, ManagerError::IOError(_)));
    }
}
