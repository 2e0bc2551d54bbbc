use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use log::debug;

use crate::configuration::SolverConfiguration;
use crate::math::curve::nonparametriccurve::cubicbezierspline::CubicBezierSpline;

use super::curvedefinition::CurveDefinition;
use super::managererror::ManagerError;


pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    /// Loads a single object or an array of objects from a JSON file.
    fn from_reader(&self,
                   file_path: &str,
                   supports: &S) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }
}


/// Named curves, each built once and shared read-only.
pub struct CurveManager {
    map_cell: RefCell<HashMap<String, Arc<CubicBezierSpline>>>
}


impl CurveManager {
    pub fn new() -> CurveManager {
        CurveManager { map_cell: RefCell::new(HashMap::new()) }
    }

    pub fn insert(&self, name: String, curve: CubicBezierSpline) {
        self.map().insert(name, Arc::new(curve));
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

impl Default for CurveManager {
    fn default() -> Self {
        CurveManager::new()
    }
}

impl IManager<Arc<CubicBezierSpline>, SolverConfiguration> for CurveManager {
    fn map(&self) -> RefMut<'_, HashMap<String, Arc<CubicBezierSpline>>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &SolverConfiguration) -> Result<(), ManagerError> {
        let definition: CurveDefinition = ManagerError::from_json_or_json_parse_error(json_value)?;
        let (name, curve) = definition.build(supports)?;
        debug!("registered curve '{}' with {} segment(s)", name, curve.segment_count());
        self.insert(name, curve);
        Ok(())
    }
}
