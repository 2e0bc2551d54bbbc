use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::math::curve::curveerror::CurveError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("curve '{name}': {source}")]
    CurveDefinitionError {
        name: String,
        #[source]
        source: CurveError,
    },
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}
