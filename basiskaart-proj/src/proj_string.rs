use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ProjError;

/// Parsed PROJ4-style projection definition.
///
/// The definition is a sequence of `+key=value` parameters (value is optional
/// for flag parameters such as `+no_defs`). Parsing validates the syntax and
/// requires a non-empty `+proj` parameter; it does not check that the
/// projection is known to any transformation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjString {
    params: Vec<(String, Option<String>)>,
}

impl ProjString {
    /// Parses a PROJ definition string.
    ///
    /// Returns [`ProjError::InvalidDefinition`] if any parameter does not
    /// start with `+`, has an empty key, or if the `+proj` parameter is
    /// missing or empty.
    pub fn parse(definition: &str) -> Result<Self, ProjError> {
        let mut params = Vec::new();

        for token in definition.split_whitespace() {
            let Some(param) = token.strip_prefix('+') else {
                return Err(ProjError::InvalidDefinition(format!(
                    "parameter {token:?} does not start with '+'"
                )));
            };

            let (key, value) = match param.split_once('=') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (param, None),
            };

            if key.is_empty() {
                return Err(ProjError::InvalidDefinition(format!(
                    "parameter {token:?} has an empty key"
                )));
            }

            params.push((key.to_string(), value));
        }

        let result = Self { params };
        match result.projection() {
            Some(proj) if !proj.is_empty() => Ok(result),
            _ => Err(ProjError::InvalidDefinition(
                "missing '+proj' parameter".into(),
            )),
        }
    }

    /// Value of the `+proj` parameter.
    pub fn projection(&self) -> Option<&str> {
        self.get("proj")
    }

    /// Value of the parameter with the given key, if present and not a flag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns true if the parameter is present, with or without a value.
    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }
}

impl Display for ProjString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, (key, value)) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            match value {
                Some(value) => write!(f, "+{key}={value}")?,
                None => write!(f, "+{key}")?,
            }
        }

        Ok(())
    }
}

impl TryFrom<String> for ProjString {
    type Error = ProjError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProjString> for String {
    fn from(value: ProjString) -> Self {
        value.to_string()
    }
}
