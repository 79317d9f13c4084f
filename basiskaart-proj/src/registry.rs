use ahash::HashMap;

use crate::crs::{Crs, Extent, Unit};
use crate::error::ProjError;
use crate::proj_string::ProjString;

/// Registry of coordinate reference systems addressable by code.
///
/// The registry is an explicit value rather than process-wide state, so every
/// assembler carries its own set of known systems. Registering a code that is
/// already present replaces the previous definition.
#[derive(Debug, Default)]
pub struct CrsRegistry {
    systems: HashMap<String, Crs>,
}

impl CrsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the definition and registers the CRS under the given code.
    ///
    /// Fails if the definition string is malformed or the extent is invalid.
    /// Callers are expected to treat this as fatal: nothing referencing the
    /// code can work without it.
    pub fn register(
        &mut self,
        code: impl Into<String>,
        definition: &str,
        extent: Extent,
        unit: Unit,
    ) -> Result<Crs, ProjError> {
        let code = code.into();
        let definition = ProjString::parse(definition)?;
        let crs = Crs::new(code.clone(), definition, extent, unit)?;
        self.systems.insert(code, crs.clone());
        Ok(crs)
    }

    /// Adds an already constructed CRS to the registry.
    pub fn add(&mut self, crs: Crs) {
        self.systems.insert(crs.code().to_string(), crs);
    }

    /// Looks up a CRS by code.
    pub fn get(&self, code: &str) -> Option<&Crs> {
        self.systems.get(code)
    }

    /// Returns true if the code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.systems.contains_key(code)
    }

    /// Number of registered systems.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if no systems are registered.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
