use serde::{Deserialize, Serialize};

use crate::error::ProjError;
use crate::proj_string::ProjString;

/// Bounding box of a CRS in its own units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Minimum X coordinate.
    pub x_min: f64,
    /// Minimum Y coordinate.
    pub y_min: f64,
    /// Maximum X coordinate.
    pub x_max: f64,
    /// Maximum Y coordinate.
    pub y_max: f64,
}

impl Extent {
    /// Creates a new extent.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns true if the point is inside the extent.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    fn validate(&self) -> Result<(), ProjError> {
        let values = [self.x_min, self.y_min, self.x_max, self.y_max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ProjError::InvalidExtent(format!(
                "extent has non-finite bounds: {self:?}"
            )));
        }

        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(ProjError::InvalidExtent(format!(
                "extent is degenerate: {self:?}"
            )));
        }

        Ok(())
    }
}

/// Measurement unit of CRS coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Projected coordinates in meters.
    Meters,
    /// Geographic coordinates in degrees.
    Degrees,
    /// Projected coordinates in feet.
    Feet,
}

/// A named coordinate reference system.
///
/// Created once, never mutated. Layers and views refer to a CRS by its code
/// through a [`CrsRegistry`](crate::CrsRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    code: String,
    definition: ProjString,
    extent: Extent,
    unit: Unit,
}

impl Crs {
    /// Creates a CRS from an already parsed definition.
    pub fn new(
        code: impl Into<String>,
        definition: ProjString,
        extent: Extent,
        unit: Unit,
    ) -> Result<Self, ProjError> {
        extent.validate()?;

        Ok(Self {
            code: code.into(),
            definition,
            extent,
            unit,
        })
    }

    /// Code of the CRS, e.g. `EPSG:28992`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Parsed PROJ definition of the CRS.
    pub fn definition(&self) -> &ProjString {
        &self.definition
    }

    /// Valid extent of the CRS in its own units.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Coordinate unit of the CRS.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn web_mercator_definition() -> ProjString {
        ProjString::parse("+proj=merc +a=6378137 +b=6378137 +units=m +no_defs")
            .expect("valid definition")
    }

    #[test]
    fn crs_exposes_its_parts() {
        let extent = Extent::new(
            -20037508.342787,
            -20037508.342787,
            20037508.342787,
            20037508.342787,
        );
        let crs = Crs::new("EPSG:3857", web_mercator_definition(), extent, Unit::Meters)
            .expect("valid CRS");

        assert_eq!(crs.code(), "EPSG:3857");
        assert_eq!(crs.definition().projection(), Some("merc"));
        assert_eq!(crs.extent(), extent);
        assert_eq!(crs.unit(), Unit::Meters);
    }

    #[test]
    fn extent_containment() {
        let extent = Extent::new(-285401.92, 22598.08, 595401.92, 903401.92);
        assert!(extent.contains(92551.0, 436790.0));
        assert!(!extent.contains(-300000.0, 436790.0));
    }

    #[test]
    fn extent_dimensions() {
        let extent = Extent::new(-285401.92, 22598.08, 595401.92, 903401.92);
        assert_relative_eq!(extent.width(), 880803.84, epsilon = 1e-6);
        assert_relative_eq!(extent.height(), 880803.84, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_extent_is_rejected() {
        let result = Crs::new(
            "EPSG:3857",
            web_mercator_definition(),
            Extent::new(10.0, 0.0, -10.0, 20.0),
            Unit::Meters,
        );
        assert_matches!(result, Err(ProjError::InvalidExtent(_)));

        let result = Crs::new(
            "EPSG:3857",
            web_mercator_definition(),
            Extent::new(0.0, f64::NAN, 10.0, 20.0),
            Unit::Meters,
        );
        assert_matches!(result, Err(ProjError::InvalidExtent(_)));
    }
}
