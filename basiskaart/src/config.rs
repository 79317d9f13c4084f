//! Declarative map configuration.
//!
//! A [`MapConfig`] is a complete, serializable description of a map:
//! coordinate systems, ordered layers, the view, controls, and the name of
//! the host container. Assembly is a single synchronous pass that registers
//! the coordinate systems, checks every CRS reference, wires the layers in
//! declared order and mounts the result.
//!
//! Environment-specific values (tile service endpoints in particular) belong
//! in the configuration document, not in code.

use basiskaart_proj::{Crs, CrsRegistry, Extent, Unit};
use serde::{Deserialize, Serialize};

use crate::control::LayerSwitcher;
use crate::error::Error;
use crate::layer::Layer;
use crate::map::{Map, MapBuilder};
use crate::mount::PageHost;
use crate::view::{MapView, Point2d};

/// A coordinate system definition to register before assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsConfig {
    /// Code the system is registered under, e.g. `EPSG:28992`.
    pub code: String,
    /// PROJ definition string.
    pub definition: String,
    /// Valid extent in the system's own units.
    pub extent: Extent,
    /// Coordinate unit.
    pub unit: Unit,
}

/// View part of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Code of the view CRS. Must be one of the registered systems.
    pub crs: String,
    /// Center point in the view CRS.
    pub center: [f64; 2],
    /// Initial zoom level.
    pub zoom: u32,
    /// Lowest allowed zoom level.
    #[serde(default)]
    pub min_zoom: u32,
    /// Highest allowed zoom level.
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u32,
}

fn default_max_zoom() -> u32 {
    22
}

/// Kind of a UI control to attach.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlConfig {
    /// Layer visibility switcher.
    LayerSwitcher,
}

/// Complete description of a map, ready to be assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Coordinate systems to register, in order.
    #[serde(default)]
    pub crs: Vec<CrsConfig>,
    /// Layers in stacking order, bottom first.
    pub layers: Vec<Layer>,
    /// The view of the map.
    pub view: ViewConfig,
    /// UI controls to attach.
    #[serde(default)]
    pub controls: Vec<ControlConfig>,
    /// Name of the host container the map is mounted into.
    pub target: String,
}

impl MapConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Registers all coordinate systems of this configuration into a fresh
    /// registry.
    ///
    /// A malformed definition aborts registration: no layer or view can work
    /// without its CRS.
    pub fn build_registry(&self) -> Result<CrsRegistry, Error> {
        let mut registry = CrsRegistry::new();
        for crs in &self.crs {
            registry.register(crs.code.clone(), &crs.definition, crs.extent, crs.unit)?;
            log::info!("registered CRS {}", crs.code);
        }

        Ok(registry)
    }

    /// Assembles the map and mounts it into its target container on `host`.
    ///
    /// The pass is linear: register coordinate systems, resolve every CRS
    /// reference, stack the layers in declared order, build the view, attach
    /// controls, mount. Any failure aborts assembly; no partially wired map
    /// is returned.
    pub fn assemble(&self, host: &dyn PageHost) -> Result<Map, Error> {
        let registry = self.build_registry()?;

        for layer in &self.layers {
            if let Some(code) = layer.source.crs_code() {
                resolve(&registry, code)?;
            }
        }

        let view_crs = resolve(&registry, &self.view.crs)?.clone();
        let view = MapView::new(
            view_crs,
            Point2d::new(self.view.center[0], self.view.center[1]),
            self.view.zoom,
            self.view.min_zoom,
            self.view.max_zoom,
        );

        let mut builder = MapBuilder::default().with_view(view);
        for layer in &self.layers {
            builder = builder.with_layer(layer.clone());
        }

        for control in &self.controls {
            builder = match control {
                ControlConfig::LayerSwitcher => builder.with_control(LayerSwitcher),
            };
        }

        let map = builder.build_into(host, &self.target)?;
        log::info!(
            "assembled map with {} layers in {}",
            map.layers().len(),
            map.view().crs().code()
        );

        Ok(map)
    }
}

fn resolve<'a>(registry: &'a CrsRegistry, code: &str) -> Result<&'a Crs, Error> {
    registry
        .get(code)
        .ok_or_else(|| Error::UnknownCrs(code.to_string()))
}
