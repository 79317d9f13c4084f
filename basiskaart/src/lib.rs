//! Basiskaart assembles interactive maps from declarative descriptions.
//!
//! A map here is a [`MapView`] bound to a coordinate reference system plus an
//! ordered set of [`layers`](Layer): raster tiles addressed by XYZ templates,
//! WMS endpoints, or MVT vector-tile services. The crate wires these together
//! and mounts the result on a host container; it never fetches, decodes or
//! renders anything itself. That split lets the same description drive any
//! renderer while keeping assembly synchronous and testable.
//!
//! # Quick start
//!
//! ```no_run
//! use basiskaart::{Layer, LayerSource, MapBuilder, MapView, XyzSource};
//! use basiskaart_proj::{CrsRegistry, Extent, Unit};
//!
//! let mut registry = CrsRegistry::new();
//! let crs = registry.register(
//!     "EPSG:3857",
//!     "+proj=merc +a=6378137 +b=6378137 +units=m +no_defs",
//!     Extent::new(-20037508.34, -20037508.34, 20037508.34, 20037508.34),
//!     Unit::Meters,
//! )?;
//!
//! let base = Layer::new(
//!     LayerSource::Xyz(XyzSource::new(
//!         "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
//!     )),
//!     "OpenStreetMap",
//! );
//!
//! let map = MapBuilder::default()
//!     .with_view(MapView::new(crs, [0.0, 0.0].into(), 4, 0, 18))
//!     .with_layer(base)
//!     .build()?;
//! # Ok::<(), basiskaart::Error>(())
//! ```
//!
//! The full wiring, including CRS registration and mounting, can also be
//! driven from a JSON document through [`MapConfig`].

mod color;
pub mod config;
pub mod control;
mod error;
mod layer;
mod map;
mod mount;
mod source;
mod style;
mod tiles;
mod view;

pub use color::Color;
pub use config::MapConfig;
pub use control::{LayerSwitcher, LayerToggle, MapControl};
pub use error::Error;
pub use layer::Layer;
pub use map::{LayerCollection, Map, MapBuilder};
pub use mount::{DummyMessenger, Messenger, PageHost};
pub use source::{
    Attribution, LayerSource, ServerType, TileFormat, VectorTileSource, WmsSource, XyzSource,
};
pub use style::VectorStyle;
pub use tiles::TileIndex;
pub use view::{MapView, Point2d};

// Reexport the CRS crate the same way downstream users need it.
pub use basiskaart_proj;
