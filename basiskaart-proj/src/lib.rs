//! Coordinate reference system descriptors for the `basiskaart` map toolkit.
//!
//! A [`Crs`] pairs a code (such as `EPSG:28992`) with a parsed PROJ
//! definition string, a valid extent in the system's own units, and the unit
//! itself. Definitions are validated at parse time; everything after that is
//! an immutable value. The [`CrsRegistry`] keeps registered systems
//! addressable by code without resorting to process-wide state.

mod crs;
mod error;
mod proj_string;
mod registry;

pub use crs::{Crs, Extent, Unit};
pub use error::ProjError;
pub use proj_string::ProjString;
pub use registry::CrsRegistry;
