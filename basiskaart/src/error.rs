//! Error types used by the crate.

use basiskaart_proj::ProjError;
use thiserror::Error;

/// Basiskaart error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate system definition failed to parse or validate.
    #[error("coordinate system error: {0}")]
    Proj(#[from] ProjError),
    /// A layer or view refers to a CRS code that was never registered.
    #[error("unknown CRS code {0:?}")]
    UnknownCrs(String),
    /// A control refers to a layer title that is not on the map.
    #[error("no layer titled {0:?}")]
    UnknownLayer(String),
    /// The container the map should be mounted into does not exist.
    #[error("mount target {0:?} not found on the host page")]
    MountTargetNotFound(String),
    /// The map description is inconsistent.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The map description could not be deserialized.
    #[error("failed to parse map configuration")]
    ConfigFormat(#[from] serde_json::Error),
}
