use thiserror::Error;

/// Error type of the crate.
#[derive(Debug, Error)]
pub enum ProjError {
    /// The PROJ definition string is syntactically invalid.
    #[error("invalid PROJ definition: {0}")]
    InvalidDefinition(String),
    /// The extent of a CRS is degenerate or not finite.
    #[error("invalid extent: {0}")]
    InvalidExtent(String),
}
