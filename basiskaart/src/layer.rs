//! Layers pair a data [source](LayerSource) with presentation and metadata.

use serde::{Deserialize, Serialize};

use crate::source::{Attribution, LayerSource};
use crate::style::VectorStyle;

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// A layer of the map: a data source plus how and whether it is shown.
///
/// Layers are plain values constructed synchronously; building one performs
/// no I/O and no validation beyond what its parts already guarantee. A layer
/// does not know its place in the map: render order is owned by the
/// [`LayerCollection`](crate::LayerCollection) it is pushed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Where the layer data comes from.
    pub source: LayerSource,
    /// Style of vector features. Ignored by renderers for raster sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<VectorStyle>,
    /// Human readable title, shown by the layer switcher.
    pub title: String,
    /// Whether the layer is initially visible.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Opacity of the layer, `0.0..=1.0`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Layer {
    /// Creates a visible, fully opaque layer.
    pub fn new(source: LayerSource, title: impl Into<String>) -> Self {
        Self {
            source,
            style: None,
            title: title.into(),
            visible: true,
            opacity: 1.0,
        }
    }

    /// Attaches a style to the layer.
    pub fn with_style(mut self, style: VectorStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets initial visibility of the layer.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the opacity of the layer, clamped to `0.0..=1.0`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Attribution of the layer's data source, if available.
    pub fn attribution(&self) -> Option<&Attribution> {
        match &self.source {
            LayerSource::Xyz(xyz) => xyz.attribution.as_ref(),
            _ => None,
        }
    }

    /// Title of the layer.
    pub fn title(&self) -> &str {
        &self.title
    }
}
