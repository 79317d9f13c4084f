//! Map UI controls.
//!
//! Controls are small adapters a UI toolkit drives to change map state. The
//! map stores attached controls as trait objects; the only control shipped
//! with the crate is the [`LayerSwitcher`].

use crate::error::Error;
use crate::map::Map;

/// A UI control attached to a map.
pub trait MapControl {
    /// Identifier of the control kind.
    fn name(&self) -> &'static str;
}

/// State of one layer as listed by the [`LayerSwitcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerToggle {
    /// Title of the layer.
    pub title: String,
    /// Current visibility.
    pub visible: bool,
}

/// Control that lists the map's layers and toggles their visibility.
///
/// The switcher holds no state of its own; it always reflects the layer
/// collection of the map it is applied to.
#[derive(Debug, Default, Copy, Clone)]
pub struct LayerSwitcher;

impl MapControl for LayerSwitcher {
    fn name(&self) -> &'static str {
        "layer_switcher"
    }
}

impl LayerSwitcher {
    /// Lists all layers of the map in render order with their visibility.
    pub fn entries(&self, map: &Map) -> Vec<LayerToggle> {
        map.layers()
            .iter()
            .map(|layer| LayerToggle {
                title: layer.title().to_string(),
                visible: layer.visible,
            })
            .collect()
    }

    /// Flips visibility of the layer with the given title and returns the
    /// new state.
    pub fn toggle(&self, map: &mut Map, title: &str) -> Result<bool, Error> {
        let layers = map.layers_mut();
        let index = layers
            .index_of(title)
            .ok_or_else(|| Error::UnknownLayer(title.to_string()))?;

        let visible = !layers.is_visible(index);
        if visible {
            layers.show(index);
        } else {
            layers.hide(index);
        }

        log::debug!("layer {title:?} visibility set to {visible}");
        map.redraw();
        Ok(visible)
    }

    /// Sets visibility of the layer with the given title.
    pub fn set_visible(&self, map: &mut Map, title: &str, visible: bool) -> Result<(), Error> {
        let layers = map.layers_mut();
        let index = layers
            .index_of(title)
            .ok_or_else(|| Error::UnknownLayer(title.to_string()))?;

        if visible {
            layers.show(index);
        } else {
            layers.hide(index);
        }

        map.redraw();
        Ok(())
    }
}
