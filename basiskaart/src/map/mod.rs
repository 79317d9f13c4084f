//! The assembled map: one view, ordered layers, attached controls.

use crate::control::MapControl;
use crate::mount::Messenger;
use crate::view::MapView;

mod builder;
mod layer_collection;

pub use builder::MapBuilder;
pub use layer_collection::LayerCollection;

/// Map specifies a set of layers and the view that should be rendered.
///
/// A map owns exactly one [`MapView`] and renders its layers in collection
/// order. Once mounted, the messenger of the host container is asked for a
/// redraw whenever the map state changes.
pub struct Map {
    view: MapView,
    layers: LayerCollection,
    controls: Vec<Box<dyn MapControl>>,
    messenger: Option<Box<dyn Messenger>>,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("view", &self.view)
            .field("layers", &self.layers)
            .field("controls", &self.control_names())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

impl Map {
    /// Creates a new map.
    pub fn new(
        view: MapView,
        layers: impl Into<LayerCollection>,
        messenger: Option<Box<dyn Messenger>>,
    ) -> Self {
        Self {
            view,
            layers: layers.into(),
            controls: Vec::new(),
            messenger,
        }
    }

    /// Current view of the map.
    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Changes the view of the map to the given one.
    pub fn set_view(&mut self, view: MapView) {
        self.view = view;
        self.redraw();
    }

    /// Returns the list of map's layers.
    pub fn layers(&self) -> &LayerCollection {
        &self.layers
    }

    /// Returns a mutable reference to the list of map's layers.
    pub fn layers_mut(&mut self) -> &mut LayerCollection {
        &mut self.layers
    }

    /// Attaches a UI control to the map.
    pub fn add_control(&mut self, control: impl MapControl + 'static) {
        log::debug!("attaching control {:?}", control.name());
        self.controls.push(Box::new(control));
    }

    /// Names of the attached controls, in attachment order.
    pub fn control_names(&self) -> Vec<&'static str> {
        self.controls.iter().map(|control| control.name()).collect()
    }

    /// Returns true if the map is mounted on a host container.
    pub fn is_mounted(&self) -> bool {
        self.messenger.is_some()
    }

    /// Request redraw of the map.
    pub fn redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw()
        }
    }

    /// Sets the messenger of the mounted surface.
    pub fn set_messenger(&mut self, messenger: Option<Box<dyn Messenger>>) {
        self.messenger = messenger;
    }
}
