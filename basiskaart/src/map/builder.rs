use super::Map;
use crate::control::MapControl;
use crate::error::Error;
use crate::layer::Layer;
use crate::mount::{Messenger, PageHost};
use crate::view::MapView;

/// Convenience type to initialize a [`Map`].
///
/// Layers are stacked in the order they are added: the first layer is the
/// bottom of the map, the last is drawn on top.
#[derive(Default)]
pub struct MapBuilder {
    view: Option<MapView>,
    layers: Vec<Layer>,
    controls: Vec<Box<dyn MapControl>>,
    messenger: Option<Box<dyn Messenger>>,
}

impl MapBuilder {
    /// Sets the view of the map. A map has exactly one view, so a repeated
    /// call replaces the previous one.
    pub fn with_view(mut self, view: MapView) -> Self {
        self.view = Some(view);
        self
    }

    /// Adds a layer at the top of the map.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Attaches a UI control to the map.
    pub fn with_control(mut self, control: impl MapControl + 'static) -> Self {
        self.controls.push(Box::new(control));
        self
    }

    /// Sets a [messenger](Messenger) implementation for the map without
    /// mounting it on a host.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Consumes the builder and creates an unmounted map instance.
    ///
    /// Fails if no view was set: a map cannot exist without one.
    pub fn build(self) -> Result<Map, Error> {
        let Self {
            view,
            layers,
            controls,
            messenger,
        } = self;

        let view = view.ok_or_else(|| Error::Configuration("map requires a view".into()))?;

        let mut map = Map::new(view, layers, messenger);
        for control in controls {
            map.controls.push(control);
        }

        Ok(map)
    }

    /// Consumes the builder, mounts the map into the named container of the
    /// host, and returns the mounted map.
    ///
    /// Fails with [`Error::MountTargetNotFound`] if the host has no container
    /// with that name; no map instance is created in that case.
    pub fn build_into(mut self, host: &dyn PageHost, container: &str) -> Result<Map, Error> {
        let messenger = host
            .container(container)
            .ok_or_else(|| Error::MountTargetNotFound(container.to_string()))?;

        log::info!("mounting map into container {container:?}");
        self.messenger = Some(messenger);
        self.build()
    }
}
