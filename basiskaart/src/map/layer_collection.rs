use std::ops::{Index, IndexMut};

use crate::layer::Layer;

/// Ordered collection of the map's layers.
///
/// When a map is rendered, all visible layers are drawn in the order they are
/// stored in the collection, the last one on top. The order is fixed at
/// assembly time; hiding a layer keeps its place, so showing it again
/// restores the original stacking.
#[derive(Debug, Default, Clone)]
pub struct LayerCollection(Vec<Layer>);

impl LayerCollection {
    /// Adds the layer to the top of the stack.
    pub fn push(&mut self, layer: Layer) {
        self.0.push(layer)
    }

    /// Returns the count of layers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection contains zero layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a layer at `index`, or `None` if index is out of bounds.
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.0.get(index)
    }

    /// Returns a mutable reference to a layer at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.0.get_mut(index)
    }

    /// Index of the first layer with the given title.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.0.iter().position(|layer| layer.title() == title)
    }

    /// Returns the first layer with the given title.
    pub fn get_by_title(&self, title: &str) -> Option<&Layer> {
        self.index_of(title).and_then(|index| self.get(index))
    }

    /// Iterates over all layers in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.0.iter()
    }

    /// Iterates over visible layers in render order.
    pub fn iter_visible(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.0.iter().filter(|layer| layer.visible)
    }

    /// Sets the layer at `index` as invisible, keeping its place in the
    /// stacking order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn hide(&mut self, index: usize) {
        self.0[index].visible = false;
    }

    /// Sets the layer at `index` as visible.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn show(&mut self, index: usize) {
        self.0[index].visible = true;
    }

    /// Returns true if the layer at `index` is visible.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn is_visible(&self, index: usize) -> bool {
        self.0[index].visible
    }
}

impl Index<usize> for LayerCollection {
    type Output = Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for LayerCollection {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl From<Vec<Layer>> for LayerCollection {
    fn from(value: Vec<Layer>) -> Self {
        Self(value)
    }
}
