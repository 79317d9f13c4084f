//! Host page abstraction the assembled map is mounted into.

/// Redraw handle of a mounted map surface.
///
/// The renderer that owns the surface implements this to be notified when the
/// map state changes and the surface should be repainted.
pub trait Messenger {
    /// Request redraw of the map.
    fn request_redraw(&self);
}

/// Messenger that does nothing. Useful for tests and headless assembly.
#[derive(Debug, Default, Copy, Clone)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}

/// The page (or window shell) hosting map containers.
///
/// Containers are addressed by name. Resolving a container yields the redraw
/// messenger of the surface mounted there; a `None` means the container does
/// not exist, which is fatal for assembly.
pub trait PageHost {
    /// Resolves the container with the given name.
    fn container(&self, name: &str) -> Option<Box<dyn Messenger>>;
}
