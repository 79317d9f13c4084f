use basiskaart_proj::Crs;

/// A point in projected map coordinates.
pub type Point2d = nalgebra::Point2<f64>;

/// The part of the map that is displayed: a CRS, a center point in that CRS,
/// and zoom bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    crs: Crs,
    center: Point2d,
    zoom: u32,
    min_zoom: u32,
    max_zoom: u32,
}

impl MapView {
    /// Creates a new view.
    ///
    /// The initial zoom is clamped into `[min_zoom, max_zoom]`.
    pub fn new(crs: Crs, center: Point2d, zoom: u32, min_zoom: u32, max_zoom: u32) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };

        Self {
            crs,
            center,
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// CRS of the view.
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Center of the view in the view CRS.
    pub fn center(&self) -> Point2d {
        self.center
    }

    /// Current zoom level.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Lowest allowed zoom level.
    pub fn min_zoom(&self) -> u32 {
        self.min_zoom
    }

    /// Highest allowed zoom level.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Returns a view with the center moved to the given point.
    pub fn with_center(&self, center: Point2d) -> Self {
        Self {
            center,
            ..self.clone()
        }
    }

    /// Returns a view with the zoom changed, clamped to the zoom bounds.
    pub fn with_zoom(&self, zoom: u32) -> Self {
        Self {
            zoom: zoom.clamp(self.min_zoom, self.max_zoom),
            ..self.clone()
        }
    }

    /// Returns true if the view center lies inside the CRS extent.
    pub fn center_in_extent(&self) -> bool {
        self.crs.extent().contains(self.center.x, self.center.y)
    }
}
