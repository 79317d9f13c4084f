//! Layer source descriptors: where a layer's data comes from.
//!
//! Sources are pure values. Resolving a tile or request URL is string
//! substitution only; no network access happens until a downstream renderer
//! decides to fetch something.

use basiskaart_proj::Extent;
use serde::{Deserialize, Serialize};

use crate::tiles::TileIndex;

/// Attribution of a data source, shown to the user by map UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    text: String,
    url: Option<String>,
}

impl Attribution {
    /// Creates a new attribution with the given text and optional URL.
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// Attribution text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// URL with more information about the source, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Encoding of tiles served by a vector tile source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileFormat {
    /// Mapbox Vector Tiles.
    Mvt,
}

/// Type of the server behind a WMS endpoint.
///
/// The tag selects request-encoding quirks; everything else about the WMS
/// protocol is identical between servers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerType {
    /// GeoServer. Honors the vendor `TILED` parameter and `FORMAT_OPTIONS`
    /// dpi hints.
    Geoserver,
    /// MapServer.
    Mapserver,
    /// QGIS server.
    Qgis,
    /// Any other WMS implementation.
    Generic,
}

/// Data origin of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerSource {
    /// Prerendered raster tiles addressed by a `{z}/{x}/{y}` URL template.
    Xyz(XyzSource),
    /// A WMS endpoint queried with GetMap requests.
    Wms(WmsSource),
    /// MVT-encoded vector tiles addressed by a URL template.
    VectorTile(VectorTileSource),
}

impl LayerSource {
    /// Code of the CRS the source serves its data in, if it declares one.
    ///
    /// XYZ sources are served in the CRS of the tile grid the template
    /// implies and do not carry an explicit reference.
    pub fn crs_code(&self) -> Option<&str> {
        match self {
            LayerSource::Xyz(_) => None,
            LayerSource::Wms(wms) => Some(&wms.crs),
            LayerSource::VectorTile(vt) => Some(&vt.crs),
        }
    }

    /// Returns true for sources that serve vector features.
    pub fn is_vector(&self) -> bool {
        matches!(self, LayerSource::VectorTile(_))
    }
}

/// Source of prerendered raster tiles addressed by zoom/x/y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyzSource {
    /// URL template with `{z}`, `{x}`, `{y}` or `{-y}` placeholders.
    pub url: String,
    /// Attribution of the tile data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

impl XyzSource {
    /// Creates a source from a URL template.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            attribution: None,
        }
    }

    /// Sets the attribution of the source.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Resolves the URL of the tile with the given index.
    pub fn tile_url(&self, index: TileIndex) -> String {
        substitute_index(&self.url, index)
    }
}

/// Source requesting rendered map images from a WMS endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsSource {
    /// Base URL of the WMS service.
    pub url: String,
    /// Value of the `LAYERS` request parameter.
    pub layers: String,
    /// Whether to send the vendor `TILED` parameter, asking the server to use
    /// its tile cache.
    #[serde(default)]
    pub tiled: bool,
    /// Kind of server behind the endpoint.
    pub server_type: ServerType,
    /// Code of the CRS the images are requested in.
    pub crs: String,
}

impl WmsSource {
    /// Creates a new WMS source.
    pub fn new(
        url: impl Into<String>,
        layers: impl Into<String>,
        server_type: ServerType,
        crs: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            layers: layers.into(),
            tiled: false,
            server_type,
            crs: crs.into(),
        }
    }

    /// Requests the server to serve images through its tile cache.
    pub fn with_tiled(mut self) -> Self {
        self.tiled = true;
        self
    }

    /// Builds a GetMap request URL for the given bounding box and image size.
    ///
    /// `pixel_ratio` above 1.0 requests HiDPI output; only GeoServer
    /// understands the dpi hint, other server types ignore it.
    pub fn get_map_url(&self, bbox: Extent, width: u32, height: u32, pixel_ratio: f64) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{}{}SERVICE=WMS&VERSION=1.3.0&REQUEST=GetMap&LAYERS={}&CRS={}&BBOX={},{},{},{}&WIDTH={}&HEIGHT={}&FORMAT=image%2Fpng&TRANSPARENT=true",
            self.url,
            separator,
            escape_query_value(&self.layers),
            escape_query_value(&self.crs),
            bbox.x_min,
            bbox.y_min,
            bbox.x_max,
            bbox.y_max,
            width,
            height,
        );

        if self.tiled {
            url.push_str("&TILED=true");
        }

        if self.server_type == ServerType::Geoserver && pixel_ratio != 1.0 {
            let dpi = (90.0 * pixel_ratio).round();
            url.push_str(&format!("&FORMAT_OPTIONS=dpi%3A{dpi}"));
        }

        url
    }
}

/// Source of MVT-encoded vector tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorTileSource {
    /// URL template with `{z}`, `{x}`, `{y}` or `{-y}` placeholders.
    ///
    /// Percent-escaped path segments (`%3A`, `%3D`) are kept verbatim, as
    /// used by GeoServer GWC/TMS endpoints.
    pub url: String,
    /// Code of the CRS of the tile grid.
    pub crs: String,
    /// Encoding of the tiles.
    pub format: TileFormat,
}

impl VectorTileSource {
    /// Creates a new MVT source from a URL template.
    pub fn new(url: impl Into<String>, crs: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            crs: crs.into(),
            format: TileFormat::Mvt,
        }
    }

    /// Resolves the URL of the tile with the given index.
    pub fn tile_url(&self, index: TileIndex) -> String {
        substitute_index(&self.url, index)
    }
}

/// Substitutes `{z}`, `{x}`, `{y}` and `{-y}` placeholders in a URL template.
///
/// Unknown placeholders are left in place; the downstream renderer rejects
/// them when a fetch is actually attempted.
fn substitute_index(template: &str, index: TileIndex) -> String {
    template
        .replace("{z}", &index.z.to_string())
        .replace("{x}", &index.x.to_string())
        .replace("{-y}", &index.flipped_y().to_string())
        .replace("{y}", &index.y.to_string())
}

fn escape_query_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ':' => escaped.push_str("%3A"),
            '=' => escaped.push_str("%3D"),
            '&' => escaped.push_str("%26"),
            '?' => escaped.push_str("%3F"),
            '#' => escaped.push_str("%23"),
            ' ' => escaped.push_str("%20"),
            other => escaped.push(other),
        }
    }

    escaped
}
