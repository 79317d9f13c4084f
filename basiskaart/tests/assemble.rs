//! End-to-end assembly of a Dutch topography map over EPSG:28992.

use std::cell::RefCell;

use approx::assert_relative_eq;
use assert_matches::assert_matches;
use basiskaart::{
    Error, Layer, LayerSource, LayerSwitcher, MapConfig, Messenger, PageHost, TileIndex,
};

const DUTCH_MAP: &str = r##"{
    "crs": [{
        "code": "EPSG:28992",
        "definition": "+proj=sterea +lat_0=52.15616055555555 +lon_0=5.38763888888889 +k=0.9999079 +x_0=155000 +y_0=463000 +ellps=bessel +units=m +towgs84=565.2369,50.0087,465.658,-0.406857330322398,0.350732676542563,-1.8703473836068,4.0812 +no_defs",
        "extent": {"x_min": -285401.92, "y_min": 22598.08, "x_max": 595401.92, "y_max": 903401.92},
        "unit": "meters"
    }],
    "layers": [
        {
            "source": {
                "type": "xyz",
                "url": "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                "attribution": {
                    "text": "Tiles © ArcGIS",
                    "url": "https://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer"
                }
            },
            "title": "ArcGIS world imagery"
        },
        {
            "source": {
                "type": "vector_tile",
                "url": "http://192.168.56.101:8080/geoserver/gwc/service/tms/1.0.0/gijs%3Atopography_object@EPSG%3A28992@pbf/{z}/{x}/{-y}.pbf",
                "crs": "EPSG:28992",
                "format": "mvt"
            },
            "style": {"fill_color": "#DEFDE0", "stroke_color": "#880000", "stroke_width": 1.0},
            "title": "Vector Tile Geoserver",
            "visible": false
        },
        {
            "source": {
                "type": "vector_tile",
                "url": "http://192.168.56.101:8081/{z}/{x}/{-y}.pbf",
                "crs": "EPSG:28992",
                "format": "mvt"
            },
            "style": {"fill_color": "#FDDFDF", "stroke_color": "#880000", "stroke_width": 1.0},
            "title": "Vector Tile Python",
            "visible": false
        },
        {
            "source": {
                "type": "wms",
                "url": "http://192.168.56.101:8080/geoserver/gijs/wms",
                "layers": "gijs:topography_object",
                "tiled": true,
                "server_type": "geoserver",
                "crs": "EPSG:28992"
            },
            "title": "WMS",
            "visible": false
        }
    ],
    "view": {"crs": "EPSG:28992", "center": [92551.0, 436790.0], "zoom": 13, "min_zoom": 3, "max_zoom": 22},
    "controls": ["layer_switcher"],
    "target": "map-container"
}"##;

/// Host that records every container resolution, so tests can assert how
/// often mounting happened.
struct RecordingHost {
    containers: Vec<&'static str>,
    resolved: RefCell<Vec<String>>,
}

impl RecordingHost {
    fn with_map_container() -> Self {
        Self {
            containers: vec!["map-container"],
            resolved: RefCell::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            containers: Vec::new(),
            resolved: RefCell::new(Vec::new()),
        }
    }
}

struct NoopMessenger;

impl Messenger for NoopMessenger {
    fn request_redraw(&self) {}
}

impl PageHost for RecordingHost {
    fn container(&self, name: &str) -> Option<Box<dyn Messenger>> {
        self.resolved.borrow_mut().push(name.to_string());
        self.containers
            .contains(&name)
            .then(|| Box::new(NoopMessenger) as Box<dyn Messenger>)
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn dutch_map_assembles_and_reads_back() {
    init_logging();
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::with_map_container();
    let map = config.assemble(&host).expect("assembled map");

    let view = map.view();
    assert_relative_eq!(view.center().x, 92551.0);
    assert_relative_eq!(view.center().y, 436790.0);
    assert_eq!(view.zoom(), 13);
    assert_eq!(view.min_zoom(), 3);
    assert_eq!(view.max_zoom(), 22);
    assert_eq!(view.crs().code(), "EPSG:28992");
    assert_eq!(view.crs().definition().projection(), Some("sterea"));

    assert!(map.is_mounted());
    assert_eq!(host.resolved.borrow().as_slice(), ["map-container"]);
    assert_eq!(map.control_names(), ["layer_switcher"]);
}

#[test]
fn layer_order_matches_declaration_order() {
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::with_map_container();
    let map = config.assemble(&host).expect("assembled map");

    let titles: Vec<_> = map.layers().iter().map(Layer::title).collect();
    assert_eq!(
        titles,
        [
            "ArcGIS world imagery",
            "Vector Tile Geoserver",
            "Vector Tile Python",
            "WMS",
        ]
    );

    // Only the base layer starts visible.
    let visible: Vec<_> = map.layers().iter_visible().map(Layer::title).collect();
    assert_eq!(visible, ["ArcGIS world imagery"]);
}

#[test]
fn styles_stay_attached_to_their_layers() {
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::with_map_container();
    let map = config.assemble(&host).expect("assembled map");

    let geoserver = map
        .layers()
        .get_by_title("Vector Tile Geoserver")
        .expect("layer present");
    let python = map
        .layers()
        .get_by_title("Vector Tile Python")
        .expect("layer present");

    let geoserver_style = geoserver.style.as_ref().expect("styled layer");
    let python_style = python.style.as_ref().expect("styled layer");

    assert_eq!(geoserver_style.fill_color.to_hex(), "#DEFDE0FF");
    assert_eq!(python_style.fill_color.to_hex(), "#FDDFDFFF");
    assert_eq!(geoserver_style.stroke_color, python_style.stroke_color);
}

#[test]
fn tile_urls_resolve_without_any_io() {
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::with_map_container();
    let map = config.assemble(&host).expect("assembled map");

    let python = map
        .layers()
        .get_by_title("Vector Tile Python")
        .expect("layer present");
    let LayerSource::VectorTile(source) = &python.source else {
        panic!("expected a vector tile source");
    };

    // z = 13 has 8192 rows; the service counts them from the bottom.
    assert_eq!(
        source.tile_url(TileIndex::new(4196, 2690, 13)),
        "http://192.168.56.101:8081/13/4196/5501.pbf"
    );

    // Assembly and URL resolution only ever touched the mount container.
    assert_eq!(host.resolved.borrow().len(), 1);
}

#[test]
fn switcher_toggles_overlay_visibility() {
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::with_map_container();
    let mut map = config.assemble(&host).expect("assembled map");

    let switcher = LayerSwitcher;
    assert!(switcher.toggle(&mut map, "WMS").expect("known layer"));

    let visible: Vec<_> = map.layers().iter_visible().map(Layer::title).collect();
    assert_eq!(visible, ["ArcGIS world imagery", "WMS"]);
}

#[test]
fn missing_container_aborts_assembly() {
    init_logging();
    let config = MapConfig::from_json(DUTCH_MAP).expect("valid config");
    let host = RecordingHost::empty();

    let result = config.assemble(&host);
    assert_matches!(result, Err(Error::MountTargetNotFound(name)) if name == "map-container");
}
