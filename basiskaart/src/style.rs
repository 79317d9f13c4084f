use serde::{Deserialize, Serialize};

use crate::Color;

/// Style of a vector layer: how polygon fills and outlines are painted.
///
/// Styles are plain values attached one-to-one to layers; the downstream
/// renderer interprets them when features are actually drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStyle {
    /// Fill color of polygon features.
    pub fill_color: Color,
    /// Color of feature outlines.
    pub stroke_color: Color,
    /// Width of feature outlines in pixels.
    pub stroke_width: f64,
}

impl VectorStyle {
    /// Creates a new style.
    pub fn new(fill_color: Color, stroke_color: Color, stroke_width: f64) -> Self {
        Self {
            fill_color,
            stroke_color,
            stroke_width,
        }
    }
}

impl Default for VectorStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::TRANSPARENT,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json() {
        let style: VectorStyle = serde_json::from_str(
            r##"{"fill_color": "#FDDFDF", "stroke_color": "#880000", "stroke_width": 1.0}"##,
        )
        .expect("valid style");

        assert_eq!(style.fill_color, Color::rgba(0xFD, 0xDF, 0xDF, 255));
        assert_eq!(style.stroke_color, Color::rgba(0x88, 0, 0, 255));
        assert_eq!(style.stroke_width, 1.0);
    }

    #[test]
    fn invalid_color_fails_deserialization() {
        let result: Result<VectorStyle, _> = serde_json::from_str(
            r##"{"fill_color": "FDDFDF", "stroke_color": "#880000", "stroke_width": 1.0}"##,
        );
        assert!(result.is_err());
    }
}
