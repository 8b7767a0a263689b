//! Node shapes and their SVG outlines.
//!
//! The `shape` attribute selects one of three outlines, all sized from a
//! single node radius so that edges can be clipped uniformly:
//!
//! ```text
//!   Rectangle          Diamond            Ellipse
//!   ╭───────╮            /\                .-─-.
//!   │   +   │ 2r        /  \ 1.4r         /  +  \ r
//!   ╰───────╯          <  +  >            \     /
//!                       \  /               `-─-'
//!                        \/
//! ```

use svg::node::element as svg_element;

use crate::geometry::Point;

/// Stroke width shared by every node outline.
pub const NODE_STROKE_WIDTH: f32 = 1.5;

/// Corner radius of rectangular nodes.
const RECTANGLE_CORNER_RADIUS: f32 = 3.0;

/// Half-diagonal of a diamond relative to the node radius.
const DIAMOND_SCALE: f32 = 1.4;

/// The outline drawn for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    /// Rounded square with side `2 * radius`.
    Rectangle,
    /// Rhombus with half-diagonal `1.4 * radius`.
    Diamond,
    /// Circle of the node radius. Used for unknown shape names as well.
    #[default]
    Ellipse,
}

impl NodeShape {
    /// Maps a `shape` attribute value to an outline.
    ///
    /// `box`, `rect` and `rectangle` are rectangles, `diamond` is a diamond,
    /// anything else (including no value) is an ellipse.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotviz_core::shape::NodeShape;
    ///
    /// assert_eq!(NodeShape::from_attribute(Some("box")), NodeShape::Rectangle);
    /// assert_eq!(NodeShape::from_attribute(Some("diamond")), NodeShape::Diamond);
    /// assert_eq!(NodeShape::from_attribute(Some("hexagon")), NodeShape::Ellipse);
    /// assert_eq!(NodeShape::from_attribute(None), NodeShape::Ellipse);
    /// ```
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("box" | "rect" | "rectangle") => NodeShape::Rectangle,
            Some("diamond") => NodeShape::Diamond,
            _ => NodeShape::Ellipse,
        }
    }

    /// Draws the outline centered on `center`.
    pub fn render_to_svg(
        self,
        center: Point,
        radius: f32,
        fill: &str,
        stroke: &str,
    ) -> Box<dyn svg::Node> {
        match self {
            NodeShape::Rectangle => svg_element::Rectangle::new()
                .set("x", center.x() - radius)
                .set("y", center.y() - radius)
                .set("width", radius * 2.0)
                .set("height", radius * 2.0)
                .set("rx", RECTANGLE_CORNER_RADIUS)
                .set("ry", RECTANGLE_CORNER_RADIUS)
                .set("fill", fill)
                .set("stroke", stroke)
                .set("stroke-width", NODE_STROKE_WIDTH)
                .into(),
            NodeShape::Diamond => {
                let half = radius * DIAMOND_SCALE;
                let corners = [
                    Point::new(center.x(), center.y() - half),
                    Point::new(center.x() + half, center.y()),
                    Point::new(center.x(), center.y() + half),
                    Point::new(center.x() - half, center.y()),
                ];
                svg_element::Polygon::new()
                    .set("points", points_attribute(&corners))
                    .set("fill", fill)
                    .set("stroke", stroke)
                    .set("stroke-width", NODE_STROKE_WIDTH)
                    .into()
            }
            NodeShape::Ellipse => svg_element::Ellipse::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("rx", radius)
                .set("ry", radius)
                .set("fill", fill)
                .set("stroke", stroke)
                .set("stroke-width", NODE_STROKE_WIDTH)
                .into(),
        }
    }
}

/// Formats points for an SVG `points` attribute: `x1,y1 x2,y2 ...`.
///
/// # Examples
///
/// ```
/// use dotviz_core::{geometry::Point, shape::points_attribute};
///
/// let points = [Point::new(1.0, 2.0), Point::new(3.5, 4.0)];
/// assert_eq!(points_attribute(&points), "1,2 3.5,4");
/// ```
pub fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect::<Vec<_>>()
        .join(" ")
}
