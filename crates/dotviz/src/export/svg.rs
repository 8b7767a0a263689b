//! SVG markup emitter.
//!
//! Document structure, in drawing order:
//!
//! ```text
//! <svg width=W height=H viewBox="0 0 W H">
//!   <rect/>                     background
//!   <g class="edges">
//!     <g class="edge"> path, [polygon], [text] </g> ...
//!   </g>
//!   <g class="nodes">
//!     <g class="node"> shape, text </g> ...
//!   </g>
//! </svg>
//! ```

use log::{debug, trace};
use svg::node::{self, element as svg_element};

use dotviz_core::{
    geometry::Point,
    graph::{Edge, Node},
    shape::{self, NodeShape},
};

use super::{Exporter, Scene};
use crate::{config::AppConfig, routing::EdgeGeometry};

const EDGE_COLOR: &str = "black";
const EDGE_STROKE_WIDTH: f32 = 1.5;
const DEFAULT_NODE_FILL: &str = "#e3f2fd";
const DEFAULT_NODE_STROKE: &str = "#2196f3";
const FONT_SIZE: f32 = 12.0;

/// Offset that roughly centers a node label vertically on the node.
const NODE_LABEL_BASELINE: f32 = 5.0;

/// Emits SVG documents for laid-out graphs.
#[derive(Debug, Clone, Default)]
pub struct SvgEmitter {
    config: AppConfig,
}

impl SvgEmitter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn render_background(&self, scene: &Scene<'_>) -> svg_element::Rectangle {
        let background = scene
            .graph()
            .attributes()
            .get("bgcolor")
            .unwrap_or_else(|| self.config.style().background_color());

        svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", attribute_value(background))
    }

    fn render_edge(&self, edge: &Edge, geometry: &EdgeGeometry) -> svg_element::Group {
        let start = geometry.start();
        let end = geometry.end();

        let mut group = svg_element::Group::new().set("class", "edge").add(
            svg_element::Path::new()
                .set(
                    "d",
                    format!("M{},{} L{},{}", start.x(), start.y(), end.x(), end.y()),
                )
                .set("stroke", EDGE_COLOR)
                .set("stroke-width", EDGE_STROKE_WIDTH),
        );

        if let Some(arrowhead) = geometry.arrowhead() {
            group = group.add(
                svg_element::Polygon::new()
                    .set("points", shape::points_attribute(&arrowhead.points()))
                    .set("fill", EDGE_COLOR),
            );
        }

        if let (Some(label), Some(anchor)) = (edge.label(), geometry.label_anchor()) {
            group = group.add(text_element(label, anchor));
        }

        group
    }

    fn render_node(&self, node: &Node, center: Point) -> svg_element::Group {
        let attributes = node.attributes();
        let fill = attributes
            .get("fillcolor")
            .or_else(|| attributes.get("color"))
            .unwrap_or(DEFAULT_NODE_FILL);
        let stroke = attributes.get("color").unwrap_or(DEFAULT_NODE_STROKE);
        let shape = NodeShape::from_attribute(attributes.get("shape"));

        trace!(node_id = node.id(), shape:?; "Rendering node");

        let label_anchor = Point::new(center.x(), center.y() + NODE_LABEL_BASELINE);
        svg_element::Group::new()
            .set("class", "node")
            .add(shape.render_to_svg(
                center,
                self.config.style().node_radius(),
                &attribute_value(fill),
                &attribute_value(stroke),
            ))
            .add(text_element(node.label(), label_anchor))
    }
}

impl Exporter for SvgEmitter {
    fn export(&self, scene: &Scene<'_>) -> String {
        let canvas = self.config.canvas().size();

        let mut edges = svg_element::Group::new().set("class", "edges");
        let mut drawn_edges = 0;
        for (edge, geometry) in scene.graph().edges().iter().zip(scene.edge_geometries()) {
            if let Some(geometry) = geometry {
                edges = edges.add(self.render_edge(edge, geometry));
                drawn_edges += 1;
            }
        }

        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for node in scene.graph().nodes() {
            if let Some(center) = scene.position(node.id()) {
                nodes = nodes.add(self.render_node(node, center));
            }
        }

        debug!(
            node_count = scene.graph().node_count(),
            drawn_edges,
            skipped_edges = scene.graph().edge_count() - drawn_edges;
            "Emitting SVG document"
        );

        svg::Document::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("viewBox", canvas.view_box())
            .add(self.render_background(scene))
            .add(edges)
            .add(nodes)
            .to_string()
    }
}

/// Centered 12px text whose baseline sits at `anchor`.
fn text_element(content: &str, anchor: Point) -> svg_element::Text {
    svg_element::Text::new("")
        .set("x", anchor.x())
        .set("y", anchor.y())
        .set("text-anchor", "middle")
        .set("font-size", FONT_SIZE)
        .add(node::Text::new(content))
}

/// Strips characters that would break out of a quoted attribute value.
///
/// Attribute values come straight from user input (colors), and none of the
/// removed characters can appear in a valid color.
fn attribute_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '<' | '>' | '&'))
        .collect()
}
