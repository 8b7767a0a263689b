//! Edge geometry.
//!
//! Edges are straight segments between node centers, shortened at both ends
//! by the node radius so they meet the node outline instead of its center.
//! Directed edges get a triangular arrowhead at the target end, labelled
//! edges get a text anchor above the segment midpoint.

use std::f32::consts::FRAC_PI_6;

use log::debug;

use dotviz_core::geometry::Point;

use crate::config::StyleConfig;

/// Vertical distance between an edge label's baseline and the segment.
const LABEL_OFFSET: f32 = 5.0;

/// Triangle drawn at the target end of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    tip: Point,
    left: Point,
    right: Point,
}

impl Arrowhead {
    /// Builds an arrowhead pointing along `angle` with its tip at `tip`.
    ///
    /// The two base corners sit `size` behind the tip, each turned π/6 away
    /// from the edge direction.
    fn new(tip: Point, angle: f32, size: f32) -> Self {
        Self {
            tip,
            left: tip.polar_offset(-size, angle - FRAC_PI_6),
            right: tip.polar_offset(-size, angle + FRAC_PI_6),
        }
    }

    /// Corners in drawing order: tip, then the two base corners.
    pub fn points(&self) -> [Point; 3] {
        [self.tip, self.left, self.right]
    }
}

/// Drawable geometry of a single edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGeometry {
    start: Point,
    end: Point,
    arrowhead: Option<Arrowhead>,
    label_anchor: Option<Point>,
}

impl EdgeGeometry {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Present for directed edges only.
    pub fn arrowhead(&self) -> Option<&Arrowhead> {
        self.arrowhead.as_ref()
    }

    /// Baseline center for the edge label, present when the edge has one.
    pub fn label_anchor(&self) -> Option<Point> {
        self.label_anchor
    }
}

/// Computes [`EdgeGeometry`] from node positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRouter {
    node_radius: f32,
    arrow_size: f32,
}

impl Default for EdgeRouter {
    fn default() -> Self {
        Self::from_style(&StyleConfig::default())
    }
}

impl EdgeRouter {
    pub fn new(node_radius: f32, arrow_size: f32) -> Self {
        Self {
            node_radius,
            arrow_size,
        }
    }

    pub fn from_style(style: &StyleConfig) -> Self {
        Self::new(style.node_radius(), style.arrow_size())
    }

    /// Routes an edge between two node centers.
    ///
    /// Returns `None` when both centers coincide, which is always the case
    /// for a self-loop; such edges are not drawn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotviz::routing::EdgeRouter;
    /// # use dotviz_core::geometry::Point;
    /// let router = EdgeRouter::default();
    /// let geometry = router
    ///     .route(Point::new(0.0, 0.0), Point::new(100.0, 0.0), true, false)
    ///     .unwrap();
    ///
    /// assert_eq!(geometry.start(), Point::new(20.0, 0.0));
    /// assert_eq!(geometry.end(), Point::new(80.0, 0.0));
    /// assert!(geometry.arrowhead().is_some());
    /// ```
    pub fn route(
        &self,
        source: Point,
        target: Point,
        directed: bool,
        has_label: bool,
    ) -> Option<EdgeGeometry> {
        let length = source.distance(target);
        if length == 0.0 || !length.is_finite() {
            debug!(x = source.x(), y = source.y(); "Skipping zero-length edge");
            return None;
        }

        let start = source.move_toward(target, self.node_radius);
        let end = target.move_toward(source, self.node_radius);

        let direction = target.sub_point(source).angle();
        let arrowhead = directed.then(|| Arrowhead::new(end, direction, self.arrow_size));
        let label_anchor = has_label.then(|| {
            let middle = start.midpoint(end);
            Point::new(middle.x(), middle.y() - LABEL_OFFSET)
        });

        Some(EdgeGeometry {
            start,
            end,
            arrowhead,
            label_anchor,
        })
    }
}
