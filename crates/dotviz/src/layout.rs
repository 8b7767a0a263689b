//! Node placement.
//!
//! A [`LayoutEngine`] assigns a canvas position to every node of a graph.
//! Positions are computed fresh for each render and depend only on the
//! nodes and their discovery order, never on edges or attributes.

use std::f64::consts::TAU;

use indexmap::IndexMap;
use log::{debug, trace};

use dotviz_core::{geometry::Point, graph::Graph};

use crate::config::LayoutConfig;

/// Node id to position, in node discovery order.
pub type Positions<'g> = IndexMap<&'g str, Point>;

/// A node placement strategy.
pub trait LayoutEngine {
    /// Computes a position for every node of `graph`.
    fn layout<'g>(&self, graph: &'g Graph) -> Positions<'g>;
}

/// Places nodes evenly on a circle.
///
/// The node at discovery index `i` of `n` sits at angle `2π·i/n`, measured
/// clockwise on screen from the positive X axis:
///
/// ```text
///              i=3
///               ●
///          ╱         ╲
///   i=2  ●      +      ●  i=0
///          ╲         ╱
///               ●
///              i=1
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    center: Point,
    radius: f32,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl CircularLayout {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.center(), config.radius())
    }

    /// Position of discovery index `index` among `count` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dotviz::layout::CircularLayout;
    /// # use dotviz_core::geometry::Point;
    /// let layout = CircularLayout::default();
    ///
    /// assert_eq!(layout.position(0, 1), Point::new(500.0, 200.0));
    /// assert_eq!(layout.position(1, 2), Point::new(100.0, 200.0));
    /// ```
    pub fn position(&self, index: usize, count: usize) -> Point {
        // Angles are computed in f64 so that the quarter points land on whole
        // coordinates once narrowed to f32.
        let angle = TAU * index as f64 / count.max(1) as f64;
        let radius = f64::from(self.radius);
        Point::new(
            (f64::from(self.center.x()) + radius * angle.cos()) as f32,
            (f64::from(self.center.y()) + radius * angle.sin()) as f32,
        )
    }
}

impl LayoutEngine for CircularLayout {
    fn layout<'g>(&self, graph: &'g Graph) -> Positions<'g> {
        let count = graph.node_count();
        debug!(node_count = count, radius = self.radius; "Computing circular layout");

        graph
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                let position = self.position(index, count);
                trace!(node_id = node.id(), x = position.x(), y = position.y(); "Placed node");
                (node.id(), position)
            })
            .collect()
    }
}
