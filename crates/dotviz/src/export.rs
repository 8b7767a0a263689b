//! Export functionality for dotviz graphs.
//!
//! This module provides the [`Exporter`] trait that turns a laid-out
//! [`Scene`] into output text. It is the final stage of the rendering
//! pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Graph Model
//!     ↓ layout
//! Node Positions
//!     ↓ routing
//! Edge Geometry (Scene)
//!     ↓ export (this module)
//! SVG Markup
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgEmitter`]

/// SVG export backend.
pub mod svg;

use dotviz_core::{geometry::Point, graph::Graph};

use crate::{layout::Positions, routing::EdgeGeometry};

/// A graph together with everything needed to draw it.
///
/// `edges` runs parallel to [`Graph::edges`]; an entry is `None` for an edge
/// that is not drawn.
#[derive(Debug)]
pub struct Scene<'g> {
    graph: &'g Graph,
    positions: Positions<'g>,
    edges: Vec<Option<EdgeGeometry>>,
}

impl<'g> Scene<'g> {
    pub fn new(
        graph: &'g Graph,
        positions: Positions<'g>,
        edges: Vec<Option<EdgeGeometry>>,
    ) -> Self {
        Self {
            graph,
            positions,
            edges,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Position of a node, if it was laid out.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn edge_geometries(&self) -> &[Option<EdgeGeometry>] {
        &self.edges
    }
}

/// Abstraction for export backends.
pub trait Exporter {
    /// Serializes a scene into the backend's output format.
    fn export(&self, scene: &Scene<'_>) -> String;
}
