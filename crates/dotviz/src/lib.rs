//! dotviz - Render a subset of the Graphviz DOT language to SVG.
//!
//! Parsing, layout and SVG emission for simple DOT graphs. Nodes are placed
//! on a circle, edges are drawn as straight clipped segments, and the output
//! is a self-contained SVG document.
//!
//! # Example
//!
//! ```
//! use dotviz::{RenderOptions, render};
//!
//! let svg = render("digraph G { a -> b; }", &RenderOptions::default()).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"class="edge""#));
//! ```

pub mod config;
pub mod export;
pub mod layout;
pub mod routing;

mod error;

pub use dotviz_core::{attributes, color, geometry, graph, shape};

pub use error::DotvizError;

use std::str::FromStr;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, Scene, svg::SvgEmitter};
use graph::Graph;
use layout::{CircularLayout, LayoutEngine};
use routing::EdgeRouter;

/// Output formats produced natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
}

impl FromStr for OutputFormat {
    type Err = DotvizError;

    /// Parses a format name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("svg") {
            Ok(Self::Svg)
        } else {
            Err(DotvizError::UnsupportedFormat(s.to_string()))
        }
    }
}

/// Options accepted by [`RenderBackend::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new("svg")
    }
}

impl RenderOptions {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Replaces the requested output format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Anything that turns DOT source into an image description.
///
/// Hosts depend on this trait rather than on [`Renderer`] so that another
/// backend can be substituted.
pub trait RenderBackend {
    /// Renders `source` in the format requested by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`DotvizError::UnsupportedFormat`] for any format the backend
    /// does not produce.
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, DotvizError>;
}

/// Builder for parsing and rendering DOT graphs.
///
/// # Examples
///
/// ```
/// use dotviz::{Renderer, config::AppConfig};
///
/// let renderer = Renderer::new(AppConfig::default());
///
/// let graph = renderer.parse("graph { a -- b; }");
/// let svg = renderer.render_svg(&graph).unwrap();
///
/// assert!(!svg.contains("<polygon"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse DOT source into a graph.
    ///
    /// Parsing never fails; unrecognized statements are dropped.
    pub fn parse(&self, source: &str) -> Graph {
        info!(source_len = source.len(); "Parsing graph");

        let graph = dotviz_parser::parse(source);

        debug!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count();
            "Graph parsed"
        );
        trace!(graph:?; "Parsed graph");
        graph
    }

    /// Render a graph to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`DotvizError::Config`] if the renderer's configuration is
    /// invalid.
    pub fn render_svg(&self, graph: &Graph) -> Result<String, DotvizError> {
        self.config.validate().map_err(DotvizError::Config)?;

        info!(graph_id = graph.id(), kind = graph.kind().keyword(); "Laying out graph");
        let positions = CircularLayout::from_config(self.config.layout()).layout(graph);

        let router = EdgeRouter::from_style(self.config.style());
        let directed = graph.kind().is_directed();
        let geometries = graph
            .edges()
            .iter()
            .map(|edge| {
                let source = positions.get(edge.source())?;
                let target = positions.get(edge.target())?;
                router.route(*source, *target, directed, edge.label().is_some())
            })
            .collect();

        let scene = Scene::new(graph, positions, geometries);
        let svg = SvgEmitter::new(self.config.clone()).export(&scene);

        info!(svg_len = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}

impl RenderBackend for Renderer {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, DotvizError> {
        // The format is checked before any parsing work happens.
        match options.format().parse::<OutputFormat>()? {
            OutputFormat::Svg => {
                let graph = self.parse(source);
                self.render_svg(&graph)
            }
        }
    }
}

/// Render DOT source with the default configuration.
///
/// # Errors
///
/// Returns [`DotvizError::UnsupportedFormat`] unless `options` requests
/// `svg`.
///
/// # Examples
///
/// ```
/// use dotviz::{DotvizError, RenderOptions, render};
///
/// let err = render("digraph { a -> b; }", &RenderOptions::new("png")).unwrap_err();
/// assert!(matches!(err, DotvizError::UnsupportedFormat(_)));
/// ```
pub fn render(source: &str, options: &RenderOptions) -> Result<String, DotvizError> {
    Renderer::default().render(source, options)
}
