//! Configuration types for dotviz rendering.
//!
//! This module provides configuration structures that control the canvas,
//! the circular layout and the drawing style. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field has
//! a default, so partial configurations are accepted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Output document dimensions.
//! - [`LayoutConfig`] - Center and radius of the circular layout.
//! - [`StyleConfig`] - Background color, node radius and arrowhead size.
//!
//! # Example
//!
//! ```
//! # use dotviz::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.canvas().width(), 600.0);
//! assert_eq!(config.style().background_color(), "white");
//! ```

use serde::Deserialize;

use dotviz_core::{
    color::Color,
    geometry::{Point, Size},
};

/// Top-level configuration combining canvas, layout and style settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            canvas,
            layout,
            style,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that the configuration can produce a drawing.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found: a non-positive or
    /// non-finite dimension, or a background color that does not parse.
    pub fn validate(&self) -> Result<(), String> {
        ensure_positive("canvas.width", self.canvas.width)?;
        ensure_positive("canvas.height", self.canvas.height)?;
        ensure_finite("layout.center_x", self.layout.center_x)?;
        ensure_finite("layout.center_y", self.layout.center_y)?;
        ensure_non_negative("layout.radius", self.layout.radius)?;
        ensure_positive("style.node_radius", self.style.node_radius)?;
        ensure_non_negative("style.arrow_size", self.style.arrow_size)?;

        Color::new(&self.style.background_color)
            .map(|_| ())
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

fn ensure_finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("`{name}` must be a finite number, got {value}"))
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<(), String> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(format!("`{name}` must be greater than zero, got {value}"))
    }
}

fn ensure_non_negative(name: &str, value: f32) -> Result<(), String> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(format!("`{name}` must not be negative, got {value}"))
    }
}

/// Dimensions of the output document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Canvas dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Placement parameters for the circular layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    center_x: f32,
    center_y: f32,
    radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            center_y: 200.0,
            radius: 200.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a layout configuration for a circle around `center`.
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center_x: center.x(),
            center_y: center.y(),
            radius,
        }
    }

    /// Center of the layout circle.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Radius of the layout circle.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Visual styling configuration for rendered graphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background as a CSS color string, used when the graph sets no
    /// `bgcolor`.
    background_color: String,

    /// Radius of every node; edges are clipped by it.
    node_radius: f32,

    /// Length of the arrowhead sides.
    arrow_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: String::from("white"),
            node_radius: 20.0,
            arrow_size: 6.0,
        }
    }
}

impl StyleConfig {
    pub fn new(background_color: impl Into<String>, node_radius: f32, arrow_size: f32) -> Self {
        Self {
            background_color: background_color.into(),
            node_radius,
            arrow_size,
        }
    }

    /// Returns the configured background color string.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }
}
