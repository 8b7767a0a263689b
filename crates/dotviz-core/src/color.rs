//! CSS color validation for dotviz configuration.
//!
//! Graph attributes such as `color` or `bgcolor` are passed through to the
//! output verbatim, so the renderer never rejects a drawing because of an
//! odd color name. [`Color`] is used where a value must be known-good up
//! front, such as the configured canvas background.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotviz_core::color::Color;
    ///
    /// assert!(Color::new("#ff0000").is_ok());
    /// assert!(Color::new("white").is_ok());
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str.trim()) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}
