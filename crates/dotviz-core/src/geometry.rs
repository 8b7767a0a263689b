//! Points, vectors and canvas sizes.
//!
//! Coordinates follow SVG: the origin is the top-left corner of the canvas,
//! X grows to the right and Y grows downward. Angles are radians measured
//! from the positive X axis, so a positive angle turns clockwise on screen:
//!
//! ```text
//!   (0,0) ──────► +X        angle 0    → east
//!     │                     angle π/2  → south
//!     ▼                     angle π    → west
//!    +Y
//! ```

/// A position on the canvas, or a 2D vector between two positions.
///
/// # Examples
///
/// ```
/// # use dotviz_core::geometry::Point;
/// let source = Point::new(100.0, 200.0);
/// let target = Point::new(500.0, 200.0);
///
/// assert_eq!(source.distance(target), 400.0);
/// assert_eq!(source.midpoint(target), Point::new(300.0, 200.0));
/// assert_eq!(source.move_toward(target, 20.0), Point::new(120.0, 200.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference, i.e. the vector from `other` to `self`.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn midpoint(self, other: Point) -> Self {
        self.add_point(other).scale(0.5)
    }

    /// Length of this point taken as a vector from the origin.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).length()
    }

    /// Direction of this point taken as a vector from the origin.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// The point `distance` away in direction `angle`.
    ///
    /// A negative `distance` moves the opposite way.
    ///
    /// ```
    /// # use dotviz_core::geometry::Point;
    /// let center = Point::new(300.0, 200.0);
    /// assert_eq!(center.polar_offset(200.0, 0.0), Point::new(500.0, 200.0));
    /// ```
    pub fn polar_offset(self, distance: f32, angle: f32) -> Self {
        Self::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    /// The point `distance` along the straight line from `self` to `target`.
    ///
    /// Moving further than `target` overshoots it. When both points coincide
    /// there is no direction and `self` is returned.
    pub fn move_toward(self, target: Point, distance: f32) -> Self {
        let delta = target.sub_point(self);
        let length = delta.length();
        if length == 0.0 {
            return self;
        }
        self.add_point(delta.scale(distance / length))
    }
}

/// Width and height of a drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// SVG `viewBox` value covering this size from the origin.
    ///
    /// ```
    /// # use dotviz_core::geometry::Size;
    /// assert_eq!(Size::new(600.0, 400.0).view_box(), "0 0 600 400");
    /// ```
    pub fn view_box(self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
