//! 2D point type.

use serde::{Deserialize, Serialize};

/// An immutable 2D coordinate.
///
/// All geometry in this crate is straight-line: the only metric is
/// Euclidean distance, and the depot is fixed at the origin.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert!((p.distance_to(Point::origin()) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The depot location: every route starts and ends here.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
