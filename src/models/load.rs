//! Transport load type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A single transport job: drive to `pickup`, then to `dropoff`.
///
/// The id is the load number from the problem file, used verbatim in
/// output. Loads are created once from input and never mutated.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
///
/// let load = Load::new(7, Point::new(1.0, 2.0), Point::new(3.0, 4.0));
/// assert_eq!(load.id(), 7);
/// assert_eq!(load.pickup().x(), 1.0);
/// assert_eq!(load.dropoff().y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: u64,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: u64, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Load number (positive, unique per problem, reported verbatim).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Pickup coordinate.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff coordinate.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }
}
