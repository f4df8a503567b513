//! Route type.

use super::Load;

/// An ordered sequence of loads served by a single driver.
///
/// Stops are indices into the problem's load list; each load is visited
/// pickup-then-dropoff, loads in sequence order, starting and ending at
/// the depot. No index repeats within a route.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::Route;
///
/// let route = Route::singleton(3);
/// assert_eq!(route.stops(), &[3]);
/// assert_eq!(route.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<usize>,
    total_distance: f64,
}

impl Route {
    /// Creates a route serving a single load.
    pub fn singleton(load_index: usize) -> Self {
        Self::from_stops(vec![load_index])
    }

    /// Creates a route from an ordered stop sequence.
    ///
    /// Distance starts at zero; it is computed and cached by the evaluator.
    pub fn from_stops(stops: Vec<usize>) -> Self {
        Self {
            stops,
            total_distance: 0.0,
        }
    }

    /// Load indices in visitation order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route serves no loads.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total driving distance of this route (set by the evaluator).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sets the cached total distance.
    pub fn set_total_distance(&mut self, distance: f64) {
        self.total_distance = distance;
    }

    /// Maps the stop indices to original load numbers, in visitation order.
    pub fn load_numbers(&self, loads: &[Load]) -> Vec<u64> {
        self.stops.iter().map(|&i| loads[i].id()).collect()
    }
}
