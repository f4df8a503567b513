//! Dispatch plan type.

use super::Route;

/// A complete dispatch plan: one route per driver.
///
/// The routes partition the problem's loads — every load index appears in
/// exactly one route.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{DispatchPlan, Route};
///
/// let mut plan = DispatchPlan::new();
/// plan.add_route(Route::singleton(0));
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.num_assigned(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPlan {
    routes: Vec<Route>,
    total_cost: f64,
}

impl DispatchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Adds a route to this plan.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Routes in this plan, in emission order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (drivers used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads assigned across all routes.
    pub fn num_assigned(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Total driving distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Total plan cost (set by the evaluator).
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sets the total cost.
    pub fn set_total_cost(&mut self, cost: f64) {
        self.total_cost = cost;
    }
}

impl Default for DispatchPlan {
    fn default() -> Self {
        Self::new()
    }
}
