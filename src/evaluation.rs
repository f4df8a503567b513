//! Route distance, budget checking, and plan cost.

use crate::config::SolverConfig;
use crate::models::{DispatchPlan, Load, Point, Route};

/// Evaluates routes and plans against a fixed load list and configuration.
///
/// A route's distance is depot-anchored and strictly sequential:
/// depot → pickup₁ → dropoff₁ → pickup₂ → … → dropoffₙ → depot, with no
/// reordering of the given stop sequence.
///
/// # Examples
///
/// ```
/// use load_dispatch::config::SolverConfig;
/// use load_dispatch::evaluation::PlanEvaluator;
/// use load_dispatch::models::{Load, Point};
///
/// let loads = vec![Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 4.0))];
/// let config = SolverConfig::default();
/// let evaluator = PlanEvaluator::new(&loads, &config);
///
/// // depot → (3,4) → (3,4) → depot
/// assert!((evaluator.route_distance(&[0]) - 10.0).abs() < 1e-10);
/// ```
pub struct PlanEvaluator<'a> {
    loads: &'a [Load],
    config: &'a SolverConfig,
}

impl<'a> PlanEvaluator<'a> {
    /// Creates an evaluator for the given problem data.
    pub fn new(loads: &'a [Load], config: &'a SolverConfig) -> Self {
        Self { loads, config }
    }

    /// Number of loads in the problem.
    pub fn num_loads(&self) -> usize {
        self.loads.len()
    }

    /// Total driving distance of a route over the given stop sequence.
    pub fn route_distance(&self, stops: &[usize]) -> f64 {
        self.chain_distance(stops.iter().copied())
    }

    /// Driving distance of the route formed by serving `front`'s stops and
    /// then `back`'s stops, without materializing the concatenation.
    ///
    /// Used for merge-candidate checks.
    pub fn chained_distance(&self, front: &[usize], back: &[usize]) -> f64 {
        self.chain_distance(front.iter().chain(back.iter()).copied())
    }

    fn chain_distance(&self, stops: impl Iterator<Item = usize>) -> f64 {
        let depot = Point::origin();
        let mut distance = 0.0;
        let mut current = depot;
        for index in stops {
            let load = &self.loads[index];
            distance += current.distance_to(load.pickup());
            distance += load.pickup().distance_to(load.dropoff());
            current = load.dropoff();
        }
        distance + current.distance_to(depot)
    }

    /// Converts a route distance to driving time in minutes.
    pub fn route_minutes(&self, distance: f64) -> f64 {
        distance * self.config.minutes_per_distance_unit()
    }

    /// Returns `true` if a route of the given distance fits the budget.
    ///
    /// The comparison is inclusive: a route whose driving time equals the
    /// budget exactly is accepted.
    pub fn within_budget(&self, distance: f64) -> bool {
        self.route_minutes(distance) <= self.config.max_route_minutes()
    }

    /// Builds a route from a stop sequence, computing and caching its distance.
    pub fn build_route(&self, stops: Vec<usize>) -> Route {
        let distance = self.route_distance(&stops);
        let mut route = Route::from_stops(stops);
        route.set_total_distance(distance);
        route
    }

    /// Total plan cost: fixed cost per route times route count, plus the
    /// summed route distances.
    pub fn plan_cost(&self, plan: &DispatchPlan) -> f64 {
        self.config.fixed_cost_per_route() * plan.num_routes() as f64 + plan.total_distance()
    }
}
