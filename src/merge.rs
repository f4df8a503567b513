//! Greedy savings-ordered route merging.
//!
//! Starts with one singleton route per load, then walks the savings entries
//! in their given order. For each entry (i, j) whose loads sit on different
//! routes, the candidate route is route-of(i) followed by route-of(j); it is
//! committed iff its driving time fits the budget. Rejected entries are
//! skipped permanently — a single pass, no backtracking.
//!
//! Route ownership is tracked with a union-find over route slots (one slot
//! per load) with path compression, so replacing two routes with their merge
//! is O(1) amortized instead of a linear scan.

use crate::evaluation::PlanEvaluator;
use crate::models::DispatchPlan;
use crate::savings::SavingsEntry;

/// An arena of route slots with union-find ownership tracking.
///
/// Load `i` starts in slot `i`; merging repoints the absorbed slot's parent
/// at the surviving slot and moves its stops over. `find` resolves a load
/// index to its current representative slot.
#[derive(Debug)]
pub struct RouteRegistry {
    parent: Vec<usize>,
    stops: Vec<Vec<usize>>,
}

impl RouteRegistry {
    /// Creates a registry with one singleton route per load.
    pub fn new(num_loads: usize) -> Self {
        Self {
            parent: (0..num_loads).collect(),
            stops: (0..num_loads).map(|i| vec![i]).collect(),
        }
    }

    /// Resolves a load index to its representative route slot,
    /// compressing the path walked.
    pub fn find(&mut self, load_index: usize) -> usize {
        let mut root = load_index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = load_index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Stops of the route currently held in `slot`.
    pub fn stops(&self, slot: usize) -> &[usize] {
        &self.stops[slot]
    }

    /// Merges route `from` onto the end of route `into`.
    ///
    /// Both arguments must be distinct representative slots.
    pub fn merge(&mut self, into: usize, from: usize) {
        debug_assert_ne!(into, from);
        let mut moved = std::mem::take(&mut self.stops[from]);
        self.stops[into].append(&mut moved);
        self.parent[from] = into;
    }

    /// Consumes the registry, yielding the surviving routes in slot order.
    pub fn into_routes(self) -> impl Iterator<Item = Vec<usize>> {
        self.stops.into_iter().filter(|stops| !stops.is_empty())
    }
}

/// Merges singleton routes into multi-load routes following the savings order.
///
/// The returned plan partitions all load indices: every index appears in
/// exactly one route. Route distances are computed and cached; the plan's
/// total cost is left for the caller to set.
///
/// # Examples
///
/// ```
/// use load_dispatch::config::SolverConfig;
/// use load_dispatch::evaluation::PlanEvaluator;
/// use load_dispatch::merge::merge_routes;
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::savings::compute_savings;
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let config = SolverConfig::default();
/// let evaluator = PlanEvaluator::new(&loads, &config);
/// let savings = compute_savings(&loads, false);
///
/// let plan = merge_routes(&savings, &evaluator);
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.routes()[0].stops(), &[0, 1]);
/// ```
pub fn merge_routes(savings: &[SavingsEntry], evaluator: &PlanEvaluator) -> DispatchPlan {
    let mut registry = RouteRegistry::new(evaluator.num_loads());

    for entry in savings {
        let ri = registry.find(entry.i);
        let rj = registry.find(entry.j);
        if ri == rj {
            continue;
        }
        let candidate = evaluator.chained_distance(registry.stops(ri), registry.stops(rj));
        if evaluator.within_budget(candidate) {
            registry.merge(ri, rj);
        }
    }

    let mut plan = DispatchPlan::new();
    for stops in registry.into_routes() {
        plan.add_route(evaluator.build_route(stops));
    }
    plan
}
