//! Solver configuration.

/// Default per-route driving-time budget, in minutes (12 hours).
pub const DEFAULT_MAX_ROUTE_MINUTES: f64 = 720.0;

/// Default fixed cost attributed to each additional driver.
pub const DEFAULT_FIXED_COST_PER_ROUTE: f64 = 500.0;

/// Default conversion from one unit of Euclidean distance to minutes of
/// driving time.
pub const DEFAULT_MINUTES_PER_DISTANCE_UNIT: f64 = 1.0;

/// Economic and budget parameters for the dispatch solver.
///
/// Route distances are geometric; the budget is expressed in minutes. The
/// two are related through `minutes_per_distance_unit`, which defaults to
/// 1.0 (one distance unit takes one minute to drive).
///
/// # Examples
///
/// ```
/// use load_dispatch::config::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_route_minutes(), 720.0);
/// assert_eq!(config.fixed_cost_per_route(), 500.0);
///
/// assert!(SolverConfig::new(0.0, 500.0, 1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    max_route_minutes: f64,
    fixed_cost_per_route: f64,
    minutes_per_distance_unit: f64,
}

impl SolverConfig {
    /// Creates a configuration.
    ///
    /// Returns `None` unless `max_route_minutes` and
    /// `minutes_per_distance_unit` are finite and positive and
    /// `fixed_cost_per_route` is finite and non-negative.
    pub fn new(
        max_route_minutes: f64,
        fixed_cost_per_route: f64,
        minutes_per_distance_unit: f64,
    ) -> Option<Self> {
        if !max_route_minutes.is_finite() || max_route_minutes <= 0.0 {
            return None;
        }
        if !fixed_cost_per_route.is_finite() || fixed_cost_per_route < 0.0 {
            return None;
        }
        if !minutes_per_distance_unit.is_finite() || minutes_per_distance_unit <= 0.0 {
            return None;
        }
        Some(Self {
            max_route_minutes,
            fixed_cost_per_route,
            minutes_per_distance_unit,
        })
    }

    /// Upper bound on a single route's driving time, in minutes.
    pub fn max_route_minutes(&self) -> f64 {
        self.max_route_minutes
    }

    /// Cost of allocating one additional driver.
    pub fn fixed_cost_per_route(&self) -> f64 {
        self.fixed_cost_per_route
    }

    /// Minutes of driving time per unit of Euclidean distance.
    pub fn minutes_per_distance_unit(&self) -> f64 {
        self.minutes_per_distance_unit
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_route_minutes: DEFAULT_MAX_ROUTE_MINUTES,
            fixed_cost_per_route: DEFAULT_FIXED_COST_PER_ROUTE,
            minutes_per_distance_unit: DEFAULT_MINUTES_PER_DISTANCE_UNIT,
        }
    }
}
