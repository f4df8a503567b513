//! Two-variant orchestration.
//!
//! The savings construction is run twice — once with the clustering bias
//! applied to the savings values, once without — each over an independently
//! computed savings list. Both plans are costed and the cheaper one is kept;
//! on an exact tie the biased plan wins. The two runs share nothing mutable
//! and execute concurrently.

use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::evaluation::PlanEvaluator;
use crate::merge::merge_routes;
use crate::models::{DispatchPlan, Load};
use crate::savings::compute_savings;

/// Builds a dispatch plan for the given loads.
///
/// Deterministic: identical loads and configuration always produce an
/// identical plan, independent of thread count. Zero loads yield an empty
/// plan with cost 0; a single load yields one singleton route.
///
/// # Examples
///
/// ```
/// use load_dispatch::config::SolverConfig;
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::solver::solve;
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let plan = solve(&loads, &SolverConfig::default());
/// assert_eq!(plan.num_routes(), 1);
/// assert!((plan.total_cost() - 540.0).abs() < 1e-10);
/// ```
pub fn solve(loads: &[Load], config: &SolverConfig) -> DispatchPlan {
    if loads.is_empty() {
        return DispatchPlan::new();
    }

    let (biased, unbiased) = rayon::join(
        || run_variant(loads, config, true),
        || run_variant(loads, config, false),
    );
    debug!(
        biased_cost = biased.total_cost(),
        unbiased_cost = unbiased.total_cost(),
        "variant costs"
    );

    let plan = pick_cheaper(biased, unbiased);
    info!(
        routes = plan.num_routes(),
        cost = plan.total_cost(),
        "selected plan"
    );
    plan
}

/// Runs one full savings construction pass and costs the result.
pub fn run_variant(loads: &[Load], config: &SolverConfig, cluster_bias: bool) -> DispatchPlan {
    let evaluator = PlanEvaluator::new(loads, config);
    let savings = compute_savings(loads, cluster_bias);
    let mut plan = merge_routes(&savings, &evaluator);
    let cost = evaluator.plan_cost(&plan);
    plan.set_total_cost(cost);
    debug!(
        cluster_bias,
        routes = plan.num_routes(),
        cost,
        "variant complete"
    );
    plan
}

/// Exact cost tie goes to the biased plan.
fn pick_cheaper(biased: DispatchPlan, unbiased: DispatchPlan) -> DispatchPlan {
    if biased.total_cost() <= unbiased.total_cost() {
        biased
    } else {
        unbiased
    }
}
