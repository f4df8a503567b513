//! # load-dispatch
//!
//! Savings-based dispatch planning: assigns point-to-point transport loads
//! (pickup → dropoff) to a minimal-cost set of driver routes under a
//! per-route driving-time budget.
//!
//! The pipeline is a Clarke-Wright-style savings construction run twice —
//! once with a clustering bias applied to the savings values, once without —
//! with the cheaper plan kept.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Route, DispatchPlan)
//! - [`config`] — Solver configuration (route budget, driver cost, unit conversion)
//! - [`savings`] — Pairwise savings scoring with optional clustering bias
//! - [`evaluation`] — Route distance, budget checking, and plan cost
//! - [`merge`] — Greedy savings-ordered route merging
//! - [`solver`] — Two-variant orchestration and plan selection
//! - [`input`] — Problem file parsing

pub mod config;
pub mod evaluation;
pub mod input;
pub mod merge;
pub mod models;
pub mod savings;
pub mod solver;
