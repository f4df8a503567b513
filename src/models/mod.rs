//! Domain model types for dispatch planning.
//!
//! Provides the core abstractions: 2D points, transport loads with pickup
//! and dropoff coordinates, routes as ordered load sequences, and the
//! dispatch plan that partitions all loads across routes.

mod load;
mod plan;
mod point;
mod route;

pub use load::Load;
pub use plan::DispatchPlan;
pub use point::Point;
pub use route::Route;
