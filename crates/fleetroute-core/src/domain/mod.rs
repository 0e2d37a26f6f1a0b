//! Domain model for the live routing plan
//!
//! The model follows the chained-route convention: every assigned visit
//! points back at its predecessor through `previous_standstill` (the genuine
//! planning variable), and every standstill carries the inverse `next_visit`
//! shadow pointer maintained by the director layer.

mod chain;
mod depot;
mod location;
mod plan;
mod standstill;
mod vehicle;
mod visit;

pub mod factory;

pub use chain::{rebuild_next_visit_shadows, route_travel_time_millis, ChainWalk};
pub use depot::PlanningDepot;
pub use location::PlanningLocation;
pub use plan::RoutingPlan;
pub use standstill::Standstill;
pub use vehicle::PlanningVehicle;
pub use visit::PlanningVisit;
