//! FleetRoute Core - domain model for live route planning
//!
//! This crate provides the fundamental abstractions for FleetRoute:
//! - Domain entities: vehicles, visits, the depot and their locations
//! - The working plan and the chain relation that encodes routes
//! - Chain walking with corruption detection
//! - The error taxonomy shared by all crates

pub mod domain;
pub mod error;

pub use domain::{
    ChainWalk, PlanningDepot, PlanningLocation, PlanningVehicle, PlanningVisit, RoutingPlan,
    Standstill,
};
pub use error::{FleetRouteError, Result};
