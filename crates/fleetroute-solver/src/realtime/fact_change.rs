//! Fact change trait and the inbound request shape.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use fleetroute_core::{PlanningLocation, Result};
use fleetroute_director::PlanDirector;

use super::changes;

/// A single logical, atomic structural edit to the working plan.
///
/// Applied exactly once inside the optimizer's serialized context. A change
/// either fails during resolution, leaving the plan untouched, or runs to
/// completion; there is no rollback for a change that fails midway.
pub trait FactChange: Send + Debug {
    /// Applies this change to the director's working plan.
    ///
    /// Implementations resolve the live working copy first, surround every
    /// edit with the director's notification pairs and finish with
    /// `trigger_variable_listeners`.
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()>;
}

/// A boxed fact change for type-erased queueing.
pub type BoxedFactChange = Box<dyn FactChange>;

/// Wire-facing description of a fact change.
///
/// Carries only the identity and attributes needed to resolve the affected
/// entity against the live working copy; it never holds a reference into
/// anyone's in-memory plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FactChangeRequest {
    AddVehicle {
        vehicle_id: i64,
        capacity: i32,
    },
    RemoveVehicle {
        vehicle_id: i64,
    },
    ChangeVehicleCapacity {
        vehicle_id: i64,
        capacity: i32,
    },
    AddVisit {
        location: PlanningLocation,
        #[serde(default = "default_demand")]
        demand: i32,
    },
    RemoveVisit {
        visit_id: i64,
    },
    SetDepot {
        location: PlanningLocation,
    },
    ClearDepot {
        depot_id: i64,
    },
}

fn default_demand() -> i32 {
    1
}

impl FactChangeRequest {
    /// Converts the request into an applicable change.
    pub fn into_change(self) -> BoxedFactChange {
        match self {
            Self::AddVehicle {
                vehicle_id,
                capacity,
            } => Box::new(changes::AddVehicle::new(vehicle_id, capacity)),
            Self::RemoveVehicle { vehicle_id } => Box::new(changes::RemoveVehicle::new(vehicle_id)),
            Self::ChangeVehicleCapacity {
                vehicle_id,
                capacity,
            } => Box::new(changes::ChangeVehicleCapacity::new(vehicle_id, capacity)),
            Self::AddVisit { location, demand } => {
                Box::new(changes::AddVisit::new(location, demand))
            }
            Self::RemoveVisit { visit_id } => Box::new(changes::RemoveVisit::new(visit_id)),
            Self::SetDepot { location } => Box::new(changes::SetDepot::new(location)),
            Self::ClearDepot { depot_id } => Box::new(changes::ClearDepot::new(depot_id)),
        }
    }
}
