//! Removes a vehicle and unassigns its entire route.

use tracing::debug;

use fleetroute_core::{FleetRouteError, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

use super::detach_chain;

/// Removes a vehicle from the working plan.
///
/// Every visit on the vehicle's chain is detached first, walking the whole
/// suffix, so no visit is left pointing at a vanished standstill.
#[derive(Debug)]
pub struct RemoveVehicle {
    vehicle_id: i64,
}

impl RemoveVehicle {
    pub fn new(vehicle_id: i64) -> Self {
        Self { vehicle_id }
    }
}

impl FactChange for RemoveVehicle {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        // Resolve the live working copy of the vehicle.
        if director.working_plan().vehicle(self.vehicle_id).is_none() {
            return Err(FleetRouteError::UnknownFact {
                kind: "vehicle",
                id: self.vehicle_id,
            });
        }

        // Unassign every visit this vehicle was going to serve.
        detach_chain(director, self.vehicle_id)?;

        // Swap in a fresh copy of the vehicle list without the vehicle.
        director.before_fact_removed(FactKind::Vehicle, self.vehicle_id);
        let plan = director.working_plan_mut();
        let mut vehicles = plan.vehicles().to_vec();
        vehicles.retain(|v| v.id() != self.vehicle_id);
        plan.set_vehicle_list(vehicles);
        director.after_fact_removed(FactKind::Vehicle, self.vehicle_id);

        director.trigger_variable_listeners();
        debug!(vehicle_id = self.vehicle_id, "removed vehicle");
        Ok(())
    }
}
