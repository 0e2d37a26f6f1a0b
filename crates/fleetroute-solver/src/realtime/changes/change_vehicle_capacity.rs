//! Changes a vehicle's capacity in place.

use fleetroute_core::{FleetRouteError, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

/// Updates the capacity of an existing vehicle.
#[derive(Debug)]
pub struct ChangeVehicleCapacity {
    vehicle_id: i64,
    capacity: i32,
}

impl ChangeVehicleCapacity {
    pub fn new(vehicle_id: i64, capacity: i32) -> Self {
        Self {
            vehicle_id,
            capacity,
        }
    }
}

impl FactChange for ChangeVehicleCapacity {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        if director.working_plan().vehicle(self.vehicle_id).is_none() {
            return Err(FleetRouteError::UnknownFact {
                kind: "vehicle",
                id: self.vehicle_id,
            });
        }

        director.before_fact_changed(FactKind::Vehicle, self.vehicle_id);
        if let Some(vehicle) = director.working_plan_mut().vehicle_mut(self.vehicle_id) {
            vehicle.set_capacity(self.capacity);
        }
        director.after_fact_changed(FactKind::Vehicle, self.vehicle_id);

        director.trigger_variable_listeners();
        Ok(())
    }
}
