//! Adds a vehicle to the working plan.

use tracing::debug;

use fleetroute_core::domain::factory;
use fleetroute_core::Result;
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

/// Adds a vehicle with the given capacity.
///
/// The new vehicle is pointed at the current depot, if any, so the depot
/// pairing invariant keeps holding.
#[derive(Debug)]
pub struct AddVehicle {
    vehicle_id: i64,
    capacity: i32,
}

impl AddVehicle {
    pub fn new(vehicle_id: i64, capacity: i32) -> Self {
        Self {
            vehicle_id,
            capacity,
        }
    }
}

impl FactChange for AddVehicle {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        let depot_id = director.working_plan().depot().map(|d| d.id());
        let mut vehicle = factory::vehicle_with_capacity(self.vehicle_id, self.capacity);
        vehicle.set_depot(depot_id);

        director.before_fact_added(FactKind::Vehicle, self.vehicle_id);
        let plan = director.working_plan_mut();
        let mut vehicles = plan.vehicles().to_vec();
        vehicles.push(vehicle);
        plan.set_vehicle_list(vehicles);
        director.after_fact_added(FactKind::Vehicle, self.vehicle_id);

        director.trigger_variable_listeners();
        debug!(vehicle_id = self.vehicle_id, "added vehicle");
        Ok(())
    }
}
