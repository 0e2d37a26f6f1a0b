//! Installs or moves the depot.

use tracing::debug;

use fleetroute_core::domain::factory;
use fleetroute_core::{PlanningLocation, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

/// Installs the depot at the given location, replacing any previous depot.
///
/// Every vehicle is re-pointed at the new depot: while a depot exists, no
/// vehicle may be depot-less.
#[derive(Debug)]
pub struct SetDepot {
    location: PlanningLocation,
}

impl SetDepot {
    pub fn new(location: PlanningLocation) -> Self {
        Self { location }
    }
}

impl FactChange for SetDepot {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        let depot = factory::depot(self.location.clone());
        let depot_id = depot.id();
        let replacing = director.working_plan().depot().is_some();

        if replacing {
            director.before_fact_changed(FactKind::Depot, depot_id);
            director.working_plan_mut().set_depot(Some(depot));
            director.after_fact_changed(FactKind::Depot, depot_id);
        } else {
            director.before_fact_added(FactKind::Depot, depot_id);
            director.working_plan_mut().set_depot(Some(depot));
            director.after_fact_added(FactKind::Depot, depot_id);
        }

        let vehicle_ids: Vec<i64> = director
            .working_plan()
            .vehicles()
            .iter()
            .map(|v| v.id())
            .collect();
        for vehicle_id in vehicle_ids {
            director.before_fact_changed(FactKind::Vehicle, vehicle_id);
            if let Some(vehicle) = director.working_plan_mut().vehicle_mut(vehicle_id) {
                vehicle.set_depot(Some(depot_id));
            }
            director.after_fact_changed(FactKind::Vehicle, vehicle_id);
        }

        director.trigger_variable_listeners();
        debug!(depot_id, replacing, "set depot");
        Ok(())
    }
}
