//! Removes the depot, unassigning every route first.

use tracing::debug;

use fleetroute_core::{FleetRouteError, Result};
use fleetroute_director::{FactKind, PlanDirector};

use crate::realtime::FactChange;

use super::detach_chain;

/// Removes the depot from the working plan.
///
/// All routes are anchored at the depot, so every vehicle's chain is
/// detached and every depot reference cleared before the depot itself goes.
#[derive(Debug)]
pub struct ClearDepot {
    depot_id: i64,
}

impl ClearDepot {
    pub fn new(depot_id: i64) -> Self {
        Self { depot_id }
    }
}

impl FactChange for ClearDepot {
    fn apply(&self, director: &mut dyn PlanDirector) -> Result<()> {
        // Resolve the live depot; clearing a depot the plan does not have is
        // a consistency error on the submitter's side.
        match director.working_plan().depot() {
            Some(depot) if depot.id() == self.depot_id => {}
            _ => {
                return Err(FleetRouteError::UnknownFact {
                    kind: "depot",
                    id: self.depot_id,
                });
            }
        }

        let vehicle_ids: Vec<i64> = director
            .working_plan()
            .vehicles()
            .iter()
            .map(|v| v.id())
            .collect();

        for &vehicle_id in &vehicle_ids {
            detach_chain(director, vehicle_id)?;
        }

        for vehicle_id in vehicle_ids {
            director.before_fact_changed(FactKind::Vehicle, vehicle_id);
            if let Some(vehicle) = director.working_plan_mut().vehicle_mut(vehicle_id) {
                vehicle.set_depot(None);
            }
            director.after_fact_changed(FactKind::Vehicle, vehicle_id);
        }

        director.before_fact_removed(FactKind::Depot, self.depot_id);
        director.working_plan_mut().set_depot(None);
        director.after_fact_removed(FactKind::Depot, self.depot_id);

        director.trigger_variable_listeners();
        debug!(depot_id = self.depot_id, "cleared depot");
        Ok(())
    }
}
