//! Concrete fact changes, one logical edit per type.
//!
//! Every change follows the same protocol: resolve the live working copy
//! (never trust an externally held reference), unlink dependents with
//! variable-changed pairs, swap edited fact lists in as fresh copies inside
//! fact-added/removed pairs, and finish by re-triggering the listeners.

mod add_vehicle;
mod add_visit;
mod change_vehicle_capacity;
mod clear_depot;
mod remove_vehicle;
mod remove_visit;
mod set_depot;

pub use add_vehicle::AddVehicle;
pub use add_visit::AddVisit;
pub use change_vehicle_capacity::ChangeVehicleCapacity;
pub use clear_depot::ClearDepot;
pub use remove_vehicle::RemoveVehicle;
pub use remove_visit::RemoveVisit;
pub use set_depot::SetDepot;

use fleetroute_core::{FleetRouteError, Result};
use fleetroute_director::PlanDirector;

/// Detaches every visit on `vehicle_id`'s chain, walking the whole suffix.
///
/// Each detach is wrapped in a variable-changed pair so the listeners clear
/// the matching shadow pointers as the walk goes. Bounded by the plan's
/// visit count; running past it means the chain loops.
pub(crate) fn detach_chain(director: &mut dyn PlanDirector, vehicle_id: i64) -> Result<()> {
    let limit = director.working_plan().visit_count();
    let mut next = director
        .working_plan()
        .vehicle(vehicle_id)
        .and_then(|v| v.next_visit());

    let mut steps = 0;
    while let Some(visit_id) = next {
        if steps >= limit {
            return Err(FleetRouteError::BrokenChain { vehicle_id, limit });
        }
        steps += 1;

        director.before_variable_changed(visit_id, "previous_standstill");
        let visit = director
            .working_plan_mut()
            .visit_mut(visit_id)
            .ok_or(FleetRouteError::InconsistentChain { visit_id })?;
        next = visit.next_visit();
        visit.set_previous_standstill(None);
        director.after_variable_changed(visit_id, "previous_standstill");
    }
    Ok(())
}
