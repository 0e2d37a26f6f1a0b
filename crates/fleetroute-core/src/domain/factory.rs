//! Factory helpers for building plans and their entities.
//!
//! These are the creation paths shared by fact changes and tests: vehicles
//! default to zero capacity, visits take their id from their location and
//! default to a demand of one.

use super::{
    PlanningDepot, PlanningLocation, PlanningVehicle, PlanningVisit, RoutingPlan, Standstill,
};

/// Creates a vehicle with zero capacity and no depot.
pub fn vehicle(id: i64) -> PlanningVehicle {
    vehicle_with_capacity(id, 0)
}

/// Creates a vehicle with the given capacity and no depot.
pub fn vehicle_with_capacity(id: i64, capacity: i32) -> PlanningVehicle {
    PlanningVehicle::new(id, capacity)
}

/// Creates an unassigned visit at `location` with a demand of one.
pub fn visit(location: PlanningLocation) -> PlanningVisit {
    visit_with_demand(location, 1)
}

/// Creates an unassigned visit at `location` with the given demand.
pub fn visit_with_demand(location: PlanningLocation, demand: i32) -> PlanningVisit {
    PlanningVisit::new(location.id(), location, demand)
}

/// Creates a depot at `location`, reusing the location id as the depot id.
pub fn depot(location: PlanningLocation) -> PlanningDepot {
    PlanningDepot::new(location.id(), location)
}

/// A plan with no vehicles, no depot and no visits.
pub fn empty_plan() -> RoutingPlan {
    RoutingPlan::empty()
}

/// Builds a plan from vehicles, an optional depot and visits.
///
/// Every vehicle is pointed at the depot when one is given, keeping the
/// depot pairing invariant from the start.
pub fn plan_from_visits(
    mut vehicles: Vec<PlanningVehicle>,
    depot: Option<PlanningDepot>,
    visits: Vec<PlanningVisit>,
) -> RoutingPlan {
    if let Some(depot) = &depot {
        for vehicle in &mut vehicles {
            vehicle.set_depot(Some(depot.id()));
        }
    }
    let mut plan = RoutingPlan::empty();
    plan.set_vehicle_list(vehicles);
    plan.set_depot(depot);
    plan.set_visit_list(visits);
    plan
}

/// Builds a plan whose visits are derived from bare locations.
pub fn plan_from_locations(
    vehicles: Vec<PlanningVehicle>,
    depot: Option<PlanningDepot>,
    locations: Vec<PlanningLocation>,
) -> RoutingPlan {
    let visits = locations.into_iter().map(visit).collect();
    plan_from_visits(vehicles, depot, visits)
}

/// Chains `visit_ids` onto `vehicle_id` in order, setting both the genuine
/// links and the shadow pointers.
///
/// Test setup helper: production code routes all chain edits through the
/// director so the notification protocol fires.
pub fn link_chain(plan: &mut RoutingPlan, vehicle_id: i64, visit_ids: &[i64]) {
    let mut previous = Standstill::Vehicle(vehicle_id);
    for &visit_id in visit_ids {
        if let Some(visit) = plan.visit_mut(visit_id) {
            visit.set_previous_standstill(Some(previous));
        }
        match previous {
            Standstill::Vehicle(id) => {
                if let Some(vehicle) = plan.vehicle_mut(id) {
                    vehicle.set_next_visit(Some(visit_id));
                }
            }
            Standstill::Visit(id) => {
                if let Some(visit) = plan.visit_mut(id) {
                    visit.set_next_visit(Some(visit_id));
                }
            }
        }
        previous = Standstill::Visit(visit_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_from_visits_points_vehicles_at_the_depot() {
        let depot_location = PlanningLocation::new(1, 1.0, 1.0);
        let plan = plan_from_visits(
            vec![vehicle(10), vehicle(20)],
            Some(depot(depot_location)),
            vec![],
        );

        for vehicle in plan.vehicles() {
            assert_eq!(vehicle.depot(), Some(1));
        }
    }

    #[test]
    fn link_chain_sets_genuine_links_and_shadows() {
        let mut plan = plan_from_locations(
            vec![vehicle(1)],
            None,
            vec![
                PlanningLocation::new(2, 2.0, 2.0),
                PlanningLocation::new(3, 3.0, 3.0),
            ],
        );

        link_chain(&mut plan, 1, &[2, 3]);

        assert_eq!(
            plan.visit(2).unwrap().previous_standstill(),
            Some(Standstill::Vehicle(1))
        );
        assert_eq!(
            plan.visit(3).unwrap().previous_standstill(),
            Some(Standstill::Visit(2))
        );
        assert_eq!(plan.vehicle(1).unwrap().next_visit(), Some(2));
        assert_eq!(plan.visit(2).unwrap().next_visit(), Some(3));
        assert!(plan.visit(3).unwrap().next_visit().is_none());
    }

    #[test]
    fn visit_takes_its_id_from_the_location() {
        let v = visit(PlanningLocation::new(42, 0.0, 0.0));
        assert_eq!(v.id(), 42);
        assert_eq!(v.demand(), 1);
        assert!(!v.is_assigned());
    }
}
